//! Per-seat state: four zones and the turn counters.
//!
//! The draw pile's top is its front. The multiset union of the four zones is
//! the seat's whole deck and only shrinks when a card is trashed.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, COPPER, ESTATE};
use crate::core::{EngineError, GameRng, Result, DEFAULT_HAND_SIZE};
use crate::decision::DecisionKind;
use crate::effects::Resources;

/// Every seat's deck before the first shuffle.
pub const STARTING_DECK: [Card; 10] = [
    COPPER, COPPER, COPPER, COPPER, COPPER, COPPER, COPPER, ESTATE, ESTATE, ESTATE,
];

/// One seat's zones and counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub hand: Vector<Card>,
    pub drawpile: Vector<Card>,
    pub discard: Vector<Card>,
    /// Cards played this turn.
    pub tableau: Vector<Card>,
    pub actions: i32,
    pub buys: i32,
    pub coins: i32,
}

impl PlayerState {
    /// A fresh seat: the starting deck goes to the discard pile, then the
    /// opening hand is drawn, which shuffles it.
    #[must_use]
    pub fn initial_state(rng: &mut GameRng) -> Self {
        PlayerState::default()
            .with_discard(&STARTING_DECK)
            .next_turn(rng)
    }

    // === Builders ===

    #[must_use]
    pub fn with_hand(mut self, cards: &[Card]) -> Self {
        self.hand = cards.iter().copied().collect();
        self
    }

    /// Replace the draw pile; `cards[0]` is drawn first.
    #[must_use]
    pub fn with_drawpile(mut self, cards: &[Card]) -> Self {
        self.drawpile = cards.iter().copied().collect();
        self
    }

    #[must_use]
    pub fn with_discard(mut self, cards: &[Card]) -> Self {
        self.discard = cards.iter().copied().collect();
        self
    }

    #[must_use]
    pub fn with_tableau(mut self, cards: &[Card]) -> Self {
        self.tableau = cards.iter().copied().collect();
        self
    }

    #[must_use]
    pub fn with_counters(mut self, actions: i32, buys: i32, coins: i32) -> Self {
        self.actions = actions;
        self.buys = buys;
        self.coins = coins;
        self
    }

    // === Queries ===

    /// Every card the seat owns, in hand/tableau/drawpile/discard order.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hand
            .iter()
            .chain(self.tableau.iter())
            .chain(self.drawpile.iter())
            .chain(self.discard.iter())
            .copied()
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.hand.len() + self.tableau.len() + self.drawpile.len() + self.discard.len()
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Copies of each card type in the deck.
    #[must_use]
    pub fn card_counts(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for card in self.all_cards() {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    /// Coins available to spend: the `coins` counter plus treasure in hand.
    #[must_use]
    pub fn hand_value(&self) -> i32 {
        self.coins + self.hand.iter().map(|c| c.treasure.value(self)).sum::<i32>()
    }

    /// Victory points over the whole deck.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.all_cards().map(|c| c.vp.value(self)).sum()
    }

    /// Whether a defense card is in hand right now.
    #[must_use]
    pub fn is_defended(&self) -> bool {
        self.hand.iter().any(|c| c.is_defense())
    }

    /// Cards in hand with a reaction hook, in hand order.
    #[must_use]
    pub fn reactions(&self) -> Vec<Card> {
        self.hand.iter().copied().filter(|c| c.is_reaction()).collect()
    }

    #[must_use]
    pub fn actionable(&self) -> bool {
        self.actions > 0 && self.hand.iter().any(|c| c.is_action())
    }

    #[must_use]
    pub fn buyable(&self) -> bool {
        self.buys > 0
    }

    /// The decision this seat owes next in its own turn, if any.
    #[must_use]
    pub fn next_decision(&self) -> Option<DecisionKind> {
        if self.actionable() {
            Some(DecisionKind::Act)
        } else if self.buyable() {
            Some(DecisionKind::Buy)
        } else {
            None
        }
    }

    // === Transitions ===

    /// Apply counter deltas.
    #[must_use]
    pub fn change(&self, delta: Resources) -> Self {
        let mut state = self.clone();
        state.actions += delta.actions;
        state.buys += delta.buys;
        state.coins += delta.coins;
        state
    }

    /// Draw `n` cards from the top of the draw pile.
    ///
    /// When the draw pile runs out the discard pile is shuffled into a new
    /// one, but only if it has cards; otherwise the draw stops short.
    #[must_use]
    pub fn draw(&self, n: usize, rng: &mut GameRng) -> Self {
        let mut state = self.clone();
        let mut remaining = n;

        loop {
            let take = remaining.min(state.drawpile.len());
            let rest = state.drawpile.split_off(take);
            let top = std::mem::replace(&mut state.drawpile, rest);
            state.hand.append(top);
            remaining -= take;

            if remaining == 0 || state.discard.is_empty() {
                break;
            }

            let mut pool: Vec<Card> = state.discard.iter().copied().collect();
            rng.shuffle(&mut pool);
            state.drawpile = pool.into_iter().collect();
            state.discard = Vector::new();
        }

        state
    }

    /// Gain a card into the discard pile.
    #[must_use]
    pub fn gain(&self, card: Card) -> Self {
        let mut state = self.clone();
        state.discard.push_back(card);
        state
    }

    #[must_use]
    pub fn gain_cards(&self, cards: &[Card]) -> Self {
        let mut state = self.clone();
        state.discard.extend(cards.iter().copied());
        state
    }

    /// Move a card from hand to the tableau without spending an action.
    pub fn play_card(&self, card: Card) -> Result<Self> {
        let mut state = self.without_from_hand(card)?;
        state.tableau.push_back(card);
        Ok(state)
    }

    /// Play an action card, spending one action.
    pub fn play_action(&self, card: Card) -> Result<Self> {
        Ok(self.play_card(card)?.change(Resources::actions(-1)))
    }

    pub fn discard_card(&self, card: Card) -> Result<Self> {
        let mut state = self.without_from_hand(card)?;
        state.discard.push_back(card);
        Ok(state)
    }

    /// Remove a card from hand entirely. Recording it in the game's trash
    /// is the caller's job.
    pub fn trash_card(&self, card: Card) -> Result<Self> {
        self.without_from_hand(card)
    }

    /// End-of-turn cleanup: hand and tableau go to the discard pile, the
    /// counters reset and a new hand is drawn.
    #[must_use]
    pub fn next_turn(&self, rng: &mut GameRng) -> Self {
        let mut state = self.clone();
        let hand = std::mem::take(&mut state.hand);
        let tableau = std::mem::take(&mut state.tableau);
        state.discard.append(hand);
        state.discard.append(tableau);
        state
            .with_counters(1, 1, 0)
            .draw(DEFAULT_HAND_SIZE, rng)
    }

    fn without_from_hand(&self, card: Card) -> Result<Self> {
        let index = self
            .hand
            .index_of(&card)
            .ok_or_else(|| EngineError::CardNotInHand { card: card.to_string() })?;
        let mut state = self.clone();
        state.hand.remove(index);
        Ok(state)
    }

    // === Simulation ===

    /// Same state with the draw pile reshuffled. The seat knows what is in
    /// its draw pile, not the order.
    #[must_use]
    pub fn simulate_from_here(&self, rng: &mut GameRng) -> Self {
        let mut pool: Vec<Card> = self.drawpile.iter().copied().collect();
        rng.shuffle(&mut pool);
        let mut state = self.clone();
        state.drawpile = pool.into_iter().collect();
        state
    }

    /// A fresh turn over the whole deck with `extra` on top of the draw
    /// pile. Used to estimate what gaining `extra` would do.
    #[must_use]
    pub fn simulation_state(&self, extra: &[Card], rng: &mut GameRng) -> Self {
        let all: Vec<Card> = self.all_cards().collect();
        PlayerState::default()
            .with_drawpile(extra)
            .with_discard(&all)
            .with_counters(1, 1, 0)
            .draw(DEFAULT_HAND_SIZE, rng)
    }

    // === Analytics ===

    /// Coins per card. With `account_for_draws`, each +card reduces the
    /// card's weight in the denominator.
    #[must_use]
    pub fn money_density(&self, account_for_draws: bool) -> f64 {
        let (money, weight) = self.all_cards().fold((0i32, 0i64), |(money, weight), card| {
            let draws = if account_for_draws { card.cards as i64 } else { 0 };
            (money + card.coins + card.treasure.value(self), weight + 1 - draws)
        });
        if self.deck_size() == 0 {
            return 0.0;
        }
        f64::from(money) / (weight.max(1) as f64)
    }

    /// Expected hand size if every action in hand gets played.
    #[must_use]
    pub fn mean_hand_size(&self) -> f64 {
        let size = self.deck_size();
        if size == 0 {
            return DEFAULT_HAND_SIZE as f64;
        }
        let draws: usize = self.all_cards().filter(|c| c.is_action()).map(|c| c.cards).sum();
        let hands = size as f64 / DEFAULT_HAND_SIZE as f64;
        DEFAULT_HAND_SIZE as f64 + draws as f64 / hands
    }

    /// Expected action cards per hand.
    #[must_use]
    pub fn action_density(&self) -> f64 {
        let size = self.deck_size();
        if size == 0 {
            return 0.0;
        }
        let actions = self.all_cards().filter(|c| c.is_action()).count();
        (actions * DEFAULT_HAND_SIZE) as f64 / size as f64
    }

    #[must_use]
    pub fn mean_money_per_turn(&self) -> f64 {
        self.mean_hand_size() * self.money_density(false)
    }
}
