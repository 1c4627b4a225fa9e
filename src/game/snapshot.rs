//! `Game` snapshot: state, queries and single-step transitions.

use im::{OrdMap, Vector};
use tracing::{debug, debug_span, Span};

use crate::cards::{Card, PROVINCE};
use crate::core::{EngineError, GameRng, PlayerId, PlayerMap, Result, DEFAULT_MAX_ROUNDS};
use crate::effects::Resources;
use crate::zones::PlayerState;

/// Immutable game snapshot.
///
/// Uses `im` persistent structures so each transition shares structure with
/// its predecessor. A snapshot also carries the RNG state its next shuffle
/// will use, so the same snapshot always yields the same successor.
#[derive(Clone, Debug)]
pub struct Game {
    /// Seat states; index is seat order.
    pub(super) states: Vector<PlayerState>,
    /// Remaining supply per card, ordered for deterministic iteration.
    pub(super) supply: OrdMap<Card, u32>,
    pub(super) trash: Vector<Card>,
    /// Completed turns, across all seats.
    pub(super) turn: u32,
    /// Seat acting in a mini-turn, overriding `turn`.
    pub(super) mini_turn: Option<PlayerId>,
    pub(super) simulated: bool,
    /// Cards in play at setup; constant for the life of the game.
    pub(super) total_card_count: usize,
    /// Round limit for `play`.
    pub(super) max_rounds: u32,
    pub(super) rng: GameRng,
    pub(super) span: Span,
}

impl Game {
    /// Assemble a snapshot at turn 0, counting the cards it holds.
    pub(crate) fn from_parts(
        states: Vec<PlayerState>,
        supply: OrdMap<Card, u32>,
        rng: GameRng,
        span: Span,
        simulated: bool,
    ) -> Self {
        let states: Vector<PlayerState> = states.into_iter().collect();
        let total_card_count = states.iter().map(PlayerState::deck_size).sum::<usize>()
            + supply.values().map(|&n| n as usize).sum::<usize>();

        Self {
            states,
            supply,
            trash: Vector::new(),
            turn: 0,
            mini_turn: None,
            simulated,
            total_card_count,
            max_rounds: DEFAULT_MAX_ROUNDS,
            rng,
            span,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Full rounds completed.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.turn / self.num_players() as u32
    }

    /// The acting seat: the mini-turn seat if one is running, otherwise the
    /// seat whose turn it is.
    #[must_use]
    pub fn player_turn(&self) -> PlayerId {
        self.mini_turn
            .unwrap_or_else(|| PlayerId::from(self.turn as usize % self.num_players()))
    }

    /// The acting seat's state.
    #[must_use]
    pub fn state(&self) -> &PlayerState {
        self.state_of(self.player_turn())
    }

    #[must_use]
    pub fn state_of(&self, seat: PlayerId) -> &PlayerState {
        &self.states[seat.index()]
    }

    pub fn states(&self) -> impl Iterator<Item = (PlayerId, &PlayerState)> {
        self.states.iter().enumerate().map(|(i, s)| (PlayerId::from(i), s))
    }

    #[must_use]
    pub fn supply(&self) -> &OrdMap<Card, u32> {
        &self.supply
    }

    /// Cards left in a pile; 0 for cards not in the supply.
    #[must_use]
    pub fn supply_count(&self, card: Card) -> u32 {
        self.supply.get(&card).copied().unwrap_or(0)
    }

    /// Supply cards still available, by ascending cost then name.
    #[must_use]
    pub fn card_choices(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .supply
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&card, _)| card)
            .collect();
        cards.sort_by_key(|c| (c.cost, c.name));
        cards
    }

    #[must_use]
    pub fn trash(&self) -> &Vector<Card> {
        &self.trash
    }

    #[must_use]
    pub fn is_simulated(&self) -> bool {
        self.simulated
    }

    #[must_use]
    pub fn total_card_count(&self) -> usize {
        self.total_card_count
    }

    /// Round limit `play` runs under, set at setup.
    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Span all of this game's events are recorded under.
    #[must_use]
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Supply piles at zero, in supply order.
    #[must_use]
    pub fn exhausted_piles(&self) -> Vec<Card> {
        self.supply
            .iter()
            .filter(|&(_, &count)| count == 0)
            .map(|(&card, _)| card)
            .collect()
    }

    /// The Province pile is empty, or enough piles are: 3, or 4 with four
    /// or more seats.
    ///
    /// Four seats already need a fourth empty pile; "more than four seats"
    /// would end a four-seat game on the third.
    #[must_use]
    pub fn over(&self) -> bool {
        if self.supply_count(PROVINCE) == 0 {
            return true;
        }
        let threshold = if self.num_players() >= 4 { 4 } else { 3 };
        self.exhausted_piles().len() >= threshold
    }

    /// Every seat's score.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<i32> {
        PlayerMap::from_vec(self.states.iter().map(PlayerState::score).collect())
    }

    /// Cards currently accounted for across trash, seats and supply.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.trash.len()
            + self.states.iter().map(PlayerState::deck_size).sum::<usize>()
            + self.supply.values().map(|&n| n as usize).sum::<usize>()
    }

    /// Check that no card was created or destroyed since setup.
    pub fn check_conservation(&self) -> Result<()> {
        let actual = self.card_total();
        if actual == self.total_card_count {
            return Ok(());
        }

        let seats: Vec<String> = self
            .states()
            .map(|(seat, s)| {
                format!(
                    "{}: hand={:?} drawpile={:?} discard={:?} tableau={:?}",
                    seat, s.hand, s.drawpile, s.discard, s.tableau
                )
            })
            .collect();
        Err(EngineError::CardConservation {
            expected: self.total_card_count,
            actual,
            diagnostic: format!(
                "trash={:?}; {}; supply={:?}",
                self.trash,
                seats.join("; "),
                self.supply
            ),
        })
    }

    // === Transitions ===

    /// Replace one seat's state.
    #[must_use]
    pub fn replace_state(&self, seat: PlayerId, state: PlayerState) -> Game {
        let mut game = self.clone();
        game.states[seat.index()] = state;
        game
    }

    /// Transform one seat's state with access to the snapshot's RNG.
    fn update_state(
        &self,
        seat: PlayerId,
        f: impl FnOnce(&PlayerState, &mut GameRng) -> PlayerState,
    ) -> Game {
        let mut game = self.clone();
        let state = f(&self.states[seat.index()], &mut game.rng);
        game.states[seat.index()] = state;
        game
    }

    fn try_update_state(
        &self,
        seat: PlayerId,
        f: impl FnOnce(&PlayerState) -> Result<PlayerState>,
    ) -> Result<Game> {
        let state = f(self.state_of(seat))?;
        Ok(self.replace_state(seat, state))
    }

    #[must_use]
    pub fn change_state(&self, seat: PlayerId, delta: Resources) -> Game {
        self.update_state(seat, |state, _| state.change(delta))
    }

    #[must_use]
    pub fn change_current_state(&self, delta: Resources) -> Game {
        self.change_state(self.player_turn(), delta)
    }

    /// The acting seat draws `n` cards.
    #[must_use]
    pub fn current_draw_cards(&self, n: usize) -> Game {
        self.update_state(self.player_turn(), |state, rng| state.draw(n, rng))
    }

    /// Apply counter deltas and draw `cards` for every other seat, in seat
    /// order. No decisions are involved and defense does not apply.
    #[must_use]
    pub fn change_other_states(&self, delta: Resources, cards: usize) -> Game {
        self.transform_other_states(|state, rng| {
            let state = state.change(delta);
            if cards > 0 {
                state.draw(cards, rng)
            } else {
                state
            }
        })
    }

    /// Apply `f` to every other seat, in seat order after the acting seat.
    #[must_use]
    pub fn transform_other_states(
        &self,
        mut f: impl FnMut(&PlayerState, &mut GameRng) -> PlayerState,
    ) -> Game {
        let acting = self.player_turn();
        let n = self.num_players();
        let mut game = self.clone();
        let mut seat = acting.next(n);
        while seat != acting {
            game = game.update_state(seat, &mut f);
            seat = seat.next(n);
        }
        game
    }

    /// Play a card from the acting seat's hand without spending an action.
    pub fn current_play_card(&self, card: Card) -> Result<Game> {
        self.try_update_state(self.player_turn(), |state| state.play_card(card))
    }

    /// Play an action card from the acting seat's hand, spending an action.
    pub fn current_play_action(&self, card: Card) -> Result<Game> {
        self.play_action(self.player_turn(), card)
    }

    /// Play an action card from `seat`'s hand, spending one of its actions.
    pub fn play_action(&self, seat: PlayerId, card: Card) -> Result<Game> {
        self.try_update_state(seat, |state| state.play_action(card))
    }

    /// Take one card off its supply pile. The card is not placed anywhere.
    fn take_from_supply(&self, card: Card) -> Result<Game> {
        let count = self.supply_count(card);
        if count == 0 {
            return Err(EngineError::SupplyExhausted { card: card.to_string() });
        }
        let mut game = self.clone();
        game.supply.insert(card, count - 1);
        Ok(game)
    }

    /// Move one card from the supply to the trash.
    pub fn remove_card(&self, card: Card) -> Result<Game> {
        let mut game = self.take_from_supply(card)?;
        game.trash.push_back(card);
        debug!(parent: &self.span, %card, left = game.supply_count(card), "removed from supply");
        Ok(game)
    }

    /// Buy `card` for `seat`: one copy from the supply to the discard pile,
    /// one buy spent and its cost taken from the coins counter.
    pub fn buy(&self, seat: PlayerId, card: Card) -> Result<Game> {
        let game = self.take_from_supply(card)?;
        Ok(game.update_state(seat, |state, _| {
            state.gain(card).change(Resources::new(-card.cost, 0, -1))
        }))
    }

    /// `seat` gains `card` if the supply has one; otherwise nothing happens.
    #[must_use]
    pub fn gain_for(&self, seat: PlayerId, card: Card) -> Game {
        match self.take_from_supply(card) {
            Ok(game) => {
                debug!(parent: &self.span, %seat, %card, "gains");
                game.update_state(seat, |state, _| state.gain(card))
            }
            Err(_) => self.clone(),
        }
    }

    /// Trash a card from `seat`'s hand into the game's trash.
    pub fn trash_from_hand(&self, seat: PlayerId, card: Card) -> Result<Game> {
        let mut game = self.try_update_state(seat, |state| state.trash_card(card))?;
        game.trash.push_back(card);
        Ok(game)
    }

    pub fn discard_from_hand(&self, seat: PlayerId, card: Card) -> Result<Game> {
        self.try_update_state(seat, |state| state.discard_card(card))
    }

    /// Set or clear the mini-turn pointer.
    pub(super) fn at_mini_turn(&self, seat: Option<PlayerId>) -> Game {
        let mut game = self.clone();
        game.mini_turn = seat;
        game
    }

    /// This snapshot with `seat` acting, in a mini-turn if it is not
    /// already the acting seat.
    #[must_use]
    pub(crate) fn acting_as(&self, seat: PlayerId) -> Game {
        if seat == self.player_turn() {
            self.clone()
        } else {
            self.at_mini_turn(Some(seat))
        }
    }

    /// This snapshot with `origin`'s acting-seat pointer.
    #[must_use]
    pub(crate) fn with_pointer_of(&self, origin: &Game) -> Game {
        self.at_mini_turn(origin.mini_turn)
    }

    // === Simulation ===

    /// A copy holding nothing the acting seat should not know.
    ///
    /// The acting seat keeps its state but its draw pile is reshuffled.
    /// Every other seat becomes a fresh shuffle of its own cards. The copy
    /// draws all further randomness from a fork of `rng`.
    #[must_use]
    pub fn simulated_copy(&self, rng: &mut GameRng) -> Game {
        let acting = self.player_turn();
        let states = self
            .states()
            .map(|(seat, state)| {
                if seat == acting {
                    state.simulate_from_here(rng)
                } else {
                    state.simulation_state(&[], rng)
                }
            })
            .collect();

        Game {
            states,
            simulated: true,
            rng: rng.fork(),
            span: debug_span!(parent: &self.span, "simulation", seat = %acting),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CURSE, GOLD, MILITIA, SILVER, SMITHY, VILLAGE};
    use crate::game::GameBuilder;

    fn two_seats() -> Game {
        GameBuilder::new().seats(2).seed(5).kingdom(&[SMITHY, VILLAGE]).build().unwrap()
    }

    fn exhaust(game: &Game, card: Card) -> Game {
        let mut game = game.clone();
        while game.supply_count(card) > 0 {
            game = game.remove_card(card).unwrap();
        }
        game
    }

    #[test]
    fn test_turn_bookkeeping() {
        let mut game = two_seats();
        assert_eq!(game.player_turn(), PlayerId(0));
        assert_eq!(game.round(), 0);

        game.turn = 3;
        assert_eq!(game.player_turn(), PlayerId(1));
        assert_eq!(game.round(), 1);

        let mini = game.at_mini_turn(Some(PlayerId(0)));
        assert_eq!(mini.player_turn(), PlayerId(0));
        assert_eq!(mini.turn(), 3);
    }

    #[test]
    fn test_card_choices_order() {
        let game = two_seats();
        let names: Vec<_> = game.card_choices().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["Copper", "Curse", "Estate", "Silver", "Village", "Smithy", "Duchy", "Gold", "Province"]
        );
    }

    #[test]
    fn test_supply_underflow() {
        let game = exhaust(&two_seats(), SMITHY);
        assert_eq!(game.supply_count(SMITHY), 0);
        assert_eq!(
            game.remove_card(SMITHY).unwrap_err(),
            EngineError::SupplyExhausted { card: "Smithy".to_string() }
        );
        assert!(game.buy(PlayerId(0), MILITIA).is_err());
        game.check_conservation().unwrap();
    }

    #[test]
    fn test_gain_without_supply_is_noop() {
        let game = exhaust(&two_seats(), CURSE);
        let after = game.gain_for(PlayerId(1), CURSE);
        assert_eq!(after.state_of(PlayerId(1)), game.state_of(PlayerId(1)));
    }

    #[test]
    fn test_buy_moves_card() {
        let game = two_seats();
        let after = game.buy(PlayerId(0), SILVER).unwrap();

        assert_eq!(after.supply_count(SILVER), 39);
        assert_eq!(after.state().discard.last(), Some(&SILVER));
        assert_eq!(after.state().buys, 0);
        assert_eq!(after.state().coins, -3);
        after.check_conservation().unwrap();

        // The original snapshot is untouched.
        assert_eq!(game.supply_count(SILVER), 40);
        assert!(game.state().discard.is_empty());
    }

    #[test]
    fn test_over_thresholds() {
        let game = two_seats();
        assert!(!game.over());

        let two = exhaust(&exhaust(&game, SMITHY), VILLAGE);
        assert!(!two.over());
        assert!(exhaust(&two, CURSE).over());
        assert!(exhaust(&game, PROVINCE).over());
    }

    #[test]
    fn test_conservation_detects_drift() {
        let game = two_seats();
        game.check_conservation().unwrap();

        let forged = game.replace_state(PlayerId(0), game.state().gain(GOLD));
        let err = forged.check_conservation().unwrap_err();
        match err {
            EngineError::CardConservation { expected, actual, diagnostic } => {
                assert_eq!(actual, expected + 1);
                assert!(diagnostic.contains("Gold"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_others_draw_in_seat_order() {
        let game = GameBuilder::new().seats(3).seed(2).build().unwrap();
        let after = game.change_other_states(Resources::buys(1), 1);

        assert_eq!(after.state_of(PlayerId(0)), game.state_of(PlayerId(0)));
        for seat in [PlayerId(1), PlayerId(2)] {
            assert_eq!(after.state_of(seat).hand_size(), 6);
            assert_eq!(after.state_of(seat).buys, 2);
        }
    }

    #[test]
    fn test_trash_from_hand_records_trash() {
        let game = two_seats();
        let card = game.state().hand[0];
        let after = game.trash_from_hand(PlayerId(0), card).unwrap();

        assert_eq!(after.trash().len(), 1);
        assert_eq!(after.state().hand_size(), 4);
        after.check_conservation().unwrap();
        assert!(game.trash_from_hand(PlayerId(0), GOLD).is_err());
    }

    #[test]
    fn test_simulated_copy_keeps_cards() {
        let game = two_seats();
        let mut rng = GameRng::new(77);
        let copy = game.simulated_copy(&mut rng);

        assert!(copy.is_simulated());
        assert!(!game.is_simulated());
        assert_eq!(copy.state().hand, game.state().hand);
        assert_eq!(copy.state_of(PlayerId(1)).deck_size(), 10);
        copy.check_conservation().unwrap();
    }
}
