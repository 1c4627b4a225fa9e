//! Decision variants, their legal options and their transitions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use tracing::info;

use crate::cards::{Card, UNBOUNDED};
use crate::core::{EngineError, PlayerId, Result};
use crate::effects::Resources;
use crate::game::Game;
use crate::zones::PlayerState;

use super::Seats;

/// The kind of choice a seat owes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionKind {
    /// Buy one supply card or pass.
    Buy,
    /// Play one action from hand or pass.
    Act,
    /// Trash between `min` and `max` cards from hand.
    Trash { min: usize, max: usize },
    /// Discard between `min` and `max` cards from hand.
    Discard { min: usize, max: usize },
    /// Gain the named card if the supply allows.
    Gain(Card),
}

impl DecisionKind {
    /// Whether the answer is a list of cards rather than a single option.
    #[must_use]
    pub fn is_multi(self) -> bool {
        matches!(self, DecisionKind::Trash { .. } | DecisionKind::Discard { .. })
    }

    /// Arity bounds for multi-card decisions.
    #[must_use]
    pub fn bounds(self) -> Option<(usize, usize)> {
        match self {
            DecisionKind::Trash { min, max } | DecisionKind::Discard { min, max } => Some((min, max)),
            _ => None,
        }
    }
}

impl fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn range(f: &mut fmt::Formatter<'_>, name: &str, min: usize, max: usize) -> fmt::Result {
            if max == UNBOUNDED {
                write!(f, "{}({}..)", name, min)
            } else {
                write!(f, "{}({}..={})", name, min, max)
            }
        }

        match *self {
            DecisionKind::Buy => f.write_str("Buy"),
            DecisionKind::Act => f.write_str("Act"),
            DecisionKind::Trash { min, max } => range(f, "Trash", min, max),
            DecisionKind::Discard { min, max } => range(f, "Discard", min, max),
            DecisionKind::Gain(card) => write!(f, "Gain({})", card),
        }
    }
}

/// A collaborator's answer to a decision.
///
/// Single-option decisions take `Pass` or `Card`. Multi-card decisions take
/// `Cards`, with `Card` read as a one-card list and `Pass` as an empty one.
/// `Gain` has a single implicit target: `Pass` and `Card(target)` both
/// accept it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Pass,
    Card(Card),
    Cards(Vec<Card>),
}

impl From<Option<Card>> for Choice {
    fn from(option: Option<Card>) -> Self {
        option.map_or(Choice::Pass, Choice::Card)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Pass => f.write_str("pass"),
            Choice::Card(card) => write!(f, "{}", card),
            Choice::Cards(cards) => write!(f, "{:?}", cards),
        }
    }
}

/// A decision raised against a snapshot for one seat.
///
/// Borrowing the snapshot keeps the decision tied to the exact state its
/// options were computed from.
#[derive(Clone, Copy, Debug)]
pub struct Decision<'g> {
    game: &'g Game,
    seat: PlayerId,
    kind: DecisionKind,
}

impl<'g> Decision<'g> {
    #[must_use]
    pub fn new(game: &'g Game, seat: PlayerId, kind: DecisionKind) -> Self {
        Self { game, seat, kind }
    }

    #[must_use]
    pub fn game(&self) -> &'g Game {
        self.game
    }

    #[must_use]
    pub fn seat(&self) -> PlayerId {
        self.seat
    }

    #[must_use]
    pub fn kind(&self) -> DecisionKind {
        self.kind
    }

    /// The deciding seat's state.
    #[must_use]
    pub fn state(&self) -> &'g PlayerState {
        self.game.state_of(self.seat)
    }

    /// Every legal option; `None` is the no-op.
    ///
    /// - `Buy`: no-op, then affordable supply cards by (cost, name)
    /// - `Act`: no-op, then the action cards in hand
    /// - `Trash`: hand cards, curses first, then by cost
    /// - `Discard`: hand cards, curses first, then pure victory cards,
    ///   then by cost
    /// - `Gain`: nothing; the target is implicit
    #[must_use]
    pub fn choices(&self) -> SmallVec<[Option<Card>; 8]> {
        let state = self.state();
        let mut choices = SmallVec::new();

        match self.kind {
            DecisionKind::Buy => {
                let value = state.hand_value();
                choices.push(None);
                choices.extend(
                    self.game
                        .card_choices()
                        .into_iter()
                        .filter(|card| card.cost <= value)
                        .map(Some),
                );
            }
            DecisionKind::Act => {
                choices.push(None);
                choices.extend(state.hand.iter().copied().filter(|c| c.is_action()).map(Some));
            }
            DecisionKind::Trash { .. } => {
                let mut hand: Vec<Card> = state.hand.iter().copied().collect();
                hand.sort_by_key(|c| (!c.is_curse(), c.cost));
                choices.extend(hand.into_iter().map(Some));
            }
            DecisionKind::Discard { .. } => {
                let mut hand: Vec<Card> = state.hand.iter().copied().collect();
                hand.sort_by_key(|c| (!c.is_curse(), !c.is_pure_victory(), c.cost));
                choices.extend(hand.into_iter().map(Some));
            }
            DecisionKind::Gain(_) => {}
        }

        choices
    }

    /// `choices()` without the no-op.
    #[must_use]
    pub fn choice_cards(&self) -> Vec<Card> {
        self.choices().into_iter().flatten().collect()
    }

    /// Validate `choice` and apply it, returning the successor snapshot.
    ///
    /// Playing an action can raise further decisions, so the seat table is
    /// threaded through.
    pub fn choose(&self, choice: Choice, seats: &mut dyn Seats) -> Result<Game> {
        let game = self.game;
        let seat = self.seat;
        let state = self.state();

        match (self.kind, choice) {
            (DecisionKind::Buy, Choice::Pass) => {
                info!(parent: game.span(), %seat, coins = state.hand_value(), "buys nothing");
                Ok(game.change_state(seat, Resources::buys(-state.buys)))
            }
            (DecisionKind::Buy, Choice::Card(card)) => {
                if !self.choices().contains(&Some(card)) {
                    return Err(self.illegal(&Choice::Card(card)));
                }
                info!(
                    parent: game.span(),
                    %seat,
                    %card,
                    coins = state.hand_value(),
                    buys = state.buys,
                    "buys"
                );
                game.buy(seat, card)
            }
            (DecisionKind::Act, Choice::Pass) => {
                Ok(game.change_state(seat, Resources::actions(-state.actions)))
            }
            (DecisionKind::Act, Choice::Card(card)) => {
                if !self.choices().contains(&Some(card)) {
                    return Err(self.illegal(&Choice::Card(card)));
                }
                info!(parent: game.span(), %seat, %card, "plays");
                let played = game.acting_as(seat).play_action(seat, card)?;
                let after = card.perform_action(&played, seats)?;
                Ok(after.with_pointer_of(game))
            }
            (DecisionKind::Trash { min, max }, choice) => {
                let cards = self.selection(choice, min, max)?;
                info!(parent: game.span(), %seat, cards = ?cards, "trashes");
                cards
                    .into_iter()
                    .try_fold(game.clone(), |game, card| game.trash_from_hand(seat, card))
            }
            (DecisionKind::Discard { min, max }, choice) => {
                let cards = self.selection(choice, min, max)?;
                info!(parent: game.span(), %seat, cards = ?cards, "discards");
                cards
                    .into_iter()
                    .try_fold(game.clone(), |game, card| game.discard_from_hand(seat, card))
            }
            (DecisionKind::Gain(target), Choice::Pass) => Ok(game.gain_for(seat, target)),
            (DecisionKind::Gain(target), Choice::Card(card)) if card == target => {
                Ok(game.gain_for(seat, target))
            }
            (_, choice) => Err(self.illegal(&choice)),
        }
    }

    /// Read a multi-card answer and check its arity and that every card is
    /// in hand, counting duplicates.
    fn selection(&self, choice: Choice, min: usize, max: usize) -> Result<Vec<Card>> {
        let cards = match &choice {
            Choice::Pass => Vec::new(),
            Choice::Card(card) => vec![*card],
            Choice::Cards(cards) => cards.clone(),
        };

        if cards.len() < min || cards.len() > max {
            return Err(self.illegal(&choice));
        }

        let mut hand: Vec<Card> = self.state().hand.iter().copied().collect();
        for card in &cards {
            match hand.iter().position(|c| c == card) {
                Some(index) => {
                    hand.swap_remove(index);
                }
                None => return Err(self.illegal(&choice)),
            }
        }

        Ok(cards)
    }

    fn illegal(&self, choice: &Choice) -> EngineError {
        EngineError::IllegalSelection {
            decision: self.kind.to_string(),
            selection: choice.to_string(),
        }
    }
}

impl fmt::Display for Decision<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        write!(
            f,
            "{} for {} (actions={}, buys={}, coins={}, hand={:?})",
            self.kind, self.seat, state.actions, state.buys, state.hand_value(), state.hand
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{
        COPPER, CURSE, DUCHY, ESTATE, GOLD, MILITIA, PROVINCE, SILVER, SMITHY, VILLAGE,
    };
    use crate::decision::{DecisionMaker, Solo};
    use crate::game::GameBuilder;

    struct Passive;

    impl DecisionMaker for Passive {
        fn name(&self) -> &str {
            "passive"
        }

        fn decide(&mut self, _decision: &Decision<'_>) -> Choice {
            Choice::Pass
        }
    }

    fn game_with(state: PlayerState) -> Game {
        let game = GameBuilder::new().seats(2).seed(11).build().unwrap();
        game.replace_state(PlayerId(0), state)
    }

    fn hand(cards: &[Card]) -> PlayerState {
        PlayerState::default().with_hand(cards).with_counters(1, 1, 0)
    }

    #[test]
    fn test_buy_choices_sorted_and_affordable() {
        let game = game_with(hand(&[SILVER, COPPER]));
        let decision = Decision::new(&game, PlayerId(0), DecisionKind::Buy);

        let choices = decision.choices();
        assert_eq!(choices[0], None);
        assert_eq!(
            decision.choice_cards(),
            vec![COPPER, CURSE, ESTATE, SILVER]
        );
    }

    #[test]
    fn test_act_choices() {
        let game = game_with(hand(&[VILLAGE, COPPER, SMITHY]));
        let decision = Decision::new(&game, PlayerId(0), DecisionKind::Act);

        assert_eq!(decision.choices().as_slice(), &[None, Some(VILLAGE), Some(SMITHY)]);
    }

    #[test]
    fn test_multi_choice_ordering() {
        let game = game_with(hand(&[SILVER, DUCHY, COPPER, CURSE, MILITIA]));

        let trash = Decision::new(&game, PlayerId(0), DecisionKind::Trash { min: 0, max: 4 });
        assert_eq!(trash.choice_cards(), vec![CURSE, COPPER, SILVER, MILITIA, DUCHY]);

        let discard = Decision::new(&game, PlayerId(0), DecisionKind::Discard { min: 0, max: 4 });
        assert_eq!(discard.choice_cards(), vec![CURSE, DUCHY, COPPER, SILVER, MILITIA]);
    }

    #[test]
    fn test_buy_pass_spends_buys() {
        let game = game_with(hand(&[GOLD]));
        let decision = Decision::new(&game, PlayerId(0), DecisionKind::Buy);
        let mut passive = Passive;

        let after = decision.choose(Choice::Pass, &mut Solo(&mut passive)).unwrap();
        assert_eq!(after.state().buys, 0);
        assert_eq!(after.state().next_decision(), None);
    }

    #[test]
    fn test_buy_rejects_wrong_shape() {
        let game = game_with(hand(&[GOLD]));
        let decision = Decision::new(&game, PlayerId(0), DecisionKind::Buy);
        let mut passive = Passive;

        let err = decision
            .choose(Choice::Cards(vec![SILVER]), &mut Solo(&mut passive))
            .unwrap_err();
        assert!(matches!(err, EngineError::IllegalSelection { .. }));

        let err = decision
            .choose(Choice::Card(PROVINCE), &mut Solo(&mut passive))
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::IllegalSelection {
                decision: "Buy".to_string(),
                selection: "Province".to_string(),
            }
        );
    }

    #[test]
    fn test_act_pass_zeroes_actions() {
        let game = game_with(hand(&[SMITHY]).with_counters(2, 1, 0));
        let decision = Decision::new(&game, PlayerId(0), DecisionKind::Act);
        let mut passive = Passive;

        let after = decision.choose(Choice::Pass, &mut Solo(&mut passive)).unwrap();
        assert_eq!(after.state().actions, 0);
        assert_eq!(after.state().hand_size(), 1);
    }

    #[test]
    fn test_act_plays_card() {
        let state = hand(&[VILLAGE]).with_drawpile(&[GOLD]);
        let game = game_with(state);
        let decision = Decision::new(&game, PlayerId(0), DecisionKind::Act);
        let mut passive = Passive;

        let after = decision.choose(Choice::Card(VILLAGE), &mut Solo(&mut passive)).unwrap();
        let state = after.state();
        assert_eq!(state.tableau.iter().copied().collect::<Vec<_>>(), vec![VILLAGE]);
        assert_eq!(state.hand.iter().copied().collect::<Vec<_>>(), vec![GOLD]);
        assert_eq!(state.actions, 2);
    }

    #[test]
    fn test_act_plays_from_deciding_seat() {
        let game = game_with(hand(&[COPPER]))
            .replace_state(PlayerId(1), hand(&[VILLAGE]).with_drawpile(&[GOLD]));
        let decision = Decision::new(&game, PlayerId(1), DecisionKind::Act);
        let mut passive = Passive;

        let after = decision.choose(Choice::Card(VILLAGE), &mut Solo(&mut passive)).unwrap();
        let state = after.state_of(PlayerId(1));
        assert_eq!(state.tableau.iter().copied().collect::<Vec<_>>(), vec![VILLAGE]);
        assert_eq!(state.hand.iter().copied().collect::<Vec<_>>(), vec![GOLD]);
        assert_eq!(state.actions, 2);

        assert_eq!(after.state_of(PlayerId(0)), game.state_of(PlayerId(0)));
        assert_eq!(after.player_turn(), PlayerId(0));
    }

    #[test]
    fn test_multi_arity_and_membership() {
        let game = game_with(hand(&[COPPER, COPPER, ESTATE]));
        let discard = Decision::new(&game, PlayerId(0), DecisionKind::Discard { min: 2, max: 2 });
        let mut passive = Passive;
        let mut seats = Solo(&mut passive);

        assert!(discard.choose(Choice::Card(COPPER), &mut seats).is_err());
        assert!(discard.choose(Choice::Cards(vec![ESTATE, ESTATE]), &mut seats).is_err());
        assert!(discard.choose(Choice::Cards(vec![GOLD, COPPER]), &mut seats).is_err());

        let after = discard.choose(Choice::Cards(vec![COPPER, COPPER]), &mut seats).unwrap();
        assert_eq!(after.state().hand.iter().copied().collect::<Vec<_>>(), vec![ESTATE]);
        assert_eq!(after.state().discard.len(), 2);
    }

    #[test]
    fn test_trash_accepts_pass_when_optional() {
        let game = game_with(hand(&[COPPER]));
        let trash = Decision::new(&game, PlayerId(0), DecisionKind::Trash { min: 0, max: 4 });
        let mut passive = Passive;

        let after = trash.choose(Choice::Pass, &mut Solo(&mut passive)).unwrap();
        assert_eq!(after.state().hand_size(), 1);
        assert!(after.trash().is_empty());
    }

    #[test]
    fn test_gain_target_only() {
        let game = game_with(hand(&[]));
        let gain = Decision::new(&game, PlayerId(0), DecisionKind::Gain(CURSE));
        let mut passive = Passive;
        let mut seats = Solo(&mut passive);

        assert!(gain.choices().is_empty());
        assert!(gain.choose(Choice::Card(GOLD), &mut seats).is_err());

        let after = gain.choose(Choice::Pass, &mut seats).unwrap();
        assert_eq!(after.state().discard.iter().copied().collect::<Vec<_>>(), vec![CURSE]);
        assert_eq!(after.supply_count(CURSE), game.supply_count(CURSE) - 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(DecisionKind::Trash { min: 0, max: 4 }.to_string(), "Trash(0..=4)");
        assert_eq!(DecisionKind::Discard { min: 0, max: UNBOUNDED }.to_string(), "Discard(0..)");
        assert_eq!(Choice::Cards(vec![COPPER, ESTATE]).to_string(), "[Copper, Estate]");
        assert_eq!(Choice::from(None), Choice::Pass);
    }
}
