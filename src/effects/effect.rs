//! Effect definitions.
//!
//! Effects are tagged ops so card behavior stays exhaustively matchable
//! and inspectable in tests.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::decision::DecisionKind;
use crate::zones::PlayerState;

/// Per-turn counter deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resources {
    pub coins: i32,
    pub actions: i32,
    pub buys: i32,
}

impl Resources {
    /// No change.
    pub const NONE: Resources = Resources::new(0, 0, 0);

    #[must_use]
    pub const fn new(coins: i32, actions: i32, buys: i32) -> Self {
        Self { coins, actions, buys }
    }

    #[must_use]
    pub const fn coins(coins: i32) -> Self {
        Self::new(coins, 0, 0)
    }

    #[must_use]
    pub const fn actions(actions: i32) -> Self {
        Self::new(0, actions, 0)
    }

    #[must_use]
    pub const fn buys(buys: i32) -> Self {
        Self::new(0, 0, buys)
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.coins == 0 && self.actions == 0 && self.buys == 0
    }
}

/// A decision raised by an effect, before it is bound to a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DecisionTemplate {
    /// Trash between `min` and `max` cards from hand.
    Trash { min: usize, max: usize },
    /// Discard between `min` and `max` cards from hand.
    Discard { min: usize, max: usize },
    /// Discard until `n` cards remain in hand.
    DiscardDownTo(usize),
    /// Gain the card if the supply has one left.
    Gain(Card),
}

impl DecisionTemplate {
    /// Bind the template to the hand it will be resolved against.
    ///
    /// Minimums are clamped to the hand size so the decision is always
    /// satisfiable.
    #[must_use]
    pub fn instantiate(self, state: &PlayerState) -> DecisionKind {
        let hand = state.hand_size();
        match self {
            DecisionTemplate::Trash { min, max } => DecisionKind::Trash {
                min: min.min(hand),
                max,
            },
            DecisionTemplate::Discard { min, max } => DecisionKind::Discard {
                min: min.min(hand),
                max,
            },
            DecisionTemplate::DiscardDownTo(n) => {
                let excess = hand.saturating_sub(n);
                DecisionKind::Discard { min: excess, max: excess }
            }
            DecisionTemplate::Gain(card) => DecisionKind::Gain(card),
        }
    }
}

/// An atomic effect op.
///
/// ## Acting-seat ops
///
/// - `Draw`: Draw cards into the acting seat's hand
/// - `Resources`: Apply counter deltas
/// - `Decide`: Raise a decision for the acting seat
/// - `DiscardThenDraw`: Discard any number, then draw that many
///
/// ## Other-seat ops
///
/// - `OthersDraw`: Every other seat draws, no decisions involved
/// - `OthersDecide`: Every other seat resolves a decision in a mini-turn;
///   with `attack` set, defended seats are skipped
///
/// ## Supply and composition
///
/// - `RemoveFromSupply`: Move one supply card to the trash
/// - `Composite`: Apply a list of effects in order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Effect {
    Draw(usize),
    Resources(Resources),
    OthersDraw(usize),
    Decide(DecisionTemplate),
    OthersDecide { template: DecisionTemplate, attack: bool },
    DiscardThenDraw { min: usize, max: usize },
    RemoveFromSupply(Card),
    Composite(&'static [Effect]),
}
