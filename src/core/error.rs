//! Engine error taxonomy.
//!
//! Every variant is fatal: the core never retries or silently recovers.
//! Collaborators that want to re-prompt must validate before answering.

use thiserror::Error;

/// Fatal engine errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A decision-maker returned something outside the decision's choices,
    /// or a multi-card selection broke the decision's arity.
    #[error("illegal selection {selection} for {decision}")]
    IllegalSelection { decision: String, selection: String },

    /// A zone transition referenced a card that is not in hand.
    #[error("{card} is not in hand")]
    CardNotInHand { card: String },

    /// A supply pile was decremented below zero (or never existed).
    #[error("supply of {card} is exhausted")]
    SupplyExhausted { card: String },

    /// Cards were created or destroyed outside a defined transition.
    #[error("card conservation violated: expected {expected} cards, found {actual}\n{diagnostic}")]
    CardConservation {
        expected: usize,
        actual: usize,
        diagnostic: String,
    },

    /// The game reached the round limit without ending.
    #[error("game has entered an infinite loop: reached round {rounds}")]
    RunawayGame { rounds: u32 },

    /// Setup asked for an unsupported number of seats.
    #[error("unsupported seat count {seats}")]
    InvalidSeatCount { seats: usize },

    /// Configuration referenced a card that is not in the catalogue.
    #[error("unknown card `{name}`")]
    UnknownCard { name: String },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;
