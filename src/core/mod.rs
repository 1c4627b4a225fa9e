//! Core engine types: seats, RNG, configuration, errors.
//!
//! Everything here is independent of the card model. Games are configured
//! through `GameConfig` and every fatal condition surfaces as an `EngineError`.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{
    supply_counts, GameConfig, DEFAULT_HAND_SIZE, DEFAULT_MAX_ROUNDS, KINGDOM_PILE_SIZE,
    MAX_SEATS, MIN_SEATS,
};
pub use error::{EngineError, Result};
