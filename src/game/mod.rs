//! The authoritative game snapshot and its orchestration.
//!
//! ## Key Types
//!
//! - `Game`: Immutable snapshot of every seat, the supply, the trash and the
//!   turn bookkeeping; every transition returns a new `Game`
//! - `GameBuilder`: Setup from seat count, kingdom and seed
//! - `GameResult`: Final scores of a completed game
//!
//! ## Turn flow
//!
//! `Game::run` repeatedly calls `take_turn`, which runs the acting seat's
//! decisions to completion, cleans up and advances the turn counter.
//! Attacks hand control to other seats through mini-turns without cleanup.

mod snapshot;
mod turn;
mod setup;
mod result;

pub use snapshot::Game;
pub use setup::GameBuilder;
pub use result::GameResult;
