//! Stochastic rollouts over information-scrubbed copies.
//!
//! ## Key Types
//!
//! - `Simulator`: Owns the rollout RNG and span for one batch of rollouts
//! - `HandOutcome`: Coins and buys a simulated turn reached
//!
//! Rollouts never touch the snapshot they start from, and a rollout never
//! sees another seat's true draw order.

mod simulator;

pub use simulator::{HandOutcome, Simulator, SIMULATION_PILE_SIZE};
