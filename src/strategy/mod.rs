//! Reference decision makers.
//!
//! - `BigMoney`: Buys treasure, then victory cards by fixed priority
//! - `HillClimb`: Greedy on victory cards, otherwise buys whatever the
//!   rollouts say improves its next hands most
//!
//! Both are ordinary `DecisionMaker`s; the engine treats them like any other
//! collaborator.

mod big_money;
mod hill_climb;

pub use big_money::BigMoney;
pub use hill_climb::{buying_value, HillClimb};
