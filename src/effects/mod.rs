//! Effect system for card play.
//!
//! Card abilities are data, not code:
//! - `Effect`: Closed set of effect ops the engine interprets
//! - `DecisionTemplate`: A decision to raise, sized against the target's hand
//! - `Resources`: Coins/actions/buys deltas
//!
//! `perform_action` applies a card's fixed play sequence (draw, deltas,
//! effects in order). `apply_effect` interprets a single op against a `Game`
//! snapshot and returns the successor.

mod effect;
mod resolver;

pub use effect::{DecisionTemplate, Effect, Resources};
pub use resolver::{apply_effect, perform_action};
