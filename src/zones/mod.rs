//! Player zones and deck mechanics.
//!
//! ## Key Types
//!
//! - `PlayerState`: One seat's hand, draw pile, discard pile and tableau,
//!   plus the per-turn `actions`/`buys`/`coins` counters
//!
//! Every transition returns a new `PlayerState`; zones are `im::Vector`s so
//! the copy shares structure with its predecessor. Transitions that shuffle
//! take the `GameRng` explicitly.

pub mod player_state;

pub use player_state::{PlayerState, STARTING_DECK};
