//! # rust-deckbuilder
//!
//! A deterministic deck-building card game engine built on immutable
//! snapshots.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: Every transition takes a `Game` and
//!    returns a new one. A published snapshot never changes, which is what
//!    lets rollouts run against a real game safely.
//!
//! 2. **Cards are data**: A card is a `const` descriptor whose effects are
//!    a closed set of ops the engine interprets.
//!
//! 3. **Closed decisions**: Every player choice is one of the
//!    `DecisionKind` variants, validated against its legal options before
//!    it is applied.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1)-ish cloning via `im-rs`.
//!
//! - **Seeded randomness**: Each snapshot carries the ChaCha8 state its next
//!   shuffle uses; rollouts fork their own stream per trial.
//!
//! - **Mini-turns**: Attacks move the acting-seat pointer through the other
//!   seats without running end-of-turn cleanup.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `cards`: Card descriptors and the built-in catalogue
//! - `effects`: Effect ops and their interpreter
//! - `zones`: Per-seat zones and deck mechanics
//! - `decision`: Decision variants and the collaborator traits
//! - `game`: The snapshot, setup and turn orchestration
//! - `simulation`: Information-scrubbed rollouts
//! - `strategy`: Reference decision makers
//!
//! ## Example
//!
//! ```
//! use rust_deckbuilder::cards::BASE_ACTIONS;
//! use rust_deckbuilder::decision::DecisionMaker;
//! use rust_deckbuilder::game::GameBuilder;
//! use rust_deckbuilder::strategy::BigMoney;
//!
//! let game = GameBuilder::new()
//!     .seats(2)
//!     .kingdom(&BASE_ACTIONS)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut seats: Vec<Box<dyn DecisionMaker>> =
//!     vec![Box::new(BigMoney::default()), Box::new(BigMoney::default())];
//!
//! let result = game.play(&mut seats).unwrap();
//! assert!(!result.winners().is_empty());
//! ```

pub mod core;
pub mod cards;
pub mod effects;
pub mod zones;
pub mod decision;
pub mod game;
pub mod simulation;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    EngineError, Result,
    PlayerId, PlayerMap,
    GameRng,
    GameConfig,
};

pub use crate::cards::{Card, CardDef, CardValue};

pub use crate::effects::{DecisionTemplate, Effect, Resources};

pub use crate::zones::PlayerState;

pub use crate::decision::{Choice, Decision, DecisionKind, DecisionMaker, Seats, Solo};

pub use crate::game::{Game, GameBuilder, GameResult};

pub use crate::simulation::{HandOutcome, Simulator};

pub use crate::strategy::{buying_value, BigMoney, HillClimb};
