//! Pending player choices and the collaborators that answer them.
//!
//! ## Key Types
//!
//! - `DecisionKind`: Closed set of decision variants
//! - `Decision`: A `DecisionKind` bound to a snapshot and a seat; lists the
//!   legal options and applies a validated `Choice`
//! - `Choice`: A collaborator's answer
//! - `DecisionMaker`: The collaborator contract
//! - `Seats`: Seat to collaborator lookup used by the engine
//!
//! The engine never retries: a choice outside `Decision::choices()` is an
//! `EngineError::IllegalSelection`.

mod kind;
mod maker;

pub use kind::{Choice, Decision, DecisionKind};
pub use maker::{DecisionMaker, Seats, Solo};
