//! Decision-making collaborators.
//!
//! The engine knows collaborators only through `DecisionMaker`. Strategies,
//! scripted test players and anything interactive live outside the engine
//! and plug in here.

use crate::core::{EngineError, PlayerId, Result};
use crate::game::Game;

use super::{Choice, Decision};

/// Answers decisions for one seat.
///
/// `decide` must return a choice that satisfies the decision's arity rule
/// and appears in `Decision::choices()`; anything else aborts the game.
pub trait DecisionMaker {
    /// Display name, used in logs.
    fn name(&self) -> &str;

    /// Answer one decision.
    fn decide(&mut self, decision: &Decision<'_>) -> Choice;

    /// Called before the seat's turn starts.
    fn before_turn(&mut self, _game: &Game) {}

    /// Called after the seat's turn is cleaned up.
    fn after_turn(&mut self, _game: &Game) {}
}

/// Seat to collaborator lookup.
pub trait Seats {
    /// How many seats this table can answer for.
    fn seat_count(&self) -> usize;

    /// The collaborator for `seat`, if this table has one.
    fn maker(&mut self, seat: PlayerId) -> Option<&mut dyn DecisionMaker>;

    /// The collaborator for `seat`; a seat the table cannot answer for is
    /// an `InvalidSeatCount` error.
    fn require(&mut self, seat: PlayerId) -> Result<&mut dyn DecisionMaker> {
        let seats = self.seat_count();
        self.maker(seat).ok_or(EngineError::InvalidSeatCount { seats })
    }
}

impl Seats for Vec<Box<dyn DecisionMaker>> {
    fn seat_count(&self) -> usize {
        self.len()
    }

    fn maker(&mut self, seat: PlayerId) -> Option<&mut dyn DecisionMaker> {
        match self.get_mut(seat.index()) {
            Some(maker) => Some(maker.as_mut()),
            None => None,
        }
    }
}

/// Routes every seat to one collaborator.
///
/// Used for rollouts, where a single strategy plays every seat.
pub struct Solo<'a>(pub &'a mut dyn DecisionMaker);

impl Seats for Solo<'_> {
    fn seat_count(&self) -> usize {
        usize::MAX
    }

    fn maker(&mut self, _seat: PlayerId) -> Option<&mut dyn DecisionMaker> {
        Some(&mut *self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl DecisionMaker for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn decide(&mut self, _decision: &Decision<'_>) -> Choice {
            Choice::Pass
        }
    }

    #[test]
    fn test_vec_seats() {
        let mut seats: Vec<Box<dyn DecisionMaker>> = vec![Box::new(Named("a")), Box::new(Named("b"))];

        assert_eq!(seats.seat_count(), 2);
        assert_eq!(seats.require(PlayerId(1)).unwrap().name(), "b");
    }

    #[test]
    fn test_short_table_is_an_error() {
        let mut seats: Vec<Box<dyn DecisionMaker>> = vec![Box::new(Named("a"))];

        assert!(seats.maker(PlayerId(1)).is_none());
        assert_eq!(
            seats.require(PlayerId(1)).err(),
            Some(EngineError::InvalidSeatCount { seats: 1 })
        );
    }

    #[test]
    fn test_solo_covers_every_seat() {
        let mut only = Named("solo");
        let mut seats = Solo(&mut only);

        assert!(seats.seat_count() >= 6);
        assert_eq!(seats.require(PlayerId(0)).unwrap().name(), "solo");
        assert_eq!(seats.require(PlayerId(5)).unwrap().name(), "solo");
    }
}
