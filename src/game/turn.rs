//! Turn sequencing and attack propagation.

use tracing::{info, warn};

use super::{Game, GameResult};
use crate::core::{EngineError, PlayerId, Result};
use crate::decision::{Decision, DecisionKind, Seats};
use crate::effects::{self, DecisionTemplate};

impl Game {
    /// Raise `kind` for `seat`, ask its collaborator, and apply the answer.
    pub fn resolve(&self, seat: PlayerId, kind: DecisionKind, seats: &mut dyn Seats) -> Result<Game> {
        let decision = Decision::new(self, seat, kind);
        let choice = seats.require(seat)?.decide(&decision);
        decision.choose(choice, seats)
    }

    /// The acting seat resolves a templated decision.
    pub fn decide(&self, template: DecisionTemplate, seats: &mut dyn Seats) -> Result<Game> {
        let kind = template.instantiate(self.state());
        self.resolve(self.player_turn(), kind, seats)
    }

    /// Every other seat, in seating order, resolves a templated decision in
    /// a mini-turn: the acting-seat pointer moves to that seat, but no
    /// cleanup runs. The pointer is restored afterwards.
    ///
    /// With `attack` set, the seat's reaction hooks run first, then a seat
    /// holding a defense card is skipped. Defense is checked against the
    /// hand at that moment only.
    pub fn everyone_else_decides(
        &self,
        template: DecisionTemplate,
        attack: bool,
        seats: &mut dyn Seats,
    ) -> Result<Game> {
        let origin = self.player_turn();
        let n = self.num_players();
        let mut game = self.clone();
        let mut seat = origin.next(n);

        while seat != origin {
            game = game.at_mini_turn(Some(seat));

            if attack {
                for card in game.state().reactions() {
                    for effect in card.reaction {
                        game = effects::apply_effect(effect, &game, seats)?;
                    }
                }
                if game.state().is_defended() {
                    info!(parent: game.span(), %seat, "defended");
                    seat = seat.next(n);
                    continue;
                }
            }

            let kind = template.instantiate(game.state());
            game = game.resolve(seat, kind, seats)?;
            seat = seat.next(n);
        }

        Ok(game.at_mini_turn(self.mini_turn))
    }

    /// Shorthand for an attacking `everyone_else_decides`.
    pub fn attack_with_decision(
        &self,
        template: DecisionTemplate,
        seats: &mut dyn Seats,
    ) -> Result<Game> {
        self.everyone_else_decides(template, true, seats)
    }

    /// Resolve the acting seat's decisions until it owes none.
    pub fn run_decisions(&self, seats: &mut dyn Seats) -> Result<Game> {
        let mut game = self.clone();
        while let Some(kind) = game.state().next_decision() {
            let seat = game.player_turn();
            game = game.resolve(seat, kind, seats)?;
        }
        Ok(game)
    }

    /// Play one full turn for the acting seat and pass to the next seat.
    pub fn take_turn(&self, seats: &mut dyn Seats) -> Result<Game> {
        let seat = self.player_turn();
        let state = self.state();
        let player = seats.require(seat)?.name().to_string();
        info!(
            parent: &self.span,
            round = self.round() + 1,
            %seat,
            player = player.as_str(),
            vp = state.score(),
            money_density = state.money_density(true),
            action_density = state.action_density(),
            mean_money = state.mean_money_per_turn(),
            "turn"
        );

        seats.require(seat)?.before_turn(self);
        let end = self.run_decisions(seats)?;

        let mut next = end.clone();
        let cleaned = end.state_of(seat).next_turn(&mut next.rng);
        next.states[seat.index()] = cleaned;
        next.turn += 1;

        seats.require(seat)?.after_turn(&next);
        Ok(next)
    }

    /// Take turns until the game is over and return the final snapshot.
    ///
    /// Reaching `max_rounds` is an error, as is finishing with a card
    /// count that differs from setup.
    pub fn run_to_end(&self, seats: &mut dyn Seats, max_rounds: u32) -> Result<Game> {
        if seats.seat_count() < self.num_players() {
            return Err(EngineError::InvalidSeatCount { seats: seats.seat_count() });
        }

        let mut game = self.clone();
        while !game.over() {
            game = game.take_turn(seats)?;
            if game.round() >= max_rounds {
                warn!(parent: &self.span, rounds = max_rounds, "runaway game");
                return Err(EngineError::RunawayGame { rounds: max_rounds });
            }
        }

        game.check_conservation()?;
        Ok(game)
    }

    /// Play the game out under the round limit set at setup and score it.
    pub fn play(&self, seats: &mut dyn Seats) -> Result<GameResult> {
        self.run(seats, self.max_rounds)
    }

    /// Play the game out and score it.
    pub fn run(&self, seats: &mut dyn Seats, max_rounds: u32) -> Result<GameResult> {
        let game = self.run_to_end(seats, max_rounds)?;
        let result = GameResult::from_game(&game);
        info!(
            parent: &self.span,
            exhausted = ?result.exhausted,
            scores = ?result.scores,
            rounds = result.rounds,
            "game over"
        );
        Ok(result)
    }
}
