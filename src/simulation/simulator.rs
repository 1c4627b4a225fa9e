//! Rollout facility.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, Span};

use crate::cards::{Card, COPPER, DUCHY, ESTATE, GOLD, PROVINCE, SILVER};
use crate::core::{GameRng, Result};
use crate::decision::{DecisionKind, DecisionMaker, Seats, Solo};
use crate::game::Game;
use crate::zones::PlayerState;

/// Size of each pile in a single-seat rollout supply.
pub const SIMULATION_PILE_SIZE: u32 = 12;

/// What a simulated turn could spend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandOutcome {
    pub coins: i32,
    pub buys: i32,
}

impl HandOutcome {
    /// Read the outcome off a state that has finished its action phase.
    ///
    /// A state that owes no Buy reports zero buys.
    #[must_use]
    pub fn at(state: &PlayerState) -> Self {
        let buys = match state.next_decision() {
            Some(DecisionKind::Buy) => state.buys,
            _ => 0,
        };
        Self {
            coins: state.hand_value(),
            buys,
        }
    }
}

/// Runs rollouts from its own seeded stream.
///
/// Each trial gets a fork of the stream, so trials are independent of each
/// other and a batch is reproducible from the seed.
///
/// ```
/// use rust_deckbuilder::core::GameRng;
/// use rust_deckbuilder::simulation::Simulator;
/// use rust_deckbuilder::strategy::BigMoney;
/// use rust_deckbuilder::zones::PlayerState;
///
/// let state = PlayerState::initial_state(&mut GameRng::new(1));
/// let mut strategy = BigMoney::default();
///
/// let outcomes = Simulator::new(7)
///     .simulate_hands(&state, 20, &[], &mut strategy)
///     .unwrap();
///
/// assert_eq!(outcomes.len(), 20);
/// assert!(outcomes.iter().all(|o| o.buys == 1 && o.coins <= 5));
/// ```
#[derive(Clone, Debug)]
pub struct Simulator {
    rng: GameRng,
    span: Span,
}

impl Simulator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            span: debug_span!("simulator", seed),
        }
    }

    /// Record this simulator's events under `span`.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// A scrubbed copy of `game` for the acting seat.
    #[must_use]
    pub fn simulated_copy(&mut self, game: &Game) -> Game {
        game.simulated_copy(&mut self.rng)
    }

    /// Coins and buys the acting seat would reach this turn.
    ///
    /// Real snapshots are scrubbed first; simulated ones are used as given.
    pub fn simulate_turn(&mut self, game: &Game, seats: &mut dyn Seats) -> Result<HandOutcome> {
        let end = self.play_to_buy(game, seats)?;
        Ok(HandOutcome::at(end.state()))
    }

    /// The acting seat's state at the point it would start buying.
    pub fn simulate_partial_turn(&mut self, game: &Game, seats: &mut dyn Seats) -> Result<PlayerState> {
        let end = self.play_to_buy(game, seats)?;
        Ok(end.state().clone())
    }

    /// Run `n` independent single-seat turns from `state`'s whole deck, with
    /// `extra` on top of each freshly shuffled draw pile, and report what
    /// each could spend. The Buy itself is never resolved.
    pub fn simulate_hands(
        &mut self,
        state: &PlayerState,
        n: usize,
        extra: &[Card],
        maker: &mut dyn DecisionMaker,
    ) -> Result<Vec<HandOutcome>> {
        let supply: OrdMap<Card, u32> = [PROVINCE, DUCHY, ESTATE, COPPER, SILVER, GOLD]
            .into_iter()
            .map(|card| (card, SIMULATION_PILE_SIZE))
            .collect();

        let mut outcomes = Vec::with_capacity(n);
        for trial in 0..n {
            let mut rng = self.rng.fork();
            let start = state.simulation_state(extra, &mut rng);
            let span = debug_span!(parent: &self.span, "trial", trial, seed = rng.seed());
            let game = Game::from_parts(vec![start], supply.clone(), rng, span, true);

            let end = run_to_buy(&game, &mut Solo(&mut *maker))?;
            outcomes.push(HandOutcome::at(end.state()));
        }

        debug!(parent: &self.span, trials = n, extra = ?extra, "simulated hands");
        Ok(outcomes)
    }

    fn play_to_buy(&mut self, game: &Game, seats: &mut dyn Seats) -> Result<Game> {
        if game.is_simulated() {
            run_to_buy(game, seats)
        } else {
            run_to_buy(&self.simulated_copy(game), seats)
        }
    }
}

/// Resolve the acting seat's decisions up to, not including, its Buy.
fn run_to_buy(game: &Game, seats: &mut dyn Seats) -> Result<Game> {
    let mut game = game.clone();
    loop {
        match game.state().next_decision() {
            None | Some(DecisionKind::Buy) => return Ok(game),
            Some(kind) => {
                let seat = game.player_turn();
                game = game.resolve(seat, kind, seats)?;
            }
        }
    }
}
