//! Game setup.

use im::OrdMap;
use tracing::{info, info_span, Span};

use super::Game;
use crate::cards::Card;
use crate::core::{
    supply_counts, EngineError, GameConfig, GameRng, Result, KINGDOM_PILE_SIZE, MAX_SEATS,
    MIN_SEATS,
};
use crate::zones::PlayerState;

/// Fluent game setup.
///
/// ```
/// use rust_deckbuilder::cards::{MILITIA, SMITHY};
/// use rust_deckbuilder::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .seats(3)
///     .kingdom(&[SMITHY, MILITIA])
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.num_players(), 3);
/// assert_eq!(game.supply_count(SMITHY), 10);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    seats: usize,
    kingdom: Vec<Card>,
    seed: u64,
    max_rounds: u32,
    span: Option<Span>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            seats: config.seat_count,
            kingdom: Vec::new(),
            seed: config.seed,
            max_rounds: config.max_rounds,
            span: None,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a configuration, resolving its kingdom names.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Ok(Self {
            seats: config.seat_count,
            kingdom: config.kingdom_cards()?,
            seed: config.seed,
            max_rounds: config.max_rounds,
            span: None,
        })
    }

    #[must_use]
    pub fn seats(mut self, seats: usize) -> Self {
        self.seats = seats;
        self
    }

    #[must_use]
    pub fn kingdom(mut self, cards: &[Card]) -> Self {
        self.kingdom = cards.to_vec();
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Round limit for `Game::play`.
    #[must_use]
    pub fn max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Record the game's events under `span` instead of a fresh `game` span.
    #[must_use]
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Deal every seat its starting deck and fill the supply.
    ///
    /// Seat order is fixed here: seat `i` is `PlayerId(i)`. Kingdom cards
    /// already in the base supply keep their base count.
    pub fn build(self) -> Result<Game> {
        if !(MIN_SEATS..=MAX_SEATS).contains(&self.seats) {
            return Err(EngineError::InvalidSeatCount { seats: self.seats });
        }

        let mut supply: OrdMap<Card, u32> = supply_counts(self.seats)?.into_iter().collect();
        for card in self.kingdom {
            if !supply.contains_key(&card) {
                supply.insert(card, KINGDOM_PILE_SIZE);
            }
        }

        let mut rng = GameRng::new(self.seed);
        let states = (0..self.seats)
            .map(|_| PlayerState::initial_state(&mut rng))
            .collect();

        let seats = self.seats;
        let seed = self.seed;
        let span = self
            .span
            .unwrap_or_else(|| info_span!("game", seats, seed));

        let mut game = Game::from_parts(states, supply, rng, span, false);
        game.max_rounds = self.max_rounds;
        info!(
            parent: game.span(),
            cards = game.total_card_count(),
            piles = game.supply().len(),
            "setup"
        );
        Ok(game)
    }
}
