//! Game configuration and the fixed supply table.
//!
//! A game is configured by seat count and the kingdom cards to include.
//! Base supply quantities depend only on the seat count:
//!
//! | Seats | Estate/Duchy/Province | Copper | Silver | Gold | Curse |
//! |-------|-----------------------|--------|--------|------|-------|
//! | 1     | 5                     | 53     | 40     | 30   | 0     |
//! | 2     | 8                     | 46     | 40     | 30   | 10    |
//! | 3     | 12                    | 39     | 40     | 30   | 20    |
//! | 4     | 12                    | 32     | 40     | 30   | 30    |
//! | 5     | 15                    | 25     | 40     | 30   | 40    |
//! | 6     | 18                    | 18     | 40     | 30   | 50    |

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::cards::{self, Card};

/// Cards drawn at the start of every turn.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Round limit used by `GameConfig::default()`.
pub const DEFAULT_MAX_ROUNDS: u32 = 300;

/// Supply count of every kingdom pile.
pub const KINGDOM_PILE_SIZE: u32 = 10;

/// Fewest seats a real game can be set up with.
pub const MIN_SEATS: usize = 2;

/// Most seats a game can be set up with.
pub const MAX_SEATS: usize = 6;

/// Estate, Duchy and Province pile size by seat count.
fn victory_pile(seats: usize) -> u32 {
    match seats {
        1 => 5,
        2 => 8,
        3 | 4 => 12,
        5 => 15,
        _ => 18,
    }
}

/// Base supply for a seat count, in table order.
///
/// Accepts 1 (used for single-seat simulations) through 6.
pub fn supply_counts(seats: usize) -> Result<Vec<(Card, u32)>> {
    if !(1..=MAX_SEATS).contains(&seats) {
        return Err(EngineError::InvalidSeatCount { seats });
    }

    let victory = victory_pile(seats);
    let seats = seats as u32;

    Ok(vec![
        (cards::ESTATE, victory),
        (cards::DUCHY, victory),
        (cards::PROVINCE, victory),
        (cards::COPPER, 60 - 7 * seats),
        (cards::SILVER, 40),
        (cards::GOLD, 30),
        (cards::CURSE, 10 * (seats - 1)),
    ])
}

/// Serializable game configuration.
///
/// Kingdom cards are referenced by name and resolved against the card
/// catalogue when the game is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (2-6).
    pub seat_count: usize,

    /// Names of the kingdom cards in the supply.
    pub kingdom: Vec<String>,

    /// Seed for every shuffle in the game.
    pub seed: u64,

    /// Round limit before the game is declared runaway.
    pub max_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seat_count: 2,
            kingdom: Vec::new(),
            seed: 42,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl GameConfig {
    /// Set the seat count.
    pub fn with_seats(mut self, seats: usize) -> Self {
        self.seat_count = seats;
        self
    }

    /// Set the kingdom from card handles.
    pub fn with_kingdom(mut self, kingdom: &[Card]) -> Self {
        self.kingdom = kingdom.iter().map(|c| c.name.to_string()).collect();
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the round limit.
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Resolve the kingdom names against the catalogue.
    pub fn kingdom_cards(&self) -> Result<Vec<Card>> {
        self.kingdom
            .iter()
            .map(|name| {
                cards::by_name(name).ok_or_else(|| EngineError::UnknownCard { name: name.clone() })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_of(supply: &[(Card, u32)], card: Card) -> u32 {
        supply.iter().find(|(c, _)| *c == card).map(|(_, n)| *n).unwrap()
    }

    #[test]
    fn test_supply_table() {
        let expected = [
            (1, 5, 53, 0),
            (2, 8, 46, 10),
            (3, 12, 39, 20),
            (4, 12, 32, 30),
            (5, 15, 25, 40),
            (6, 18, 18, 50),
        ];

        for (seats, victory, copper, curse) in expected {
            let supply = supply_counts(seats).unwrap();
            assert_eq!(count_of(&supply, cards::ESTATE), victory);
            assert_eq!(count_of(&supply, cards::DUCHY), victory);
            assert_eq!(count_of(&supply, cards::PROVINCE), victory);
            assert_eq!(count_of(&supply, cards::COPPER), copper);
            assert_eq!(count_of(&supply, cards::SILVER), 40);
            assert_eq!(count_of(&supply, cards::GOLD), 30);
            assert_eq!(count_of(&supply, cards::CURSE), curse);
        }
    }

    #[test]
    fn test_supply_rejects_bad_seat_counts() {
        assert_eq!(supply_counts(0), Err(EngineError::InvalidSeatCount { seats: 0 }));
        assert_eq!(supply_counts(7), Err(EngineError::InvalidSeatCount { seats: 7 }));
    }

    #[test]
    fn test_kingdom_resolution() {
        let config = GameConfig::default().with_kingdom(&[cards::SMITHY, cards::MILITIA]);
        assert_eq!(config.kingdom_cards().unwrap(), vec![cards::SMITHY, cards::MILITIA]);

        let bad = GameConfig {
            kingdom: vec!["Smithy".to_string(), "Nonesuch".to_string()],
            ..GameConfig::default()
        };
        assert_eq!(
            bad.kingdom_cards(),
            Err(EngineError::UnknownCard { name: "Nonesuch".to_string() })
        );
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::default()
            .with_seats(4)
            .with_seed(7)
            .with_kingdom(&[cards::VILLAGE]);

        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
        assert_eq!(restored.kingdom, vec!["Village".to_string()]);
    }
}
