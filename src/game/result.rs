//! Final outcome of a completed game.

use serde::{Deserialize, Serialize};

use super::Game;
use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};

/// Scores and bookkeeping of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Victory points per seat.
    pub scores: PlayerMap<i32>,
    pub turns: u32,
    pub rounds: u32,
    /// Supply piles that were empty at the end.
    pub exhausted: Vec<Card>,
}

impl GameResult {
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        Self {
            scores: game.scores(),
            turns: game.turn(),
            rounds: game.round(),
            exhausted: game.exhausted_piles(),
        }
    }

    /// Seats sharing the top score.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        let Some(best) = self.scores.values().copied().max() else {
            return Vec::new();
        };
        self.scores
            .iter()
            .filter(|&(_, &score)| score == best)
            .map(|(seat, _)| seat)
            .collect()
    }

    #[must_use]
    pub fn is_winner(&self, seat: PlayerId) -> bool {
        self.winners().contains(&seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PROVINCE;

    #[test]
    fn test_winners_with_tie() {
        let result = GameResult {
            scores: PlayerMap::from_vec(vec![12, 18, 18]),
            turns: 60,
            rounds: 20,
            exhausted: vec![PROVINCE],
        };

        assert_eq!(result.winners(), vec![PlayerId(1), PlayerId(2)]);
        assert!(!result.is_winner(PlayerId(0)));
    }

    #[test]
    fn test_serde_round_trip() {
        let result = GameResult {
            scores: PlayerMap::from_vec(vec![3, 9]),
            turns: 2,
            rounds: 1,
            exhausted: vec![PROVINCE],
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
