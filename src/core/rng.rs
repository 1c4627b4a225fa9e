//! Deterministic random number generation for deck shuffles and rollouts.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Forkable**: Independent branches, one per simulated trial
//!
//! ```
//! use rust_deckbuilder::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut trial = rng.fork();
//!
//! let mut deck = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! trial.shuffle(&mut deck);
//! deck.sort();
//! assert_eq!(deck, vec![1, 2, 3, 4, 5, 6, 7, 8]);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing every shuffle in the engine.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness. A `Game`
/// snapshot carries one by value; transitions advance a clone of it.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
