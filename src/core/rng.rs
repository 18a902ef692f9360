//! Deterministic random number generation for synthetic game trees.
//!
//! The same seed always yields the same tree, so a randomly generated game
//! is as reproducible as a hand-written one.
//!
//! ```
//! use game_search::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut subtree = rng.fork();
//!
//! let mut again = GameRng::new(42);
//! let mut same_subtree = again.fork();
//! assert_eq!(subtree.gen_range_inclusive(0..=99), same_subtree.gen_range_inclusive(0..=99));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 generator with deterministic forking.
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

    /// Derive an independent generator, e.g. one per generated subtree.
    ///
    /// The n-th fork of a given seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random integer in `range`, both ends included.
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<i64>) -> i64 {
        self.inner.gen_range(range)
    }

    /// Random index in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::RangeInclusive<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// `true` with the given probability.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}
