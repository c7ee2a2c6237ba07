//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for the
//! built-in selection and crossover strategies and for the evolver's crossover
//! and mutation draws. Seed it to make an evolution run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use genetics_engine::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let draw = rng.uniform();
//! assert!((0.0..1.0).contains(&draw));
//!
//! let index = rng.index(10);
//! assert!(index < 10);
//! ```

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the engine needs.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a real number drawn uniformly from `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns an integer drawn uniformly from `[0, upper)`.
    ///
    /// An `upper` of zero yields zero instead of panicking.
    pub fn index(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }

    /// Returns `true` with probability `probability`.
    ///
    /// A probability of `0.0` never fires and `1.0` always fires.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.uniform() < probability
    }

    /// Returns `true` or `false` with equal probability.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen::<bool>()
    }

    /// Uniformly permutes `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
