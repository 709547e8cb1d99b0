//! Seeded random source for placement and AI.
//!
//! All randomness on a level flows through one [`LevelRandom`]. Given the
//! same seed and the same sequence of calls it produces the same values,
//! which keeps room population and random-walk AI reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform random source.
pub trait RandomSource: Send {
    /// Uniform integer in `[lo, hi)`. Returns `lo` when the range is empty.
    fn next(&mut self, lo: i32, hi: i32) -> i32;

    /// Uniform float in `[0, 1)`.
    fn next_float(&mut self) -> f32;

    /// Uniform index into a collection of `len` items.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty collection");
        let upper = i32::try_from(len).unwrap_or(i32::MAX);
        self.next(0, upper) as usize
    }
}

/// ChaCha8-backed level generator.
#[derive(Clone, Debug)]
pub struct LevelRandom {
    rng: ChaCha8Rng,
}

impl LevelRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for LevelRandom {
    fn next(&mut self, lo: i32, hi: i32) -> i32 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    fn next_float(&mut self) -> f32 {
        self.rng.r#gen::<f32>()
    }
}
