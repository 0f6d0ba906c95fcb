//! Injectable randomness.
//!
//! Every jitter term, simulated feed failure and fixture draw goes through a
//! `RandomSource`, so a test can pin it and assert exact outputs. Production code
//! uses `SeededRandom`, which is seeded from entropy unless `MATCH_SEED` is set.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn int_in(&mut self, low: i32, high: i32) -> i32;

    /// `true` with probability `p` (clamped to 0.0–1.0).
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// Seed for a child generator, used where a full `rand::Rng` is needed.
    fn next_seed(&mut self) -> u64;
}

/// `StdRng`-backed source.
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self(StdRng::from_entropy()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        self.0.gen_range(low..=high)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn next_seed(&mut self) -> u64 {
        self.0.gen()
    }
}

/// Shuffles `items` with a generator seeded from `rng`.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    let mut child = StdRng::seed_from_u64(rng.next_seed());
    items.shuffle(&mut child);
}

/// Picks one element of a non-empty slice.
pub fn pick<'a, T>(items: &'a [T], rng: &mut dyn RandomSource) -> &'a T {
    &items[rng.index(items.len())]
}
