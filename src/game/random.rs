use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

use super::settings::Settings;

/// Every draw the generators and the answer builder make goes through here.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn uniform_int(&mut self, low: i64, high: i64) -> i64;

    /// Uniform real in `[0, 1)`.
    fn uniform_real(&mut self) -> f64;

    /// Unbiased in-place permutation (Fisher-Yates).
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.uniform_int(0, i as i64) as usize;
            items.swap(i, j);
        }
    }
}

/// `StdRng` with a known seed, so any session can be replayed.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
    seed: u64,
}

impl StdRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::rng().next_u64())
    }

    /// Seeded from `SEED` when set, otherwise from entropy.
    pub fn from_env() -> Self {
        let random = Settings::seed_from_env()
            .map(Self::from_seed)
            .unwrap_or_else(Self::from_entropy);
        trace!(target: "random", "Random source seed: {}", random.seed);
        random
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for StdRandom {
    fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        debug_assert!(low <= high, "empty range {}..={}", low, high);
        self.rng.random_range(low..=high)
    }

    fn uniform_real(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
pub use scripted::ScriptedRandom;
