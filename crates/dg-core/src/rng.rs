//! Random number generation for layout generation
//!
//! Uses a seeded ChaCha RNG so that a given seed always reproduces the same
//! dungeon.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Layout random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Note: RNG state is not serialized - only the seed, so a deserialized RNG
/// restarts its stream from the beginning.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from the wall clock.
    ///
    /// The seed is never 0, since 0 means "no seed" in configuration and the
    /// run must stay replayable from the reported seed.
    pub fn from_time() -> Self {
        let nanos = chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_else(|| chrono::Utc::now().timestamp_micros());
        Self::new((nanos as u64).max(1))
    }

    /// Resolve a configured seed: nonzero is deterministic, zero or absent
    /// falls back to the clock.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) if seed != 0 => Self::new(seed),
            _ => Self::from_time(),
        }
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `lo..hi`.
    ///
    /// Returns `None` without consuming randomness if the range is empty.
    pub fn range(&mut self, lo: i32, hi: i32) -> Option<i32> {
        if hi <= lo {
            return None;
        }
        Some(self.rng.gen_range(lo..hi))
    }

    /// Uniform value in `lo..=hi`.
    ///
    /// Returns `lo` if `hi < lo`.
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi < lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Fair coin
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_time()
    }
}
