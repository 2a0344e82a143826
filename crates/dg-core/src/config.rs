//! Generation parameters
//!
//! A [`GeneratorConfig`] is supplied before each generation run. It can be
//! built in code, or loaded from a JSON file where every field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ROOM_SIZE, DEFAULT_MAX_ROOMS, DEFAULT_MIN_ROOM_SIZE, DEFAULT_WIDTH,
};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Parameters for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Map width in cells
    pub width: usize,
    /// Map height in cells
    pub height: usize,
    /// Number of room placement attempts (upper bound on room count)
    pub max_rooms: u32,
    /// Smallest room side, inclusive
    pub min_room_size: u32,
    /// Largest room side, inclusive
    pub max_room_size: u32,
    /// Fixed seed. `None` or `Some(0)` picks a clock-derived seed per run.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_rooms: DEFAULT_MAX_ROOMS,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            max_room_size: DEFAULT_MAX_ROOM_SIZE,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that cannot describe a grid or a room.
    ///
    /// An inverted size range is not an error: it is reported here with a
    /// warning and generation uses `min_room_size` for both bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Invalid {
                field: "width",
                reason: "must be positive".to_string(),
            });
        }
        if self.height == 0 {
            return Err(ConfigError::Invalid {
                field: "height",
                reason: "must be positive".to_string(),
            });
        }
        if self.width > i32::MAX as usize || self.height > i32::MAX as usize {
            return Err(ConfigError::Invalid {
                field: "width/height",
                reason: format!("must not exceed {}", i32::MAX),
            });
        }
        if self.min_room_size == 0 {
            return Err(ConfigError::Invalid {
                field: "min_room_size",
                reason: "must be positive".to_string(),
            });
        }
        if self.min_room_size > self.max_room_size {
            log::warn!(
                "min_room_size {} exceeds max_room_size {}; rooms will be {}x{}",
                self.min_room_size,
                self.max_room_size,
                self.min_room_size,
                self.min_room_size
            );
        }
        Ok(())
    }

    /// Room side bounds as used by placement: `(min, max)` with `max >= min`.
    pub fn room_size_bounds(&self) -> (i32, i32) {
        let min = clamp_i32(self.min_room_size.max(1));
        let max = clamp_i32(self.max_room_size).max(min);
        (min, max)
    }

    /// Seed that makes runs deterministic, if any
    pub fn fixed_seed(&self) -> Option<u64> {
        self.seed.filter(|&s| s != 0)
    }
}

fn clamp_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
