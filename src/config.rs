//! Runtime configuration read from `MEMORY_PUZZLE_*` environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MEMORY_PUZZLE_GRID_SIZE` | 4 | Cards per side |
//! | `MEMORY_PUZZLE_SEED` | derived from system time | Deal seed |
//! | `MEMORY_PUZZLE_SOUND` | on | `0` / `false` / `off` silence the bell |
//! | `MEMORY_PUZZLE_LOG_PATH` | unset | File that receives `tracing` output |

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::core::{Board, ConfigurationError};
use crate::types::{CARD_COLORS, GRID_SIZE};

pub const ENV_GRID_SIZE: &str = "MEMORY_PUZZLE_GRID_SIZE";
pub const ENV_SEED: &str = "MEMORY_PUZZLE_SEED";
pub const ENV_SOUND: &str = "MEMORY_PUZZLE_SOUND";
pub const ENV_LOG_PATH: &str = "MEMORY_PUZZLE_LOG_PATH";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error(transparent)]
    Board(#[from] ConfigurationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: u8,
    pub seed: u32,
    pub sound: bool,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            seed: time_seed(),
            sound: true,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let grid_size = match get(ENV_GRID_SIZE) {
            Some(v) => v.parse::<u8>().map_err(|e| ConfigError::Invalid {
                var: ENV_GRID_SIZE,
                reason: e.to_string(),
            })?,
            None => GRID_SIZE,
        };

        let seed = match get(ENV_SEED) {
            Some(v) => v.parse::<u32>().map_err(|e| ConfigError::Invalid {
                var: ENV_SEED,
                reason: e.to_string(),
            })?,
            None => time_seed(),
        };

        let sound = match get(ENV_SOUND) {
            Some(v) => parse_flag(&v).ok_or_else(|| ConfigError::Invalid {
                var: ENV_SOUND,
                reason: format!("expected a boolean, got {v:?}"),
            })?,
            None => true,
        };

        Ok(Self {
            grid_size,
            seed,
            sound,
            log_path: get(ENV_LOG_PATH),
        })
    }

    /// Reject board sizes the palette cannot deal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::validate(self.grid_size, CARD_COLORS.len())?;
        Ok(())
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn time_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    (nanos ^ (nanos >> 32)) as u32
}
