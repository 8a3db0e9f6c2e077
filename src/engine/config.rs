//! Engine configuration: overrun thresholds and replay cadence

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dataset::DEFAULT_SIZE;

/// Tunable engine parameters. Every field has a default, so a JSON file only
/// needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// A run producing more steps than this is flagged as overrun
    pub max_steps: usize,
    /// A run computing longer than this (milliseconds) is flagged as overrun
    pub max_compute_ms: u64,
    /// Replay delay for an empty dataset
    pub base_delay_ms: u64,
    /// Delay removed per input element
    pub delay_per_item_ms: u64,
    /// Floor for the replay delay
    pub min_delay_ms: u64,
    /// Size selected when the engine starts
    pub initial_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_steps: 2000,
            max_compute_ms: 100,
            base_delay_ms: 800,
            delay_per_item_ms: 10,
            min_delay_ms: 50,
            initial_size: DEFAULT_SIZE,
        }
    }
}

impl EngineConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_delay_ms == 0 {
            return Err(ConfigError::ZeroMinDelay);
        }
        if self.min_delay_ms > self.base_delay_ms {
            return Err(ConfigError::DelayFloorAboveBase {
                min: self.min_delay_ms,
                base: self.base_delay_ms,
            });
        }
        Ok(())
    }

    /// `max(min, base - per_item * size)`
    pub fn delay_for(&self, size: usize) -> Duration {
        let shrink = self.delay_per_item_ms.saturating_mul(size as u64);
        let ms = self
            .base_delay_ms
            .saturating_sub(shrink)
            .max(self.min_delay_ms);
        Duration::from_millis(ms)
    }

    pub fn max_compute(&self) -> Duration {
        Duration::from_millis(self.max_compute_ms)
    }
}

/// Configuration loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("min_delay_ms must be non-zero")]
    ZeroMinDelay,
    #[error("min_delay_ms ({min}) exceeds base_delay_ms ({base})")]
    DelayFloorAboveBase { min: u64, base: u64 },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}
