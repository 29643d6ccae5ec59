//! Prediction provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest simulated latency accepted.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Prediction provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionConfig {
    /// Simulated latency of the mock provider in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl PredictionConfig {
    /// Get the delay as Duration
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Validate prediction configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.delay_ms > MAX_DELAY_MS {
            return Err(ValidationError::PredictionDelayTooLong {
                max_ms: MAX_DELAY_MS,
            });
        }
        Ok(())
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_delay_ms() -> u64 {
    2000
}
