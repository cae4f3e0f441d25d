//! Import configuration - the simulated gazette import.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Settings for the fixed-delay gazette importer.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    /// Simulated parse duration in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl ImportConfig {
    /// Returns the delay as a `Duration`.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Validate import configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.delay_ms > 60_000 {
            return Err(ValidationError::ImportDelayTooLarge);
        }
        Ok(())
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_delay_ms() -> u64 {
    1_500
}
