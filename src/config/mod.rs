//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `CADUCEU` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use caduceu_backoffice::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let policy = config.uploads.policy();
//! ```

mod error;
mod features;
mod import;
mod uploads;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use import::ImportConfig;
pub use uploads::UploadConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Attachment acceptance rules
    #[serde(default)]
    pub uploads: UploadConfig,

    /// Simulated gazette import settings
    #[serde(default)]
    pub import: ImportConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `CADUCEU` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CADUCEU__UPLOADS__MAX_FILE_BYTES=5242880` -> `uploads.max_file_bytes = 5242880`
    /// - `CADUCEU__IMPORT__DELAY_MS=500` -> `import.delay_ms = 500`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CADUCEU")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.uploads.validate()?;
        self.import.validate()?;
        Ok(())
    }
}
