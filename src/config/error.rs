//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Upload size limit must be positive")]
    InvalidUploadLimit,

    #[error("At least one upload extension must be allowed")]
    NoUploadExtensions,

    #[error("Upload extension must not be blank")]
    BlankUploadExtension,

    #[error("Import delay exceeds maximum allowed (60000 ms)")]
    ImportDelayTooLarge,
}
