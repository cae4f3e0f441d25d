//! Upload configuration - attachment acceptance rules.

use serde::Deserialize;

use crate::domain::foundation::{
    AttachmentPolicy, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_FILE_BYTES,
};

use super::error::ValidationError;

/// Attachment rules applied by the wizards.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted file size in bytes
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,

    /// Accepted file extensions (case-insensitive, no leading dot)
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl UploadConfig {
    /// Builds the attachment policy the wizards enforce.
    pub fn policy(&self) -> AttachmentPolicy {
        AttachmentPolicy::new(self.max_file_bytes, self.allowed_extensions.clone())
    }

    /// Validate upload configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_file_bytes == 0 {
            return Err(ValidationError::InvalidUploadLimit);
        }
        if self.allowed_extensions.is_empty() {
            return Err(ValidationError::NoUploadExtensions);
        }
        if self.allowed_extensions.iter().any(|e| e.trim().is_empty()) {
            return Err(ValidationError::BlankUploadExtension);
        }
        Ok(())
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: default_max_file_bytes(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_max_file_bytes() -> u64 {
    DEFAULT_MAX_FILE_BYTES
}

fn default_allowed_extensions() -> Vec<String> {
    DEFAULT_ALLOWED_EXTENSIONS
        .iter()
        .map(|e| e.to_string())
        .collect()
}
