//! Attachment value objects - file references captured before any upload.
//!
//! An `AttachmentReference` only ever describes a user-selected file (name,
//! byte size, extension); no file content flows through the domain. The
//! `AttachmentPolicy` holds the acceptance rules the wizards apply at the
//! step boundary.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Default maximum accepted file size: 10 MiB.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Default accepted extensions, compared case-insensitively.
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Reference to a user-selected file before any upload occurs.
///
/// Ownership is held by the wizard step that captured it until submission,
/// at which point the reference travels inside the submitted snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentReference {
    name: String,
    size_bytes: u64,
}

impl AttachmentReference {
    /// Creates a reference to a selected file.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` when the file name is blank.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("nome_arquivo"));
        }
        Ok(Self { name, size_bytes })
    }

    /// Returns the original file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the file size in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Returns the lower-cased extension derived from the name, if any.
    ///
    /// `relatorio.PDF` and `relatorio.pdf` yield the same extension.
    pub fn extension(&self) -> Option<String> {
        let name = self.name.trim();
        let dot = name.rfind('.')?;
        let ext = &name[dot + 1..];
        if ext.is_empty() {
            None
        } else {
            Some(ext.to_lowercase())
        }
    }
}

/// Acceptance rules applied to attachments at wizard step boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentPolicy {
    max_bytes: u64,
    allowed_extensions: Vec<String>,
}

impl AttachmentPolicy {
    /// Creates a policy with an explicit size limit and extension list.
    ///
    /// Extensions are stored lower-cased so checks are case-insensitive.
    pub fn new(max_bytes: u64, allowed_extensions: Vec<String>) -> Self {
        Self {
            max_bytes,
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Returns the maximum accepted size in bytes.
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Returns the accepted extensions (lower-cased, no leading dot).
    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    /// Checks an attachment against the policy.
    ///
    /// A file exactly at the size limit is accepted; one byte over is not.
    pub fn check(&self, attachment: &AttachmentReference) -> Result<(), ValidationError> {
        if attachment.size_bytes() > self.max_bytes {
            return Err(ValidationError::FileTooLarge {
                name: attachment.name().to_string(),
                size: attachment.size_bytes(),
                max: self.max_bytes,
            });
        }

        let extension = attachment.extension().unwrap_or_default();
        if !self.allowed_extensions.iter().any(|e| *e == extension) {
            return Err(ValidationError::ExtensionNotAllowed {
                name: attachment.name().to_string(),
                extension,
            });
        }

        Ok(())
    }
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_FILE_BYTES,
            DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        )
    }
}
