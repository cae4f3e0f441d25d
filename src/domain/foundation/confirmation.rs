//! Confirmation token for destructive actions.
//!
//! Suspending a company or deleting an email account cannot be undone, so
//! the handlers for those commands refuse to run without a `Confirmation`
//! constructed by the caller after the user dialog.

use super::{DomainError, ErrorCode};

/// Proof that the user explicitly confirmed a destructive action.
///
/// There is no way to obtain one implicitly; the UI shell constructs it
/// only when the confirm dialog was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation(());

impl Confirmation {
    /// Records an explicit user confirmation.
    pub fn confirmed() -> Self {
        Self(())
    }
}

/// Converts an optional confirmation into the token, failing with
/// `ConfirmationRequired` when absent.
pub fn require(confirmation: Option<Confirmation>, action: &str) -> Result<Confirmation, DomainError> {
    confirmation.ok_or_else(|| {
        DomainError::new(
            ErrorCode::ConfirmationRequired,
            format!("Action '{}' requires explicit confirmation", action),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_passes_through_confirmation() {
        let result = require(Some(Confirmation::confirmed()), "suspender empresa");
        assert!(result.is_ok());
    }

    #[test]
    fn require_fails_without_confirmation() {
        let err = require(None, "excluir conta").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfirmationRequired);
        assert!(err.message.contains("excluir conta"));
    }
}
