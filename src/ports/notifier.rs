//! Notifier port - the toast boundary.
//!
//! Validation failures and outcome messages surface to the user through
//! this port. It is fire-and-forget: handlers never branch on whether a
//! notice was shown.

use crate::domain::foundation::Severity;

/// A user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Shorthand for a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Shorthand for a warning toast (blocked transitions, validation).
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Shorthand for an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Danger, message)
    }
}

/// Port for surfacing transient notices to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthands_set_the_severity() {
        assert_eq!(Notice::success("ok").severity, Severity::Success);
        assert_eq!(Notice::warning("atenção").severity, Severity::Warning);
        assert_eq!(Notice::error("falhou").severity, Severity::Danger);
    }

    #[test]
    fn notifier_is_object_safe() {
        fn _accepts_dyn(_notifier: &dyn Notifier) {}
    }
}
