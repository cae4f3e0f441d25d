//! Notifier adapters.
//!
//! `TracingNotifier` routes notices into the operational log;
//! `RecordingNotifier` captures them for assertions.

use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::domain::foundation::Severity;
use crate::ports::{Notice, Notifier};

/// Installs the global tracing subscriber, honoring `RUST_LOG`.
///
/// Call once at startup; repeated calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Notifier that emits each notice as a tracing event.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Danger => tracing::error!(message = %notice.message, "notice"),
            Severity::Warning => tracing::warn!(message = %notice.message, "notice"),
            _ => tracing::info!(message = %notice.message, "notice"),
        }
    }
}

/// Notifier that records every notice for later assertions.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded notices.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .expect("RecordingNotifier: lock poisoned")
            .clone()
    }

    /// Returns true when any notice contains the given fragment.
    pub fn has_message_containing(&self, fragment: &str) -> bool {
        self.notices().iter().any(|n| n.message.contains(fragment))
    }

    /// Clears recorded notices (for test isolation).
    pub fn clear(&self) {
        self.notices
            .lock()
            .expect("RecordingNotifier: lock poisoned")
            .clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .expect("RecordingNotifier: lock poisoned")
            .push(notice);
    }
}
