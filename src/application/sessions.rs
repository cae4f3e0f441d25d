//! Wizard session registry - the lifecycle owner of open wizards.
//!
//! Each wizard kind gets one registry. Opening creates a controller with
//! empty data (or a hydrated one in edit mode), cancel discards it
//! unconditionally, and submit removes it while handing back the final
//! snapshot exactly once. Reopening after cancel always starts from
//! scratch; no data leaks between sessions.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, WizardId};
use crate::domain::wizard::{Blocked, Step, StepSequence, WizardController, WizardData};

/// Errors raised by the session registry.
#[derive(Debug, Clone)]
pub enum SessionError {
    /// No open wizard carries this id (closed, cancelled, or submitted).
    WizardNotFound(WizardId),
    /// Submission was refused by the final step's validation.
    Blocked(Blocked),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::WizardNotFound(id) => write!(f, "Wizard not found: {}", id),
            SessionError::Blocked(blocked) => write!(f, "{}", blocked),
        }
    }
}

impl Error for SessionError {}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::WizardNotFound(id) => DomainError::new(
                ErrorCode::WizardNotFound,
                format!("Wizard not found: {}", id),
            ),
            SessionError::Blocked(blocked) => {
                DomainError::new(ErrorCode::StepBlocked, blocked.to_string())
            }
        }
    }
}

/// Registry of open wizard instances for one wizard kind.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
pub struct WizardSessions<S: Step> {
    sessions: RwLock<HashMap<WizardId, WizardController<S>>>,
    make_sequence: Box<dyn Fn() -> StepSequence<S> + Send + Sync>,
}

impl<S: Step> WizardSessions<S> {
    /// Creates a registry; `make_sequence` builds the step sequence for
    /// every opened instance.
    pub fn new(make_sequence: impl Fn() -> StepSequence<S> + Send + Sync + 'static) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            make_sequence: Box::new(make_sequence),
        }
    }

    /// Opens a wizard with empty data and returns its id.
    pub fn open(&self) -> WizardId {
        self.insert(WizardController::new((self.make_sequence)()))
    }

    /// Opens a wizard in edit mode with pre-populated data.
    pub fn open_with(&self, data: WizardData) -> WizardId {
        self.insert(WizardController::with_data((self.make_sequence)(), data))
    }

    /// Returns true while the wizard is open.
    pub fn is_open(&self, id: WizardId) -> bool {
        self.sessions
            .read()
            .expect("WizardSessions: lock poisoned")
            .contains_key(&id)
    }

    /// Returns the number of open wizards.
    pub fn open_count(&self) -> usize {
        self.sessions
            .read()
            .expect("WizardSessions: lock poisoned")
            .len()
    }

    /// Runs a closure against an open wizard's controller.
    pub fn with<R>(
        &self,
        id: WizardId,
        f: impl FnOnce(&mut WizardController<S>) -> R,
    ) -> Result<R, SessionError> {
        let mut sessions = self.sessions.write().expect("WizardSessions: lock poisoned");
        let controller = sessions
            .get_mut(&id)
            .ok_or(SessionError::WizardNotFound(id))?;
        Ok(f(controller))
    }

    /// Discards an open wizard and its data unconditionally.
    ///
    /// Returns false when the wizard was not open.
    pub fn cancel(&self, id: WizardId) -> bool {
        self.sessions
            .write()
            .expect("WizardSessions: lock poisoned")
            .remove(&id)
            .is_some()
    }

    /// Submits an open wizard.
    ///
    /// On success the session is removed and the final snapshot is
    /// returned; the registry hands it out exactly once. On refusal the
    /// session stays open so the user can fix the reported reasons.
    pub fn submit(&self, id: WizardId) -> Result<WizardData, SessionError> {
        let mut sessions = self.sessions.write().expect("WizardSessions: lock poisoned");
        let controller = sessions
            .get_mut(&id)
            .ok_or(SessionError::WizardNotFound(id))?;

        let mut snapshot = None;
        controller
            .submit(|data| snapshot = Some(data.clone()))
            .map_err(SessionError::Blocked)?;

        sessions.remove(&id);
        snapshot.ok_or(SessionError::WizardNotFound(id))
    }

    fn insert(&self, controller: WizardController<S>) -> WizardId {
        let id = WizardId::new();
        self.sessions
            .write()
            .expect("WizardSessions: lock poisoned")
            .insert(id, controller);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wizard::StepDefinition;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestStep {
        Dados,
        Revisao,
    }

    impl Step for TestStep {
        fn label(&self) -> &'static str {
            match self {
                TestStep::Dados => "Dados",
                TestStep::Revisao => "Revisão",
            }
        }
    }

    fn registry() -> WizardSessions<TestStep> {
        WizardSessions::new(|| {
            StepSequence::new(vec![
                StepDefinition::new(TestStep::Dados).require("nome"),
                StepDefinition::new(TestStep::Revisao),
            ])
            .expect("test sequence is valid")
        })
    }

    #[test]
    fn open_creates_an_empty_session() {
        let sessions = registry();
        let id = sessions.open();

        assert!(sessions.is_open(id));
        let empty = sessions.with(id, |w| w.data().is_empty()).unwrap();
        assert!(empty);
    }

    #[test]
    fn open_with_hydrates_edit_mode() {
        let sessions = registry();
        let mut data = WizardData::new();
        data.set("nome", "Registro MX-550");

        let id = sessions.open_with(data);
        let nome = sessions
            .with(id, |w| w.data().text("nome").map(str::to_string))
            .unwrap();
        assert_eq!(nome.as_deref(), Some("Registro MX-550"));
    }

    #[test]
    fn cancel_discards_and_reopen_starts_empty() {
        let sessions = registry();
        let id = sessions.open();
        sessions
            .with(id, |w| w.set_field("nome", "digitado e abandonado"))
            .unwrap();

        assert!(sessions.cancel(id));
        assert!(!sessions.is_open(id));

        // A fresh session carries nothing over.
        let reopened = sessions.open();
        let empty = sessions.with(reopened, |w| w.data().is_empty()).unwrap();
        assert!(empty);
    }

    #[test]
    fn cancel_of_unknown_wizard_returns_false() {
        let sessions = registry();
        assert!(!sessions.cancel(WizardId::new()));
    }

    #[test]
    fn with_fails_for_closed_wizard() {
        let sessions = registry();
        let id = sessions.open();
        sessions.cancel(id);

        let result = sessions.with(id, |_| ());
        assert!(matches!(result, Err(SessionError::WizardNotFound(_))));
    }

    #[test]
    fn submit_returns_snapshot_and_closes_the_session() {
        let sessions = registry();
        let id = sessions.open();
        sessions
            .with(id, |w| {
                w.set_field("nome", "Registro MX-550");
                w.advance().unwrap();
            })
            .unwrap();

        let snapshot = sessions.submit(id).unwrap();
        assert_eq!(snapshot.text("nome"), Some("Registro MX-550"));
        assert!(!sessions.is_open(id));

        // Only once: the session is gone.
        assert!(matches!(
            sessions.submit(id),
            Err(SessionError::WizardNotFound(_))
        ));
    }

    #[test]
    fn blocked_submit_keeps_the_session_open() {
        let sessions = registry();
        let id = sessions.open();

        // Still on the first step: submission is refused.
        let result = sessions.submit(id);
        assert!(matches!(result, Err(SessionError::Blocked(_))));
        assert!(sessions.is_open(id));
    }

    #[test]
    fn open_count_tracks_sessions() {
        let sessions = registry();
        assert_eq!(sessions.open_count(), 0);
        let a = sessions.open();
        let _b = sessions.open();
        assert_eq!(sessions.open_count(), 2);
        sessions.cancel(a);
        assert_eq!(sessions.open_count(), 1);
    }
}
