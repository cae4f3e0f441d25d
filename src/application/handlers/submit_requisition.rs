//! SubmitRequisitionHandler - terminal submission of the supply
//! requisition wizard.
//!
//! The quote-minimum rule is enforced twice: by the quotation step while
//! navigating, and again by the `Requisition` constructor when the
//! snapshot is rebuilt, so a requisition can never be stored below the
//! minimum without a justification.

use std::sync::Arc;

use crate::application::sessions::{SessionError, WizardSessions};
use crate::domain::foundation::{DomainError, Identified, RequisitionId, WizardId};
use crate::domain::procurement::requisition::fields;
use crate::domain::procurement::{Requisition, RequisitionStep};
use crate::ports::{Notice, Notifier, RequisitionStore};

/// Command to submit the requisition wizard.
#[derive(Debug, Clone)]
pub struct SubmitRequisitionCommand {
    pub wizard_id: WizardId,
}

/// Result of a successful submission.
#[derive(Debug)]
pub struct SubmitRequisitionResult {
    pub requisition_id: RequisitionId,
}

/// Error type for requisition submission.
#[derive(Debug, Clone)]
pub enum SubmitRequisitionError {
    WizardNotFound(WizardId),
    Blocked(Vec<String>),
    Domain(DomainError),
}

impl std::fmt::Display for SubmitRequisitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitRequisitionError::WizardNotFound(id) => write!(f, "Wizard not found: {}", id),
            SubmitRequisitionError::Blocked(reasons) => {
                write!(f, "Submission blocked: {}", reasons.join("; "))
            }
            SubmitRequisitionError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitRequisitionError {}

impl From<DomainError> for SubmitRequisitionError {
    fn from(err: DomainError) -> Self {
        SubmitRequisitionError::Domain(err)
    }
}

/// Handler for requisition submissions.
pub struct SubmitRequisitionHandler {
    sessions: Arc<WizardSessions<RequisitionStep>>,
    requisitions: Arc<dyn RequisitionStore>,
    notifier: Arc<dyn Notifier>,
}

impl SubmitRequisitionHandler {
    pub fn new(
        sessions: Arc<WizardSessions<RequisitionStep>>,
        requisitions: Arc<dyn RequisitionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            sessions,
            requisitions,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitRequisitionCommand,
    ) -> Result<SubmitRequisitionResult, SubmitRequisitionError> {
        // 1. Take the final snapshot
        let snapshot = match self.sessions.submit(cmd.wizard_id) {
            Ok(snapshot) => snapshot,
            Err(SessionError::WizardNotFound(id)) => {
                return Err(SubmitRequisitionError::WizardNotFound(id));
            }
            Err(SessionError::Blocked(blocked)) => {
                for reason in blocked.reasons() {
                    self.notifier.notify(Notice::warning(reason.clone()));
                }
                return Err(SubmitRequisitionError::Blocked(blocked.reasons().to_vec()));
            }
        };

        // 2. Rebuild the requisition, re-running the quote rule
        let solicitante = snapshot
            .text(fields::SOLICITANTE)
            .unwrap_or_default()
            .to_string();
        let requisition =
            Requisition::from_wizard(&solicitante, &snapshot).map_err(DomainError::from)?;

        // 3. Persist and notify
        self.requisitions.upsert(&requisition).await?;
        tracing::info!(
            requisition_id = %requisition.id(),
            solicitante = %solicitante,
            quotes = requisition.cotacoes().len(),
            "requisition submitted"
        );
        self.notifier
            .notify(Notice::success("Requisição de suprimentos registrada"));

        Ok(SubmitRequisitionResult {
            requisition_id: requisition.id(),
        })
    }
}
