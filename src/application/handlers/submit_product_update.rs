//! SubmitProductUpdateHandler - terminal submission of the product-update
//! wizard.
//!
//! Pulls the final snapshot out of the session registry, builds or
//! updates the regulatory process, and hands it to the process store.
//! Validation refusals surface as warning toasts; the wizard stays open
//! for the user to fix them.

use std::sync::Arc;

use crate::application::sessions::{SessionError, WizardSessions};
use crate::domain::foundation::{DomainError, ErrorCode, Identified, ProcessId, Timestamp, WizardId};
use crate::domain::regulatory::product_update::fields;
use crate::domain::regulatory::{ProductUpdateStep, RegulatoryArea, RegulatoryProcess};
use crate::ports::{Notice, Notifier, ProcessStore};

/// Command to submit the product-update wizard.
#[derive(Debug, Clone)]
pub struct SubmitProductUpdateCommand {
    /// The open wizard instance.
    pub wizard_id: WizardId,
    /// Present in edit mode: the process being updated.
    pub process_id: Option<ProcessId>,
    /// Who is submitting.
    pub actor: String,
}

/// Result of a successful submission.
#[derive(Debug)]
pub struct SubmitProductUpdateResult {
    /// The process created or updated.
    pub process_id: ProcessId,
}

/// Error type for product-update submission.
#[derive(Debug, Clone)]
pub enum SubmitProductUpdateError {
    /// The wizard is not open (closed, cancelled, or already submitted).
    WizardNotFound(WizardId),
    /// The final step's validation refused the submission.
    Blocked(Vec<String>),
    /// The process being edited no longer exists.
    ProcessNotFound(ProcessId),
    /// Domain error (bad field content, store failure).
    Domain(DomainError),
}

impl std::fmt::Display for SubmitProductUpdateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitProductUpdateError::WizardNotFound(id) => write!(f, "Wizard not found: {}", id),
            SubmitProductUpdateError::Blocked(reasons) => {
                write!(f, "Submission blocked: {}", reasons.join("; "))
            }
            SubmitProductUpdateError::ProcessNotFound(id) => {
                write!(f, "Process not found: {}", id)
            }
            SubmitProductUpdateError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitProductUpdateError {}

impl From<DomainError> for SubmitProductUpdateError {
    fn from(err: DomainError) -> Self {
        SubmitProductUpdateError::Domain(err)
    }
}

/// Handler for product-update submissions.
pub struct SubmitProductUpdateHandler {
    sessions: Arc<WizardSessions<ProductUpdateStep>>,
    processes: Arc<dyn ProcessStore>,
    notifier: Arc<dyn Notifier>,
}

impl SubmitProductUpdateHandler {
    pub fn new(
        sessions: Arc<WizardSessions<ProductUpdateStep>>,
        processes: Arc<dyn ProcessStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            sessions,
            processes,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitProductUpdateCommand,
    ) -> Result<SubmitProductUpdateResult, SubmitProductUpdateError> {
        // 1. Take the final snapshot out of the registry
        let snapshot = match self.sessions.submit(cmd.wizard_id) {
            Ok(snapshot) => snapshot,
            Err(SessionError::WizardNotFound(id)) => {
                return Err(SubmitProductUpdateError::WizardNotFound(id));
            }
            Err(SessionError::Blocked(blocked)) => {
                for reason in blocked.reasons() {
                    self.notifier.notify(Notice::warning(reason.clone()));
                }
                return Err(SubmitProductUpdateError::Blocked(
                    blocked.reasons().to_vec(),
                ));
            }
        };

        // 2. Load the process in edit mode, or open a new one
        let mut process = match cmd.process_id {
            Some(id) => self
                .processes
                .find_by_id(id)
                .await?
                .ok_or(SubmitProductUpdateError::ProcessNotFound(id))?,
            None => {
                let produto = snapshot.text(fields::PRODUTO).unwrap_or_default();
                let area = snapshot
                    .text(fields::AREA_REGULATORIA)
                    .and_then(RegulatoryArea::from_key)
                    .ok_or_else(|| {
                        DomainError::new(
                            ErrorCode::InvalidFormat,
                            "Unknown regulatory area in wizard data",
                        )
                    })?;
                RegulatoryProcess::new(produto, area).map_err(DomainError::from)?
            }
        };

        // 3. Apply the documentation produced by the wizard
        let now = Timestamp::now();
        if let Some(main_file) = snapshot.text(fields::NOME_ARQUIVO_PRINCIPAL) {
            process
                .add_documento(main_file, now)
                .map_err(DomainError::from)?;
        }
        for attachment in snapshot.attachments(fields::DOCUMENTOS) {
            process
                .add_documento(attachment.name(), now)
                .map_err(DomainError::from)?;
        }
        let protocolo = snapshot
            .text(fields::PROTOCOLO_PETICIONAMENTO)
            .unwrap_or_default();
        process.record_note(
            &cmd.actor,
            format!("Atualização submetida via protocolo {}", protocolo),
        );

        // 4. Persist and notify
        self.processes.upsert(&process).await?;
        tracing::info!(
            process_id = %process.id(),
            actor = %cmd.actor,
            "product update submitted"
        );
        self.notifier.notify(Notice::success(format!(
            "Atualização de {} enviada",
            process.produto()
        )));

        Ok(SubmitProductUpdateResult {
            process_id: process.id(),
        })
    }
}
