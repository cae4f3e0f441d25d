//! ClassifyGazetteUpdateHandler - the one place a historical record is
//! amended in place: the `viewed` flag and the relevance decision.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, GazetteUpdateId};
use crate::domain::regulatory::GazetteUpdate;
use crate::ports::{GazetteStore, Notice, Notifier};

/// Command to review a gazette update.
#[derive(Debug, Clone)]
pub struct ClassifyGazetteUpdateCommand {
    pub update_id: GazetteUpdateId,
    /// The relevance decision; `None` only marks the update as viewed.
    pub relevant: Option<bool>,
}

/// Result of a successful review.
#[derive(Debug)]
pub struct ClassifyGazetteUpdateResult {
    pub update: GazetteUpdate,
}

/// Error type for gazette review.
#[derive(Debug, Clone)]
pub enum ClassifyGazetteUpdateError {
    UpdateNotFound(GazetteUpdateId),
    Domain(DomainError),
}

impl std::fmt::Display for ClassifyGazetteUpdateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifyGazetteUpdateError::UpdateNotFound(id) => {
                write!(f, "Gazette update not found: {}", id)
            }
            ClassifyGazetteUpdateError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ClassifyGazetteUpdateError {}

impl From<DomainError> for ClassifyGazetteUpdateError {
    fn from(err: DomainError) -> Self {
        ClassifyGazetteUpdateError::Domain(err)
    }
}

/// Handler for gazette update review.
pub struct ClassifyGazetteUpdateHandler {
    updates: Arc<dyn GazetteStore>,
    notifier: Arc<dyn Notifier>,
}

impl ClassifyGazetteUpdateHandler {
    pub fn new(updates: Arc<dyn GazetteStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { updates, notifier }
    }

    pub async fn handle(
        &self,
        cmd: ClassifyGazetteUpdateCommand,
    ) -> Result<ClassifyGazetteUpdateResult, ClassifyGazetteUpdateError> {
        // 1. Load the update
        let mut update = self
            .updates
            .find_by_id(cmd.update_id)
            .await?
            .ok_or(ClassifyGazetteUpdateError::UpdateNotFound(cmd.update_id))?;

        // 2. Amend the review fields
        match cmd.relevant {
            Some(relevant) => update.classify(relevant),
            None => update.mark_viewed(),
        }

        // 3. Persist and notify
        self.updates.upsert(&update).await?;
        tracing::info!(update_id = %cmd.update_id, relevant = ?cmd.relevant, "gazette update reviewed");
        if cmd.relevant == Some(true) {
            self.notifier
                .notify(Notice::warning("Publicação marcada como relevante"));
        }

        Ok(ClassifyGazetteUpdateResult { update })
    }
}
