//! ImportGazetteDocumentsHandler - cancellable asynchronous DOU import.
//!
//! The import races against an explicit cancellation signal tied to the
//! wizard's lifetime. Closing the wizard mid-import (or firing the
//! cancel handle) drops the result on the floor: nothing is mutated
//! after the modal is gone.

use std::sync::Arc;
use tokio::sync::oneshot;

use crate::application::sessions::WizardSessions;
use crate::domain::foundation::{DomainError, WizardId};
use crate::domain::regulatory::ProductUpdateStep;
use crate::ports::{GazetteImporter, Notice, Notifier};

/// Field that receives imported document titles in the open wizard.
pub const IMPORTED_FIELD: &str = "documentos_importados";

/// Creates a linked cancel handle / signal pair.
///
/// The handle lives with the wizard's owner; the signal travels into the
/// import call.
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = oneshot::channel();
    (CancelHandle(tx), CancelSignal(rx))
}

/// Owner-side trigger that aborts a running import.
pub struct CancelHandle(oneshot::Sender<()>);

impl CancelHandle {
    /// Fires the cancellation. Dropping the handle without calling this
    /// never cancels the import.
    pub fn cancel(self) {
        let _ = self.0.send(());
    }
}

/// Import-side future that resolves when cancellation fires.
pub struct CancelSignal(oneshot::Receiver<()>);

impl CancelSignal {
    async fn cancelled(self) {
        match self.0.await {
            Ok(()) => {}
            // Handle dropped without cancelling: never resolve.
            Err(_) => std::future::pending::<()>().await,
        }
    }
}

/// Command to import a gazette edition into an open wizard.
#[derive(Debug, Clone)]
pub struct ImportGazetteDocumentsCommand {
    /// The wizard that will receive the parsed document titles.
    pub wizard_id: WizardId,
    /// The gazette edition to parse (e.g. "DOU 2026-03-12, seção 1").
    pub source: String,
}

/// How the import ended.
#[derive(Debug, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Parsed documents were merged into the open wizard.
    Completed { imported: usize },
    /// The cancel handle fired before the import finished.
    Cancelled,
    /// The import finished but the wizard had been closed; the result
    /// was discarded without mutating anything.
    Discarded,
}

/// Error type for the gazette import.
#[derive(Debug, Clone)]
pub enum ImportGazetteDocumentsError {
    Domain(DomainError),
}

impl std::fmt::Display for ImportGazetteDocumentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportGazetteDocumentsError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ImportGazetteDocumentsError {}

impl From<DomainError> for ImportGazetteDocumentsError {
    fn from(err: DomainError) -> Self {
        ImportGazetteDocumentsError::Domain(err)
    }
}

/// Handler for the cancellable gazette import.
pub struct ImportGazetteDocumentsHandler {
    importer: Arc<dyn GazetteImporter>,
    sessions: Arc<WizardSessions<ProductUpdateStep>>,
    notifier: Arc<dyn Notifier>,
}

impl ImportGazetteDocumentsHandler {
    pub fn new(
        importer: Arc<dyn GazetteImporter>,
        sessions: Arc<WizardSessions<ProductUpdateStep>>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            importer,
            sessions,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: ImportGazetteDocumentsCommand,
        cancel: CancelSignal,
    ) -> Result<ImportOutcome, ImportGazetteDocumentsError> {
        // 1. Race the importer against the cancellation signal
        let documents = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(source = %cmd.source, "gazette import cancelled");
                return Ok(ImportOutcome::Cancelled);
            }
            result = self.importer.import(&cmd.source) => result?,
        };

        // 2. The wizard may have been closed while the import ran
        if !self.sessions.is_open(cmd.wizard_id) {
            tracing::info!(
                source = %cmd.source,
                "gazette import finished after wizard closed; result discarded"
            );
            return Ok(ImportOutcome::Discarded);
        }

        // 3. Merge the titles into the open wizard
        let imported = documents.len();
        let merged = self.sessions.with(cmd.wizard_id, |wizard| {
            for doc in &documents {
                wizard.push_to_list(IMPORTED_FIELD, doc.titulo.as_str());
            }
        });
        if merged.is_err() {
            // Closed between the check and the merge; same discard path.
            return Ok(ImportOutcome::Discarded);
        }

        self.notifier.notify(Notice::success(format!(
            "{} documentos importados do DOU",
            imported
        )));
        Ok(ImportOutcome::Completed { imported })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::import::FixedDelayImporter;
    use crate::adapters::notify::RecordingNotifier;
    use crate::domain::foundation::AttachmentPolicy;
    use crate::domain::regulatory::product_update;
    use std::time::Duration;

    fn setup(delay: Duration) -> (Arc<WizardSessions<ProductUpdateStep>>, ImportGazetteDocumentsHandler) {
        let sessions = Arc::new(WizardSessions::new(|| {
            product_update::sequence(AttachmentPolicy::default())
        }));
        let handler = ImportGazetteDocumentsHandler::new(
            Arc::new(FixedDelayImporter::new(delay)),
            sessions.clone(),
            Arc::new(RecordingNotifier::new()),
        );
        (sessions, handler)
    }

    #[tokio::test]
    async fn completed_import_merges_titles_into_the_wizard() {
        let (sessions, handler) = setup(Duration::from_millis(5));
        let wizard_id = sessions.open();
        let (_handle, signal) = cancel_pair();

        let outcome = handler
            .handle(
                ImportGazetteDocumentsCommand {
                    wizard_id,
                    source: "DOU 2026-03-12".to_string(),
                },
                signal,
            )
            .await
            .unwrap();

        assert_eq!(outcome, ImportOutcome::Completed { imported: 2 });
        let titles = sessions
            .with(wizard_id, |w| w.data().list_len(IMPORTED_FIELD))
            .unwrap();
        assert_eq!(titles, 2);
    }

    #[tokio::test]
    async fn cancellation_wins_the_race_and_mutates_nothing() {
        let (sessions, handler) = setup(Duration::from_secs(30));
        let wizard_id = sessions.open();
        let (handle, signal) = cancel_pair();

        handle.cancel();
        let outcome = handler
            .handle(
                ImportGazetteDocumentsCommand {
                    wizard_id,
                    source: "DOU 2026-03-12".to_string(),
                },
                signal,
            )
            .await
            .unwrap();

        assert_eq!(outcome, ImportOutcome::Cancelled);
        let len = sessions
            .with(wizard_id, |w| w.data().list_len(IMPORTED_FIELD))
            .unwrap();
        assert_eq!(len, 0);
    }

    #[tokio::test]
    async fn result_is_discarded_when_wizard_closed_mid_import() {
        let (sessions, handler) = setup(Duration::from_millis(20));
        let wizard_id = sessions.open();
        let (_handle, signal) = cancel_pair();

        // Close the modal while the import is in flight.
        let sessions_clone = sessions.clone();
        let closer = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            sessions_clone.cancel(wizard_id);
        });

        let outcome = handler
            .handle(
                ImportGazetteDocumentsCommand {
                    wizard_id,
                    source: "DOU 2026-03-12".to_string(),
                },
                signal,
            )
            .await
            .unwrap();
        closer.await.unwrap();

        assert_eq!(outcome, ImportOutcome::Discarded);
        assert!(!sessions.is_open(wizard_id));
    }

    #[tokio::test]
    async fn dropping_the_handle_does_not_cancel() {
        let (sessions, handler) = setup(Duration::from_millis(5));
        let wizard_id = sessions.open();
        let (handle, signal) = cancel_pair();
        drop(handle);

        let outcome = handler
            .handle(
                ImportGazetteDocumentsCommand {
                    wizard_id,
                    source: "DOU 2026-03-12".to_string(),
                },
                signal,
            )
            .await
            .unwrap();

        assert_eq!(outcome, ImportOutcome::Completed { imported: 2 });
    }
}
