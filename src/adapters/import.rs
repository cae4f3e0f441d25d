//! Fixed-delay gazette importer.
//!
//! Stands in for the future network call: waits a configured delay, then
//! returns canned document metadata. The delay makes the cancellation
//! path in the import handler observable in tests.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::regulatory::ImportedGazetteDocument;
use crate::ports::GazetteImporter;

/// Importer that resolves after a fixed delay.
pub struct FixedDelayImporter {
    delay: Duration,
    documents: Vec<ImportedGazetteDocument>,
}

impl FixedDelayImporter {
    /// Creates an importer returning a canned DOU parse result.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            documents: default_documents(),
        }
    }

    /// Creates an importer returning the given documents.
    pub fn with_documents(delay: Duration, documents: Vec<ImportedGazetteDocument>) -> Self {
        Self { delay, documents }
    }
}

#[async_trait]
impl GazetteImporter for FixedDelayImporter {
    async fn import(&self, source: &str) -> Result<Vec<ImportedGazetteDocument>, DomainError> {
        tracing::debug!(source, delay_ms = self.delay.as_millis() as u64, "importing gazette edition");
        tokio::time::sleep(self.delay).await;
        tracing::info!(
            source,
            documents = self.documents.len(),
            "gazette import finished"
        );
        Ok(self.documents.clone())
    }
}

fn default_documents() -> Vec<ImportedGazetteDocument> {
    vec![
        ImportedGazetteDocument {
            titulo: "Resolução RDC nº 941/2026".to_string(),
            orgao: "ANVISA".to_string(),
            publicado_em: Timestamp::parse_rfc3339("2026-03-12T08:00:00Z")
                .expect("canned timestamp is valid"),
            resumo: "Altera os requisitos de rotulagem de equipamentos eletromédicos".to_string(),
        },
        ImportedGazetteDocument {
            titulo: "Instrução Normativa nº 310/2026".to_string(),
            orgao: "ANVISA".to_string(),
            publicado_em: Timestamp::parse_rfc3339("2026-03-12T08:00:00Z")
                .expect("canned timestamp is valid"),
            resumo: "Define procedimentos para peticionamento eletrônico".to_string(),
        },
    ]
}
