//! Gazette importer port - the asynchronous document-parsing boundary.
//!
//! Importing a DOU edition is a time-bounded asynchronous operation with
//! a single success continuation. The caller owns cancellation: dropping
//! or racing the returned future must leave no state mutated.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::regulatory::ImportedGazetteDocument;

/// Port for parsing document metadata out of a gazette edition.
#[async_trait]
pub trait GazetteImporter: Send + Sync {
    /// Parses the edition identified by `source` and returns the
    /// document metadata found in it.
    async fn import(&self, source: &str) -> Result<Vec<ImportedGazetteDocument>, DomainError>;
}
