//! Gazette (DOU) update store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GazetteUpdateId, Store};
use crate::domain::regulatory::GazetteUpdate;

/// Store port for the DOU update list.
#[async_trait]
pub trait GazetteStore: Store<GazetteUpdate, GazetteUpdateId> {
    /// Finds updates that still await a relevance decision.
    async fn find_pending_review(&self) -> Result<Vec<GazetteUpdate>, DomainError>;
}
