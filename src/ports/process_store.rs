//! Regulatory process store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProcessId, Store};
use crate::domain::regulatory::{ProcessStatus, RegulatoryProcess};

/// Store port for the regulatory process list.
#[async_trait]
pub trait ProcessStore: Store<RegulatoryProcess, ProcessId> {
    /// Finds processes carrying the given status, in list order.
    async fn find_by_status(
        &self,
        status: ProcessStatus,
    ) -> Result<Vec<RegulatoryProcess>, DomainError>;
}
