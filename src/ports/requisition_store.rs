//! Requisition store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RequisitionId, Store};
use crate::domain::procurement::{Requisition, RequisitionStatus};

/// Store port for the supply requisition list.
#[async_trait]
pub trait RequisitionStore: Store<Requisition, RequisitionId> {
    /// Finds requisitions carrying the given status, in list order.
    async fn find_by_status(
        &self,
        status: RequisitionStatus,
    ) -> Result<Vec<Requisition>, DomainError>;
}
