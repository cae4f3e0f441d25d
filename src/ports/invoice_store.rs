//! Invoice store port.

use async_trait::async_trait;

use crate::domain::billing::{Invoice, InvoiceStatus};
use crate::domain::foundation::{DomainError, InvoiceId, Store};

/// Store port for the invoice list.
#[async_trait]
pub trait InvoiceStore: Store<Invoice, InvoiceId> {
    /// Finds invoices carrying the given status, in list order.
    async fn find_by_status(&self, status: InvoiceStatus) -> Result<Vec<Invoice>, DomainError>;
}
