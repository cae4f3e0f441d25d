//! Certificate store port.

use async_trait::async_trait;

use crate::domain::foundation::{CertificateId, DomainError, Store};
use crate::domain::regulatory::{Certificate, CertificateStatus};

/// Store port for the certificate list.
#[async_trait]
pub trait CertificateStore: Store<Certificate, CertificateId> {
    /// Finds certificates carrying the given status, in list order.
    async fn find_by_status(
        &self,
        status: CertificateStatus,
    ) -> Result<Vec<Certificate>, DomainError>;
}
