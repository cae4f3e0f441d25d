//! Company store port.

use async_trait::async_trait;

use crate::domain::corporate::{Company, CompanyStatus};
use crate::domain::foundation::{CompanyId, DomainError, Store};

/// Store port for the tenant company list.
#[async_trait]
pub trait CompanyStore: Store<Company, CompanyId> {
    /// Finds companies carrying the given status, in list order.
    async fn find_by_status(&self, status: CompanyStatus) -> Result<Vec<Company>, DomainError>;

    /// Finds a company by its CNPJ (exact match on the stored form).
    async fn find_by_cnpj(&self, cnpj: &str) -> Result<Option<Company>, DomainError>;
}
