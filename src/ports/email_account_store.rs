//! Email account store port.

use async_trait::async_trait;

use crate::domain::corporate::EmailAccount;
use crate::domain::foundation::{DomainError, EmailAccountId, Store};

/// Store port for the managed email account list.
#[async_trait]
pub trait EmailAccountStore: Store<EmailAccount, EmailAccountId> {
    /// Finds an account by its address.
    async fn find_by_address(&self, endereco: &str) -> Result<Option<EmailAccount>, DomainError>;
}
