//! DeleteEmailAccountHandler - confirmation-gated account removal.
//!
//! There is no undo after the confirm dialog; the account simply leaves
//! the list.

use std::sync::Arc;

use crate::domain::foundation::{require, Confirmation, DomainError, EmailAccountId, ErrorCode};
use crate::ports::{EmailAccountStore, Notice, Notifier};

/// Command to delete an email account.
#[derive(Debug, Clone)]
pub struct DeleteEmailAccountCommand {
    pub account_id: EmailAccountId,
    /// Explicit user confirmation from the dialog; absent means refused.
    pub confirmation: Option<Confirmation>,
}

/// Error type for account deletion.
#[derive(Debug, Clone)]
pub enum DeleteEmailAccountError {
    AccountNotFound(EmailAccountId),
    Domain(DomainError),
}

impl std::fmt::Display for DeleteEmailAccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteEmailAccountError::AccountNotFound(id) => {
                write!(f, "Email account not found: {}", id)
            }
            DeleteEmailAccountError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DeleteEmailAccountError {}

impl From<DomainError> for DeleteEmailAccountError {
    fn from(err: DomainError) -> Self {
        DeleteEmailAccountError::Domain(err)
    }
}

/// Handler for email account deletion.
pub struct DeleteEmailAccountHandler {
    accounts: Arc<dyn EmailAccountStore>,
    notifier: Arc<dyn Notifier>,
}

impl DeleteEmailAccountHandler {
    pub fn new(accounts: Arc<dyn EmailAccountStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { accounts, notifier }
    }

    pub async fn handle(
        &self,
        cmd: DeleteEmailAccountCommand,
    ) -> Result<(), DeleteEmailAccountError> {
        // 1. The confirm dialog must have been accepted
        require(cmd.confirmation, "excluir conta de e-mail")?;

        // 2. The account must exist
        let account = self
            .accounts
            .find_by_id(cmd.account_id)
            .await?
            .ok_or(DeleteEmailAccountError::AccountNotFound(cmd.account_id))?;

        // 3. Remove and notify
        self.accounts.remove(cmd.account_id).await.map_err(|e| {
            if e.code == ErrorCode::StoreError {
                DeleteEmailAccountError::AccountNotFound(cmd.account_id)
            } else {
                DeleteEmailAccountError::Domain(e)
            }
        })?;
        tracing::warn!(account = %account.endereco(), "email account deleted");
        self.notifier.notify(Notice::success(format!(
            "Conta {} excluída",
            account.endereco()
        )));

        Ok(())
    }
}
