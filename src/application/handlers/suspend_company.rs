//! SuspendCompanyHandler - confirmation-gated suspension of a tenant.
//!
//! Suspension is destructive from the tenant's point of view (access is
//! cut immediately) and has no undo, so the command demands an explicit
//! `Confirmation` token.

use std::sync::Arc;

use crate::application::TransitionEnforcement;
use crate::domain::corporate::{Company, CompanyStatus};
use crate::domain::foundation::{require, CompanyId, Confirmation, DomainError};
use crate::ports::{CompanyStore, Notice, Notifier};

/// Command to suspend a company.
#[derive(Debug, Clone)]
pub struct SuspendCompanyCommand {
    pub company_id: CompanyId,
    /// Explicit user confirmation from the dialog; absent means refused.
    pub confirmation: Option<Confirmation>,
}

/// Result of a successful suspension.
#[derive(Debug)]
pub struct SuspendCompanyResult {
    pub company: Company,
}

/// Error type for company suspension.
#[derive(Debug, Clone)]
pub enum SuspendCompanyError {
    CompanyNotFound(CompanyId),
    Domain(DomainError),
}

impl std::fmt::Display for SuspendCompanyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuspendCompanyError::CompanyNotFound(id) => write!(f, "Company not found: {}", id),
            SuspendCompanyError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SuspendCompanyError {}

impl From<DomainError> for SuspendCompanyError {
    fn from(err: DomainError) -> Self {
        SuspendCompanyError::Domain(err)
    }
}

/// Handler for company suspension.
pub struct SuspendCompanyHandler {
    companies: Arc<dyn CompanyStore>,
    notifier: Arc<dyn Notifier>,
    enforcement: TransitionEnforcement,
}

impl SuspendCompanyHandler {
    pub fn new(
        companies: Arc<dyn CompanyStore>,
        notifier: Arc<dyn Notifier>,
        enforcement: TransitionEnforcement,
    ) -> Self {
        Self {
            companies,
            notifier,
            enforcement,
        }
    }

    pub async fn handle(
        &self,
        cmd: SuspendCompanyCommand,
    ) -> Result<SuspendCompanyResult, SuspendCompanyError> {
        // 1. The confirm dialog must have been accepted
        require(cmd.confirmation, "suspender empresa")?;

        // 2. Load the company
        let mut company = self
            .companies
            .find_by_id(cmd.company_id)
            .await?
            .ok_or(SuspendCompanyError::CompanyNotFound(cmd.company_id))?;

        // 3. Transition (validated unless the deployment is permissive)
        match self.enforcement {
            TransitionEnforcement::Strict => {
                company.transition_status(CompanyStatus::Suspensa)?;
            }
            TransitionEnforcement::Permissive => {
                company.force_status(CompanyStatus::Suspensa);
            }
        }

        // 4. Persist and notify
        self.companies.upsert(&company).await?;
        tracing::warn!(company_id = %cmd.company_id, "company suspended");
        self.notifier.notify(Notice::warning(format!(
            "Empresa {} suspensa",
            company.razao_social()
        )));

        Ok(SuspendCompanyResult { company })
    }
}
