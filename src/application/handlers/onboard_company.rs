//! OnboardCompanyHandler - terminal submission of the company
//! onboarding wizard.

use std::sync::Arc;

use crate::application::sessions::{SessionError, WizardSessions};
use crate::domain::corporate::company::fields;
use crate::domain::corporate::{Company, OnboardingStep};
use crate::domain::foundation::{CompanyId, DomainError, Identified, WizardId};
use crate::ports::{CompanyStore, Notice, Notifier};

/// Command to submit the onboarding wizard.
#[derive(Debug, Clone)]
pub struct OnboardCompanyCommand {
    pub wizard_id: WizardId,
}

/// Result of a successful onboarding.
#[derive(Debug)]
pub struct OnboardCompanyResult {
    pub company_id: CompanyId,
}

/// Error type for company onboarding.
#[derive(Debug, Clone)]
pub enum OnboardCompanyError {
    WizardNotFound(WizardId),
    Blocked(Vec<String>),
    /// A company with the same CNPJ already exists.
    DuplicateCnpj(String),
    Domain(DomainError),
}

impl std::fmt::Display for OnboardCompanyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OnboardCompanyError::WizardNotFound(id) => write!(f, "Wizard not found: {}", id),
            OnboardCompanyError::Blocked(reasons) => {
                write!(f, "Submission blocked: {}", reasons.join("; "))
            }
            OnboardCompanyError::DuplicateCnpj(cnpj) => {
                write!(f, "A company with CNPJ {} already exists", cnpj)
            }
            OnboardCompanyError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for OnboardCompanyError {}

impl From<DomainError> for OnboardCompanyError {
    fn from(err: DomainError) -> Self {
        OnboardCompanyError::Domain(err)
    }
}

/// Handler for company onboarding.
pub struct OnboardCompanyHandler {
    sessions: Arc<WizardSessions<OnboardingStep>>,
    companies: Arc<dyn CompanyStore>,
    notifier: Arc<dyn Notifier>,
}

impl OnboardCompanyHandler {
    pub fn new(
        sessions: Arc<WizardSessions<OnboardingStep>>,
        companies: Arc<dyn CompanyStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            sessions,
            companies,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: OnboardCompanyCommand,
    ) -> Result<OnboardCompanyResult, OnboardCompanyError> {
        // 1. Take the final snapshot
        let snapshot = match self.sessions.submit(cmd.wizard_id) {
            Ok(snapshot) => snapshot,
            Err(SessionError::WizardNotFound(id)) => {
                return Err(OnboardCompanyError::WizardNotFound(id));
            }
            Err(SessionError::Blocked(blocked)) => {
                for reason in blocked.reasons() {
                    self.notifier.notify(Notice::warning(reason.clone()));
                }
                return Err(OnboardCompanyError::Blocked(blocked.reasons().to_vec()));
            }
        };

        // 2. Build the company and check for a CNPJ collision
        let company = Company::from_wizard(&snapshot).map_err(DomainError::from)?;
        if self
            .companies
            .find_by_cnpj(company.cnpj())
            .await?
            .is_some()
        {
            self.notifier.notify(Notice::warning(format!(
                "Já existe uma empresa com o CNPJ {}",
                company.cnpj()
            )));
            return Err(OnboardCompanyError::DuplicateCnpj(company.cnpj().to_string()));
        }

        // 3. Persist and notify
        self.companies.upsert(&company).await?;
        tracing::info!(company_id = %company.id(), "company onboarded");
        self.notifier.notify(Notice::success(format!(
            "Empresa {} cadastrada",
            company.razao_social()
        )));

        Ok(OnboardCompanyResult {
            company_id: company.id(),
        })
    }
}
