//! Distributor companies (tenants) and the onboarding wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{
    CompanyId, DomainError, ErrorCode, Identified, Severity, StateMachine, Timestamp,
    ValidationError,
};
use crate::domain::wizard::{Step, StepDefinition, StepSequence, WizardData};

/// Lifecycle status of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    #[default]
    Pendente,
    Ativa,
    Suspensa,
    Encerrada,
}

impl CompanyStatus {
    pub fn severity(&self) -> Severity {
        match self {
            CompanyStatus::Pendente => Severity::Warning,
            CompanyStatus::Ativa => Severity::Success,
            CompanyStatus::Suspensa => Severity::Danger,
            CompanyStatus::Encerrada => Severity::Neutral,
        }
    }
}

impl StateMachine for CompanyStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CompanyStatus::*;
        matches!(
            (self, target),
            (Pendente, Ativa)
                | (Ativa, Suspensa)
                | (Ativa, Encerrada)
                | (Suspensa, Ativa)
                | (Suspensa, Encerrada)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CompanyStatus::*;
        match self {
            Pendente => vec![Ativa],
            Ativa => vec![Suspensa, Encerrada],
            Suspensa => vec![Ativa, Encerrada],
            Encerrada => vec![],
        }
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompanyStatus::Pendente => "Pendente",
            CompanyStatus::Ativa => "Ativa",
            CompanyStatus::Suspensa => "Suspensa",
            CompanyStatus::Encerrada => "Encerrada",
        };
        write!(f, "{}", s)
    }
}

/// A distributor company managed by the super-admin tenant screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    razao_social: String,
    cnpj: String,
    email_contato: String,
    status: CompanyStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Company {
    /// Registers a company pending activation.
    pub fn new(
        razao_social: impl Into<String>,
        cnpj: impl Into<String>,
        email_contato: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let razao_social = razao_social.into();
        let cnpj = cnpj.into();
        let email_contato = email_contato.into();

        if razao_social.trim().is_empty() {
            return Err(ValidationError::empty_field("razao_social"));
        }
        validate_cnpj(&cnpj)?;
        if !email_contato.contains('@') {
            return Err(ValidationError::invalid_format(
                "email_contato",
                "Missing @ symbol",
            ));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: CompanyId::new(),
            razao_social,
            cnpj,
            email_contato,
            status: CompanyStatus::Pendente,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuilds a company from a submitted onboarding snapshot.
    pub fn from_wizard(data: &WizardData) -> Result<Self, ValidationError> {
        Self::new(
            data.text(fields::RAZAO_SOCIAL).unwrap_or_default(),
            data.text(fields::CNPJ).unwrap_or_default(),
            data.text(fields::EMAIL_CONTATO).unwrap_or_default(),
        )
    }

    pub fn razao_social(&self) -> &str {
        &self.razao_social
    }

    pub fn cnpj(&self) -> &str {
        &self.cnpj
    }

    pub fn email_contato(&self) -> &str {
        &self.email_contato
    }

    pub fn status(&self) -> CompanyStatus {
        self.status
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Performs a validated status transition.
    pub fn transition_status(&mut self, target: CompanyStatus) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Sets the status without consulting the transition table
    /// (permissive deployments only).
    pub fn force_status(&mut self, target: CompanyStatus) {
        self.status = target;
        self.updated_at = Timestamp::now();
    }
}

impl Identified for Company {
    type Id = CompanyId;

    fn id(&self) -> CompanyId {
        self.id
    }
}

/// CNPJ format check: exactly 14 digits after stripping punctuation.
fn validate_cnpj(cnpj: &str) -> Result<(), ValidationError> {
    let digits: String = cnpj.chars().filter(|c| c.is_ascii_digit()).collect();
    let punctuation_only = cnpj
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '/' | '-'));
    if digits.len() != 14 || !punctuation_only {
        return Err(ValidationError::invalid_format(
            "cnpj",
            "CNPJ must have exactly 14 digits",
        ));
    }
    Ok(())
}

/// Field keys of the onboarding wizard.
pub mod fields {
    pub const RAZAO_SOCIAL: &str = "razao_social";
    pub const CNPJ: &str = "cnpj";
    pub const EMAIL_CONTATO: &str = "email_contato";
    pub const TELEFONE: &str = "telefone";
    pub const ACEITE_TERMOS: &str = "aceite_termos";
}

/// Steps of the company onboarding wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnboardingStep {
    DadosEmpresa,
    Contato,
    Revisao,
}

impl Step for OnboardingStep {
    fn label(&self) -> &'static str {
        match self {
            OnboardingStep::DadosEmpresa => "Dados da Empresa",
            OnboardingStep::Contato => "Contato",
            OnboardingStep::Revisao => "Revisão",
        }
    }
}

/// Builds the onboarding step sequence.
pub fn sequence() -> StepSequence<OnboardingStep> {
    StepSequence::new(vec![
        StepDefinition::new(OnboardingStep::DadosEmpresa)
            .require(fields::RAZAO_SOCIAL)
            .require(fields::CNPJ),
        StepDefinition::new(OnboardingStep::Contato)
            .require(fields::EMAIL_CONTATO)
            .require(fields::TELEFONE),
        StepDefinition::new(OnboardingStep::Revisao).require(fields::ACEITE_TERMOS),
    ])
    .expect("onboarding sequence is statically valid")
}
