//! Supply requisitions and their three-step wizard.
//!
//! The quotation step carries the minimum-quote rule: three supplier
//! quotes, or fewer with a written justification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{
    DomainError, ErrorCode, Identified, RequisitionId, Severity, StateMachine, Timestamp,
    ValidationError,
};
use crate::domain::wizard::{MinListLen, Step, StepDefinition, StepSequence, WizardData};

/// Minimum number of supplier quotes before justification is required.
pub const MIN_QUOTES: usize = 3;

/// Lifecycle status of a requisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequisitionStatus {
    #[default]
    Rascunho,
    EmCotacao,
    Aprovada,
    Rejeitada,
    Concluida,
}

impl RequisitionStatus {
    pub fn severity(&self) -> Severity {
        match self {
            RequisitionStatus::Rascunho => Severity::Neutral,
            RequisitionStatus::EmCotacao => Severity::Info,
            RequisitionStatus::Aprovada => Severity::Success,
            RequisitionStatus::Rejeitada => Severity::Danger,
            RequisitionStatus::Concluida => Severity::Success,
        }
    }
}

impl StateMachine for RequisitionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RequisitionStatus::*;
        matches!(
            (self, target),
            (Rascunho, EmCotacao)
                | (EmCotacao, Aprovada)
                | (EmCotacao, Rejeitada)
                | (Aprovada, Concluida)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RequisitionStatus::*;
        match self {
            Rascunho => vec![EmCotacao],
            EmCotacao => vec![Aprovada, Rejeitada],
            Aprovada => vec![Concluida],
            Rejeitada | Concluida => vec![],
        }
    }
}

impl fmt::Display for RequisitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequisitionStatus::Rascunho => "Rascunho",
            RequisitionStatus::EmCotacao => "Em Cotação",
            RequisitionStatus::Aprovada => "Aprovada",
            RequisitionStatus::Rejeitada => "Rejeitada",
            RequisitionStatus::Concluida => "Concluída",
        };
        write!(f, "{}", s)
    }
}

/// One requested item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionItem {
    pub descricao: String,
    pub quantidade: u32,
}

/// One supplier quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierQuote {
    pub fornecedor: String,
    pub valor: f64,
}

/// The supply requisition aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requisition {
    id: RequisitionId,
    solicitante: String,
    itens: Vec<RequisitionItem>,
    cotacoes: Vec<SupplierQuote>,
    justificativa_cotacoes: Option<String>,
    status: RequisitionStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Requisition {
    /// Creates a requisition, enforcing the quote-minimum rule.
    pub fn new(
        solicitante: impl Into<String>,
        itens: Vec<RequisitionItem>,
        cotacoes: Vec<SupplierQuote>,
        justificativa_cotacoes: Option<String>,
    ) -> Result<Self, ValidationError> {
        let solicitante = solicitante.into();
        if solicitante.trim().is_empty() {
            return Err(ValidationError::empty_field("solicitante"));
        }
        if itens.is_empty() {
            return Err(ValidationError::empty_field("itens"));
        }
        let justified = justificativa_cotacoes
            .as_deref()
            .map_or(false, |j| !j.trim().is_empty());
        if cotacoes.len() < MIN_QUOTES && !justified {
            return Err(ValidationError::out_of_range(
                "cotacoes",
                MIN_QUOTES as i64,
                i64::MAX,
                cotacoes.len() as i64,
            ));
        }
        let now = Timestamp::now();
        Ok(Self {
            id: RequisitionId::new(),
            solicitante,
            itens,
            cotacoes,
            justificativa_cotacoes,
            status: RequisitionStatus::Rascunho,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuilds a requisition from a submitted wizard snapshot.
    pub fn from_wizard(solicitante: &str, data: &WizardData) -> Result<Self, ValidationError> {
        let itens: Vec<RequisitionItem> = data
            .list(fields::ITENS)
            .iter()
            .filter_map(|v| v.as_text())
            .map(|descricao| RequisitionItem {
                descricao: descricao.to_string(),
                quantidade: 1,
            })
            .collect();
        let cotacoes: Vec<SupplierQuote> = data
            .list(fields::COTACOES)
            .iter()
            .filter_map(|v| v.as_text())
            .map(|fornecedor| SupplierQuote {
                fornecedor: fornecedor.to_string(),
                valor: 0.0,
            })
            .collect();
        let justificativa = data
            .text(fields::JUSTIFICATIVA_COTACOES)
            .map(|s| s.to_string());

        Self::new(solicitante, itens, cotacoes, justificativa)
    }

    pub fn solicitante(&self) -> &str {
        &self.solicitante
    }

    pub fn itens(&self) -> &[RequisitionItem] {
        &self.itens
    }

    pub fn cotacoes(&self) -> &[SupplierQuote] {
        &self.cotacoes
    }

    pub fn justificativa_cotacoes(&self) -> Option<&str> {
        self.justificativa_cotacoes.as_deref()
    }

    pub fn status(&self) -> RequisitionStatus {
        self.status
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Performs a validated status transition.
    pub fn transition_status(&mut self, target: RequisitionStatus) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

impl Identified for Requisition {
    type Id = RequisitionId;

    fn id(&self) -> RequisitionId {
        self.id
    }
}

/// Field keys of the requisition wizard.
pub mod fields {
    pub const SOLICITANTE: &str = "solicitante";
    pub const ITENS: &str = "itens";
    pub const COTACOES: &str = "cotacoes";
    pub const JUSTIFICATIVA_COTACOES: &str = "justificativa_cotacoes";
    pub const CONFIRMADO: &str = "confirmado";
}

/// Steps of the requisition wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequisitionStep {
    Itens,
    Cotacoes,
    Revisao,
}

impl Step for RequisitionStep {
    fn label(&self) -> &'static str {
        match self {
            RequisitionStep::Itens => "Itens",
            RequisitionStep::Cotacoes => "Cotações",
            RequisitionStep::Revisao => "Revisão",
        }
    }
}

/// Builds the requisition step sequence.
pub fn sequence() -> StepSequence<RequisitionStep> {
    StepSequence::new(vec![
        StepDefinition::new(RequisitionStep::Itens)
            .require(fields::SOLICITANTE)
            .require(fields::ITENS),
        StepDefinition::new(RequisitionStep::Cotacoes).rule(
            MinListLen::new(fields::COTACOES, MIN_QUOTES)
                .or_justified_by(fields::JUSTIFICATIVA_COTACOES),
        ),
        StepDefinition::new(RequisitionStep::Revisao).require(fields::CONFIRMADO),
    ])
    .expect("requisition sequence is statically valid")
}
