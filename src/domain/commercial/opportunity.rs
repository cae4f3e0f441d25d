//! Bid opportunities and the triagem/participação phase gate.
//!
//! An opportunity moves through two working phases - triagem (screening)
//! and participação (bid participation) - before finishing. Phase
//! completion is derived from the business status on every check: once
//! the status leaves `EmTriagem`, the screening fields lock read-only.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{
    DomainError, ErrorCode, Identified, OpportunityId, Severity, StateMachine, Timeline,
    TimelineEntry, Timestamp, ValidationError,
};
use crate::domain::wizard::PhasePolicy;

/// Business status of an opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStatus {
    #[default]
    EmTriagem,
    PerdidaTriagem,
    EmParticipacao,
    Vencida,
    Perdida,
    Cancelada,
}

impl OpportunityStatus {
    pub fn severity(&self) -> Severity {
        match self {
            OpportunityStatus::EmTriagem => Severity::Info,
            OpportunityStatus::PerdidaTriagem => Severity::Danger,
            OpportunityStatus::EmParticipacao => Severity::Warning,
            OpportunityStatus::Vencida => Severity::Success,
            OpportunityStatus::Perdida => Severity::Danger,
            OpportunityStatus::Cancelada => Severity::Neutral,
        }
    }
}

impl StateMachine for OpportunityStatus {
    // The table the source implied but never enforced: losing at triage
    // is only reachable while still in triage.
    fn can_transition_to(&self, target: &Self) -> bool {
        use OpportunityStatus::*;
        matches!(
            (self, target),
            (EmTriagem, PerdidaTriagem)
                | (EmTriagem, EmParticipacao)
                | (EmTriagem, Cancelada)
                | (EmParticipacao, Vencida)
                | (EmParticipacao, Perdida)
                | (EmParticipacao, Cancelada)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OpportunityStatus::*;
        match self {
            EmTriagem => vec![PerdidaTriagem, EmParticipacao, Cancelada],
            EmParticipacao => vec![Vencida, Perdida, Cancelada],
            PerdidaTriagem | Vencida | Perdida | Cancelada => vec![],
        }
    }
}

impl fmt::Display for OpportunityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OpportunityStatus::EmTriagem => "Em Triagem",
            OpportunityStatus::PerdidaTriagem => "Perdida na Triagem",
            OpportunityStatus::EmParticipacao => "Em Participação",
            OpportunityStatus::Vencida => "Vencida",
            OpportunityStatus::Perdida => "Perdida",
            OpportunityStatus::Cancelada => "Cancelada",
        };
        write!(f, "{}", s)
    }
}

/// Working phases of an opportunity, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityPhase {
    Triagem,
    Participacao,
    Finalizada,
}

impl fmt::Display for OpportunityPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OpportunityPhase::Triagem => "Triagem",
            OpportunityPhase::Participacao => "Participação",
            OpportunityPhase::Finalizada => "Finalizada",
        };
        write!(f, "{}", s)
    }
}

/// Phase gate policy for opportunities.
pub struct OpportunityPhasePolicy;

impl PhasePolicy for OpportunityPhasePolicy {
    type Status = OpportunityStatus;
    type Phase = OpportunityPhase;

    fn phases() -> &'static [OpportunityPhase] {
        &[
            OpportunityPhase::Triagem,
            OpportunityPhase::Participacao,
            OpportunityPhase::Finalizada,
        ]
    }

    fn current_phase(status: OpportunityStatus) -> OpportunityPhase {
        match status {
            OpportunityStatus::EmTriagem => OpportunityPhase::Triagem,
            OpportunityStatus::EmParticipacao => OpportunityPhase::Participacao,
            OpportunityStatus::PerdidaTriagem
            | OpportunityStatus::Vencida
            | OpportunityStatus::Perdida
            | OpportunityStatus::Cancelada => OpportunityPhase::Finalizada,
        }
    }

    fn is_phase_complete(phase: OpportunityPhase, status: OpportunityStatus) -> bool {
        match phase {
            OpportunityPhase::Triagem => status != OpportunityStatus::EmTriagem,
            OpportunityPhase::Participacao => matches!(
                status,
                OpportunityStatus::Vencida | OpportunityStatus::Perdida
            ),
            OpportunityPhase::Finalizada => false,
        }
    }
}

/// Screening-phase fields of an opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningData {
    pub orgao: String,
    pub objeto: String,
    pub valor_estimado: f64,
}

/// Participation-phase fields of an opportunity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipationData {
    pub valor_proposta: Option<f64>,
    pub numero_pregao: Option<String>,
}

/// The opportunity aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    id: OpportunityId,
    screening: ScreeningData,
    participation: ParticipationData,
    status: OpportunityStatus,
    timeline: Timeline,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Opportunity {
    /// Registers a new opportunity in triage.
    pub fn new(
        orgao: impl Into<String>,
        objeto: impl Into<String>,
        valor_estimado: f64,
    ) -> Result<Self, ValidationError> {
        let orgao = orgao.into();
        let objeto = objeto.into();
        if orgao.trim().is_empty() {
            return Err(ValidationError::empty_field("orgao"));
        }
        if objeto.trim().is_empty() {
            return Err(ValidationError::empty_field("objeto"));
        }
        if valor_estimado < 0.0 {
            return Err(ValidationError::invalid_format(
                "valor_estimado",
                "Estimated value cannot be negative",
            ));
        }
        let now = Timestamp::now();
        Ok(Self {
            id: OpportunityId::new(),
            screening: ScreeningData {
                orgao,
                objeto,
                valor_estimado,
            },
            participation: ParticipationData::default(),
            status: OpportunityStatus::EmTriagem,
            timeline: Timeline::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn screening(&self) -> &ScreeningData {
        &self.screening
    }

    pub fn participation(&self) -> &ParticipationData {
        &self.participation
    }

    pub fn status(&self) -> OpportunityStatus {
        self.status
    }

    pub fn phase(&self) -> OpportunityPhase {
        OpportunityPhasePolicy::current_phase(self.status)
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns true while screening fields remain editable.
    pub fn screening_editable(&self) -> bool {
        !OpportunityPhasePolicy::is_phase_complete(OpportunityPhase::Triagem, self.status)
    }

    /// Updates the screening fields.
    ///
    /// Rejected - not silently accepted - once the triage phase has
    /// completed.
    pub fn update_screening(&mut self, screening: ScreeningData) -> Result<(), DomainError> {
        if !self.screening_editable() {
            return Err(DomainError::new(
                ErrorCode::PhaseLocked,
                "Triage phase is complete; screening fields are read-only",
            ));
        }
        self.screening = screening;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Updates the participation fields.
    ///
    /// Only meaningful from the participation phase onward.
    pub fn update_participation(
        &mut self,
        participation: ParticipationData,
    ) -> Result<(), DomainError> {
        if self.status == OpportunityStatus::EmTriagem {
            return Err(DomainError::new(
                ErrorCode::PhaseLocked,
                "Participation has not started yet",
            ));
        }
        if OpportunityPhasePolicy::is_phase_complete(OpportunityPhase::Participacao, self.status) {
            return Err(DomainError::new(
                ErrorCode::PhaseLocked,
                "Participation phase is complete; its fields are read-only",
            ));
        }
        self.participation = participation;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Performs a validated status transition and records it.
    pub fn transition_status(
        &mut self,
        target: OpportunityStatus,
        actor: &str,
    ) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        self.record(actor, format!("Status alterado para {}", target));
        Ok(())
    }

    /// Sets the status without consulting the transition table
    /// (permissive deployments only).
    pub fn force_status(&mut self, target: OpportunityStatus, actor: &str) {
        self.status = target;
        self.record(actor, format!("Status alterado para {}", target));
    }

    fn record(&mut self, actor: &str, content: String) {
        let now = Timestamp::now();
        if let Ok(entry) = TimelineEntry::new(now, actor, content) {
            self.timeline.append(entry);
        }
        self.updated_at = now;
    }
}

impl Identified for Opportunity {
    type Id = OpportunityId;

    fn id(&self) -> OpportunityId {
        self.id
    }
}
