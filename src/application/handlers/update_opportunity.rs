//! UpdateOpportunityHandler - phase-gated edits and status transitions.
//!
//! Screening edits are refused once the triage phase has completed; the
//! refusal comes back as an error and a toast, never as a silent no-op
//! that pretends to accept the change.

use std::sync::Arc;

use crate::application::TransitionEnforcement;
use crate::domain::commercial::{Opportunity, OpportunityStatus, ParticipationData, ScreeningData};
use crate::domain::foundation::{DomainError, OpportunityId};
use crate::ports::{Notice, Notifier, OpportunityStore};

/// Command carrying the edits for one opportunity.
#[derive(Debug, Clone, Default)]
pub struct UpdateOpportunityCommand {
    pub opportunity_id: OpportunityId,
    /// Screening-phase field changes (triagem).
    pub screening: Option<ScreeningData>,
    /// Participation-phase field changes.
    pub participation: Option<ParticipationData>,
    /// Requested status transition.
    pub new_status: Option<OpportunityStatus>,
    /// Who is editing.
    pub actor: String,
}

impl UpdateOpportunityCommand {
    pub fn for_opportunity(opportunity_id: OpportunityId, actor: impl Into<String>) -> Self {
        Self {
            opportunity_id,
            actor: actor.into(),
            ..Self::default()
        }
    }
}

/// Result of a successful update.
#[derive(Debug)]
pub struct UpdateOpportunityResult {
    pub opportunity: Opportunity,
}

/// Error type for opportunity updates.
#[derive(Debug, Clone)]
pub enum UpdateOpportunityError {
    OpportunityNotFound(OpportunityId),
    Domain(DomainError),
}

impl std::fmt::Display for UpdateOpportunityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateOpportunityError::OpportunityNotFound(id) => {
                write!(f, "Opportunity not found: {}", id)
            }
            UpdateOpportunityError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for UpdateOpportunityError {}

impl From<DomainError> for UpdateOpportunityError {
    fn from(err: DomainError) -> Self {
        UpdateOpportunityError::Domain(err)
    }
}

/// Handler for opportunity updates.
pub struct UpdateOpportunityHandler {
    opportunities: Arc<dyn OpportunityStore>,
    notifier: Arc<dyn Notifier>,
    enforcement: TransitionEnforcement,
}

impl UpdateOpportunityHandler {
    pub fn new(
        opportunities: Arc<dyn OpportunityStore>,
        notifier: Arc<dyn Notifier>,
        enforcement: TransitionEnforcement,
    ) -> Self {
        Self {
            opportunities,
            notifier,
            enforcement,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateOpportunityCommand,
    ) -> Result<UpdateOpportunityResult, UpdateOpportunityError> {
        // 1. Load the opportunity
        let mut opportunity = self
            .opportunities
            .find_by_id(cmd.opportunity_id)
            .await?
            .ok_or(UpdateOpportunityError::OpportunityNotFound(cmd.opportunity_id))?;

        // 2. Apply field edits; the aggregate enforces the phase gate
        if let Some(screening) = cmd.screening {
            if let Err(err) = opportunity.update_screening(screening) {
                self.notifier
                    .notify(Notice::warning("Fase de triagem concluída; campos bloqueados"));
                return Err(err.into());
            }
        }
        if let Some(participation) = cmd.participation {
            opportunity.update_participation(participation)?;
        }

        // 3. Apply the status transition, validated per deployment policy
        if let Some(target) = cmd.new_status {
            match self.enforcement {
                TransitionEnforcement::Strict => {
                    opportunity.transition_status(target, &cmd.actor)?;
                }
                TransitionEnforcement::Permissive => {
                    opportunity.force_status(target, &cmd.actor);
                }
            }
        }

        // 4. Persist and notify
        self.opportunities.upsert(&opportunity).await?;
        tracing::info!(
            opportunity_id = %cmd.opportunity_id,
            status = %opportunity.status(),
            "opportunity updated"
        );
        self.notifier
            .notify(Notice::success("Oportunidade atualizada"));

        Ok(UpdateOpportunityResult { opportunity })
    }
}
