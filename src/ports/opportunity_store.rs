//! Opportunity store port.

use async_trait::async_trait;

use crate::domain::commercial::{Opportunity, OpportunityPhase};
use crate::domain::foundation::{DomainError, OpportunityId, Store};

/// Store port for the opportunity list.
#[async_trait]
pub trait OpportunityStore: Store<Opportunity, OpportunityId> {
    /// Finds opportunities currently sitting in the given phase.
    async fn find_by_phase(
        &self,
        phase: OpportunityPhase,
    ) -> Result<Vec<Opportunity>, DomainError>;
}
