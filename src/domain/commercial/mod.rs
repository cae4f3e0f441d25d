//! Commercial module - bid opportunities and their phase gate.

pub mod opportunity;

pub use opportunity::{
    Opportunity, OpportunityPhase, OpportunityPhasePolicy, OpportunityStatus, ParticipationData,
    ScreeningData,
};
