//! Phase gate - status-derived locking of earlier wizard phases.
//!
//! Some wizards group steps into business phases (triagem, participação,
//! ...) whose completion is not an explicit "mark complete" action but a
//! consequence of the record's status value. Once a phase counts as
//! complete, its steps stay navigable for reading while edits are
//! rejected. Completion is recomputed from the current status on every
//! check; it is never stored.

use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};

use super::{Blocked, FieldValue, Step, StepSequence, WizardController, WizardData};

/// Policy describing the phases of a workflow and how a status value
/// maps onto them.
pub trait PhasePolicy {
    /// The business status enum driving the gate.
    type Status: Copy + Send + Sync + 'static;
    /// The ordered phase enum.
    type Phase: Copy + Eq + Ord + fmt::Debug + Send + Sync + 'static;

    /// Returns all phases in order.
    fn phases() -> &'static [Self::Phase];

    /// Returns the phase the workflow currently sits in.
    fn current_phase(status: Self::Status) -> Self::Phase;

    /// Returns true once a phase can no longer be edited.
    fn is_phase_complete(phase: Self::Phase, status: Self::Status) -> bool;

    /// Returns true when a phase's steps may be displayed at all.
    ///
    /// A phase is accessible when it is not later than the current phase,
    /// or when every earlier phase has completed. Completed phases stay
    /// accessible read-only; they are never locked out of view.
    fn is_phase_accessible(phase: Self::Phase, status: Self::Status) -> bool {
        if phase <= Self::current_phase(status) {
            return true;
        }
        Self::phases()
            .iter()
            .take_while(|p| **p < phase)
            .all(|p| Self::is_phase_complete(*p, status))
    }
}

/// A wizard controller whose steps are grouped into gated phases.
///
/// Wraps [`WizardController`], adding the read-only lock for steps whose
/// phase has completed and refusing navigation into phases that are not
/// accessible yet.
pub struct PhasedController<S, P: PhasePolicy> {
    inner: WizardController<S>,
    phase_of: fn(S) -> P::Phase,
    status: P::Status,
}

impl<S: Step, P: PhasePolicy> PhasedController<S, P> {
    /// Opens a phased wizard at its first step.
    pub fn new(sequence: StepSequence<S>, phase_of: fn(S) -> P::Phase, status: P::Status) -> Self {
        Self {
            inner: WizardController::new(sequence),
            phase_of,
            status,
        }
    }

    /// Opens a phased wizard in edit mode with pre-populated data.
    pub fn with_data(
        sequence: StepSequence<S>,
        phase_of: fn(S) -> P::Phase,
        status: P::Status,
        data: WizardData,
    ) -> Self {
        Self {
            inner: WizardController::with_data(sequence, data),
            phase_of,
            status,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the business status driving the gate.
    pub fn status(&self) -> P::Status {
        self.status
    }

    /// Updates the status after a business transition; phase completion
    /// derives from it on the next check.
    pub fn set_status(&mut self, status: P::Status) {
        self.status = status;
    }

    /// Returns the phase of the current step.
    pub fn current_phase(&self) -> P::Phase {
        (self.phase_of)(self.inner.current_step())
    }

    /// Returns the step the user is currently on.
    pub fn current_step(&self) -> S {
        self.inner.current_step()
    }

    /// Returns the accumulated data.
    pub fn data(&self) -> &WizardData {
        self.inner.data()
    }

    /// Returns true when a step renders disabled: its phase completed.
    pub fn is_read_only(&self, step: S) -> bool {
        P::is_phase_complete((self.phase_of)(step), self.status)
    }

    /// Returns true when a step's phase may be displayed.
    pub fn is_accessible(&self, step: S) -> bool {
        P::is_phase_accessible((self.phase_of)(step), self.status)
    }

    // ───────────────────────────────────────────────────────────────
    // Data entry
    // ───────────────────────────────────────────────────────────────

    /// Sets a field on the current step's phase.
    ///
    /// Rejected (not silently accepted) when the phase has completed.
    pub fn set_field(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Result<(), DomainError> {
        if self.is_read_only(self.inner.current_step()) {
            return Err(DomainError::new(
                ErrorCode::PhaseLocked,
                format!(
                    "Phase {:?} is complete; its fields are read-only",
                    self.current_phase()
                ),
            ));
        }
        self.inner.set_field(key, value);
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Advances to the next step, refusing to enter inaccessible phases.
    pub fn advance(&mut self) -> Result<S, Blocked> {
        if let Some(next) = self.inner.sequence().next(self.inner.current_step()) {
            if !self.is_accessible(next) {
                return Err(Blocked::because(format!(
                    "Phase {:?} is not accessible yet",
                    (self.phase_of)(next)
                )));
            }
        }
        self.inner.advance()
    }

    /// Moves back one step unconditionally.
    ///
    /// Completed phases stay reachable backwards; they render read-only.
    pub fn retreat(&mut self) -> S {
        self.inner.retreat()
    }

    /// Jumps to a step, applying both the breadcrumb rule and the phase
    /// accessibility rule.
    pub fn jump_to(&mut self, target: S) -> Result<S, Blocked> {
        if !self.is_accessible(target) {
            return Err(Blocked::because(format!(
                "Phase {:?} is not accessible yet",
                (self.phase_of)(target)
            )));
        }
        self.inner.jump_to(target)
    }

    /// Submits the wizard from its final step.
    pub fn submit<F>(&mut self, save: F) -> Result<(), Blocked>
    where
        F: FnOnce(&WizardData),
    {
        self.inner.submit(save)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wizard::StepDefinition;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum GateStep {
        DadosTriagem,
        AnaliseTriagem,
        Proposta,
    }

    impl Step for GateStep {
        fn label(&self) -> &'static str {
            match self {
                GateStep::DadosTriagem => "Dados da Triagem",
                GateStep::AnaliseTriagem => "Análise da Triagem",
                GateStep::Proposta => "Proposta",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum GatePhase {
        Triagem,
        Participacao,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum GateStatus {
        EmTriagem,
        EmParticipacao,
    }

    struct GatePolicy;

    impl PhasePolicy for GatePolicy {
        type Status = GateStatus;
        type Phase = GatePhase;

        fn phases() -> &'static [GatePhase] {
            &[GatePhase::Triagem, GatePhase::Participacao]
        }

        fn current_phase(status: GateStatus) -> GatePhase {
            match status {
                GateStatus::EmTriagem => GatePhase::Triagem,
                GateStatus::EmParticipacao => GatePhase::Participacao,
            }
        }

        fn is_phase_complete(phase: GatePhase, status: GateStatus) -> bool {
            phase == GatePhase::Triagem && status == GateStatus::EmParticipacao
        }
    }

    fn phase_of(step: GateStep) -> GatePhase {
        match step {
            GateStep::DadosTriagem | GateStep::AnaliseTriagem => GatePhase::Triagem,
            GateStep::Proposta => GatePhase::Participacao,
        }
    }

    fn sequence() -> StepSequence<GateStep> {
        StepSequence::new(vec![
            StepDefinition::new(GateStep::DadosTriagem),
            StepDefinition::new(GateStep::AnaliseTriagem),
            StepDefinition::new(GateStep::Proposta),
        ])
        .unwrap()
    }

    fn controller(status: GateStatus) -> PhasedController<GateStep, GatePolicy> {
        PhasedController::new(sequence(), phase_of, status)
    }

    #[test]
    fn participacao_phase_is_inaccessible_during_triagem() {
        let mut wizard = controller(GateStatus::EmTriagem);
        wizard.advance().unwrap();

        let err = wizard.advance().unwrap_err();
        assert!(err.reasons()[0].contains("Participacao"));
    }

    #[test]
    fn participacao_opens_once_triagem_completes() {
        let mut wizard = controller(GateStatus::EmTriagem);
        wizard.advance().unwrap();

        wizard.set_status(GateStatus::EmParticipacao);
        assert_eq!(wizard.advance().unwrap(), GateStep::Proposta);
    }

    #[test]
    fn completed_triagem_stays_accessible_read_only() {
        let mut wizard = controller(GateStatus::EmTriagem);
        wizard.set_field("orgao", "Hospital Municipal").unwrap();
        wizard.advance().unwrap();
        wizard.set_status(GateStatus::EmParticipacao);
        wizard.advance().unwrap();

        // Breadcrumb back into triagem still works
        assert!(wizard.is_accessible(GateStep::DadosTriagem));
        wizard.jump_to(GateStep::DadosTriagem).unwrap();

        // But the fields render disabled and edits are rejected
        assert!(wizard.is_read_only(GateStep::DadosTriagem));
        let err = wizard.set_field("orgao", "Outro Órgão").unwrap_err();
        assert_eq!(err.code, ErrorCode::PhaseLocked);

        // The original value is untouched
        assert_eq!(wizard.data().text("orgao"), Some("Hospital Municipal"));
    }

    #[test]
    fn gate_is_monotonic_once_status_passes_triagem() {
        let wizard = controller(GateStatus::EmParticipacao);

        // Accessible never flips back to false for the earlier phase.
        assert!(wizard.is_accessible(GateStep::DadosTriagem));
        assert!(wizard.is_accessible(GateStep::AnaliseTriagem));
        assert!(wizard.is_read_only(GateStep::DadosTriagem));
    }

    #[test]
    fn edits_flow_normally_while_phase_is_open() {
        let mut wizard = controller(GateStatus::EmTriagem);
        wizard.set_field("orgao", "Secretaria de Saúde").unwrap();
        assert_eq!(wizard.data().text("orgao"), Some("Secretaria de Saúde"));
    }

    #[test]
    fn jump_into_inaccessible_phase_is_refused() {
        let mut wizard = controller(GateStatus::EmTriagem);
        let err = wizard.jump_to(GateStep::Proposta).unwrap_err();
        assert!(err.reasons()[0].contains("not accessible"));
    }

    #[test]
    fn completion_is_recomputed_from_status() {
        let mut wizard = controller(GateStatus::EmTriagem);
        assert!(!wizard.is_read_only(GateStep::DadosTriagem));

        wizard.set_status(GateStatus::EmParticipacao);
        assert!(wizard.is_read_only(GateStep::DadosTriagem));
    }
}
