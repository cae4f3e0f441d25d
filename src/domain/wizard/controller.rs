//! WizardController - gated navigation over a fixed step sequence.
//!
//! The controller owns the accumulated data for one open wizard instance
//! and enforces the navigation rules: forward movement requires the
//! current step to validate and the target to be reachable, backward
//! movement is unconditional and preserves later input, and arbitrary
//! jumps are limited to steps at or before the current one, or steps
//! already visited (the breadcrumb rule).

use std::collections::HashSet;

use super::{Blocked, FieldValue, Step, StepSequence, WizardData};

/// Navigation state machine for one open wizard instance.
#[derive(Debug)]
pub struct WizardController<S> {
    sequence: StepSequence<S>,
    current: S,
    visited: HashSet<S>,
    data: WizardData,
    submitted: bool,
}

impl<S: Step> WizardController<S> {
    /// Opens a wizard at its first step with empty data.
    pub fn new(sequence: StepSequence<S>) -> Self {
        let first = sequence.first();
        let mut visited = HashSet::new();
        visited.insert(first);

        Self {
            sequence,
            current: first,
            visited,
            data: WizardData::new(),
            submitted: false,
        }
    }

    /// Opens a wizard in edit mode with pre-populated data.
    ///
    /// Every step counts as visited, so breadcrumb navigation across the
    /// whole sequence is available immediately.
    pub fn with_data(sequence: StepSequence<S>, data: WizardData) -> Self {
        let first = sequence.first();
        let visited: HashSet<S> = sequence.ids().into_iter().collect();

        Self {
            sequence,
            current: first,
            visited,
            data,
            submitted: false,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the step the user is currently on.
    pub fn current_step(&self) -> S {
        self.current
    }

    /// Returns the step sequence.
    pub fn sequence(&self) -> &StepSequence<S> {
        &self.sequence
    }

    /// Returns the accumulated data.
    pub fn data(&self) -> &WizardData {
        &self.data
    }

    /// Returns true when the step has been visited in this session.
    pub fn has_visited(&self, step: S) -> bool {
        self.visited.contains(&step)
    }

    /// Returns true once `submit` has handed the data off.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Returns true when a breadcrumb for the step should be enabled.
    ///
    /// Mirrors `jump_to` without moving: at-or-before the current step,
    /// or already visited.
    pub fn can_jump_to(&self, target: S) -> bool {
        match (self.sequence.position(target), self.sequence.position(self.current)) {
            (Some(t), Some(c)) => t <= c || self.visited.contains(&target),
            _ => false,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Data entry
    // ───────────────────────────────────────────────────────────────

    /// Sets a field value on the accumulated data.
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.data.set(key, value);
    }

    /// Appends a value to a list field.
    pub fn push_to_list(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.data.push_to_list(key, value);
    }

    /// Removes a field value.
    pub fn remove_field(&mut self, key: &str) -> Option<FieldValue> {
        self.data.remove(key)
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Advances to the next step.
    ///
    /// Refused when the current step's validation fails, when the next
    /// step is not reachable, or when already on the final step.
    pub fn advance(&mut self) -> Result<S, Blocked> {
        // 1. The step being left must validate
        let current_def = self
            .sequence
            .definition(self.current)
            .expect("current step always belongs to the sequence");
        current_def.validate(&self.data)?;

        // 2. There must be a next step
        let next = self
            .sequence
            .next(self.current)
            .ok_or_else(|| Blocked::because("Already at the final step"))?;

        // 3. The next step must be reachable
        let next_def = self
            .sequence
            .definition(next)
            .expect("next step always belongs to the sequence");
        if !next_def.is_reachable(&self.data) {
            return Err(Blocked::because(format!(
                "Step '{}' is not available yet",
                next_def.label()
            )));
        }

        self.current = next;
        self.visited.insert(next);
        Ok(next)
    }

    /// Moves back one step. Always succeeds and never clears data, so
    /// input entered on later steps survives a round trip.
    ///
    /// At the first step this is a no-op that stays in place.
    pub fn retreat(&mut self) -> S {
        if let Some(previous) = self.sequence.previous(self.current) {
            self.current = previous;
        }
        self.current
    }

    /// Jumps directly to a step via its breadcrumb.
    ///
    /// Permitted only for steps at or before the current one in sequence
    /// order, or steps already visited. Later, unvisited breadcrumbs are
    /// disabled.
    pub fn jump_to(&mut self, target: S) -> Result<S, Blocked> {
        let target_pos = self
            .sequence
            .position(target)
            .ok_or_else(|| Blocked::because(format!("Step {:?} is not part of this wizard", target)))?;
        let current_pos = self
            .sequence
            .position(self.current)
            .expect("current step always belongs to the sequence");

        if target_pos > current_pos && !self.visited.contains(&target) {
            let label = self
                .sequence
                .definition(target)
                .map(|d| d.label())
                .unwrap_or_default();
            return Err(Blocked::because(format!(
                "Step '{}' has not been reached yet",
                label
            )));
        }

        self.current = target;
        self.visited.insert(target);
        Ok(target)
    }

    // ───────────────────────────────────────────────────────────────
    // Submission
    // ───────────────────────────────────────────────────────────────

    /// Submits the wizard from its final step.
    ///
    /// Runs the final step's validation and, on success, hands a
    /// read-only snapshot to the save callback exactly once. The owner
    /// is expected to discard the controller afterwards.
    pub fn submit<F>(&mut self, save: F) -> Result<(), Blocked>
    where
        F: FnOnce(&WizardData),
    {
        if self.submitted {
            return Err(Blocked::because("Wizard was already submitted"));
        }

        let last = self.sequence.last();
        if self.current != last {
            let label = self
                .sequence
                .definition(last)
                .map(|d| d.label())
                .unwrap_or_default();
            return Err(Blocked::because(format!(
                "Submission only happens from the final step '{}'",
                label
            )));
        }

        let final_def = self
            .sequence
            .definition(last)
            .expect("final step always belongs to the sequence");
        final_def.validate(&self.data)?;

        save(&self.data.snapshot());
        self.submitted = true;
        Ok(())
    }
}
