//! StepSequence - the fixed, ordered list of steps for one wizard.
//!
//! Consolidates all ordering logic in a single place: navigation looks up
//! positions here instead of comparing enum discriminants directly.

use crate::domain::foundation::ValidationError;

use super::{Step, StepDefinition};

/// Fixed ordered list of step definitions.
#[derive(Debug)]
pub struct StepSequence<S> {
    steps: Vec<StepDefinition<S>>,
}

impl<S: Step> StepSequence<S> {
    /// Creates a sequence from the declared step order.
    ///
    /// # Errors
    ///
    /// Returns an error when the list is empty or a step id repeats.
    pub fn new(steps: Vec<StepDefinition<S>>) -> Result<Self, ValidationError> {
        if steps.is_empty() {
            return Err(ValidationError::empty_field("steps"));
        }
        for (i, step) in steps.iter().enumerate() {
            if steps[..i].iter().any(|s| s.id() == step.id()) {
                return Err(ValidationError::invalid_format(
                    "steps",
                    format!("Duplicate step {:?}", step.id()),
                ));
            }
        }
        Ok(Self { steps })
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Sequences are never empty; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the first step id.
    pub fn first(&self) -> S {
        self.steps[0].id()
    }

    /// Returns the last step id.
    pub fn last(&self) -> S {
        self.steps[self.steps.len() - 1].id()
    }

    /// Returns all step ids in order.
    pub fn ids(&self) -> Vec<S> {
        self.steps.iter().map(|s| s.id()).collect()
    }

    /// Returns the 0-based position of a step, if it belongs here.
    pub fn position(&self, id: S) -> Option<usize> {
        self.steps.iter().position(|s| s.id() == id)
    }

    /// Returns the definition of a step, if it belongs here.
    pub fn definition(&self, id: S) -> Option<&StepDefinition<S>> {
        self.steps.iter().find(|s| s.id() == id)
    }

    /// Returns the next step in the sequence, or None at the end.
    pub fn next(&self, id: S) -> Option<S> {
        let idx = self.position(id)?;
        self.steps.get(idx + 1).map(|s| s.id())
    }

    /// Returns the previous step in the sequence, or None at the start.
    pub fn previous(&self, id: S) -> Option<S> {
        let idx = self.position(id)?;
        if idx > 0 {
            self.steps.get(idx - 1).map(|s| s.id())
        } else {
            None
        }
    }

    /// Returns true if step `a` comes before step `b`.
    ///
    /// Steps missing from the sequence compare false.
    pub fn is_before(&self, a: S, b: S) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(pa), Some(pb)) => pa < pb,
            _ => false,
        }
    }

    /// Returns true if this is the first step.
    pub fn is_first(&self, id: S) -> bool {
        self.position(id) == Some(0)
    }

    /// Returns true if this is the last step.
    pub fn is_last(&self, id: S) -> bool {
        self.position(id) == Some(self.steps.len() - 1)
    }
}
