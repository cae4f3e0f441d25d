//! Step definitions - the leaves of the wizard engine.
//!
//! Each wizard declares its steps as a small `Copy` enum implementing
//! [`Step`], and builds one [`StepDefinition`] per step: the required
//! fields, extra business rules, and an optional reachability predicate.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use thiserror::Error;

use super::WizardData;

/// Identifier for a wizard step.
///
/// Implemented by a per-wizard enum whose variant order matches the
/// declared sequence.
pub trait Step: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Display label shown on the breadcrumb for this step.
    fn label(&self) -> &'static str;
}

/// A navigation or submission refusal with user-facing reasons.
///
/// The controller never surfaces these itself; the caller forwards them
/// to the notification boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("step blocked: {}", reasons.join("; "))]
pub struct Blocked {
    reasons: Vec<String>,
}

impl Blocked {
    /// Creates a refusal from a list of reasons.
    pub fn new(reasons: Vec<String>) -> Self {
        Self { reasons }
    }

    /// Creates a refusal with a single reason.
    pub fn because(reason: impl Into<String>) -> Self {
        Self {
            reasons: vec![reason.into()],
        }
    }

    /// Returns the unmet reasons.
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}

/// A step-specific business rule beyond required fields.
///
/// Rules inspect the accumulated data and return a user-facing reason
/// when unmet.
pub trait StepRule: Send + Sync {
    fn check(&self, data: &WizardData) -> Result<(), String>;
}

impl<F> StepRule for F
where
    F: Fn(&WizardData) -> Result<(), String> + Send + Sync,
{
    fn check(&self, data: &WizardData) -> Result<(), String> {
        self(data)
    }
}

/// Declares one step: identifier, required fields, and rules.
pub struct StepDefinition<S> {
    id: S,
    required_fields: Vec<String>,
    rules: Vec<Arc<dyn StepRule>>,
    reachable_when: Option<Arc<dyn StepRule>>,
}

impl<S: Step> StepDefinition<S> {
    /// Creates a definition with no requirements.
    pub fn new(id: S) -> Self {
        Self {
            id,
            required_fields: Vec::new(),
            rules: Vec::new(),
            reachable_when: None,
        }
    }

    /// Adds a required field; blank values block the step.
    pub fn require(mut self, field: impl Into<String>) -> Self {
        self.required_fields.push(field.into());
        self
    }

    /// Adds a business rule checked after required fields.
    pub fn rule(mut self, rule: impl StepRule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Restricts when this step is reachable at all.
    ///
    /// Steps are reachable by default; an unreachable step refuses both
    /// `advance` into it and forward jumps.
    pub fn reachable_when(mut self, rule: impl StepRule + 'static) -> Self {
        self.reachable_when = Some(Arc::new(rule));
        self
    }

    /// Returns the step identifier.
    pub fn id(&self) -> S {
        self.id
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    /// Returns the required field keys.
    pub fn required_fields(&self) -> &[String] {
        &self.required_fields
    }

    /// Returns true when the step can currently be entered.
    pub fn is_reachable(&self, data: &WizardData) -> bool {
        self.reachable_when
            .as_ref()
            .map_or(true, |rule| rule.check(data).is_ok())
    }

    /// Validates the accumulated data against this step's requirements.
    ///
    /// Collects every unmet reason instead of stopping at the first, so
    /// the caller can surface them all at once.
    pub fn validate(&self, data: &WizardData) -> Result<(), Blocked> {
        let mut reasons = Vec::new();

        for field in &self.required_fields {
            if data.is_blank(field) {
                reasons.push(format!("Field '{}' is required", field));
            }
        }

        for rule in &self.rules {
            if let Err(reason) = rule.check(data) {
                reasons.push(reason);
            }
        }

        if reasons.is_empty() {
            Ok(())
        } else {
            Err(Blocked::new(reasons))
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for StepDefinition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDefinition")
            .field("id", &self.id)
            .field("required_fields", &self.required_fields)
            .field("rules", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestStep {
        Dados,
        Revisao,
    }

    impl Step for TestStep {
        fn label(&self) -> &'static str {
            match self {
                TestStep::Dados => "Dados",
                TestStep::Revisao => "Revisão",
            }
        }
    }

    #[test]
    fn validate_passes_with_no_requirements() {
        let def = StepDefinition::new(TestStep::Dados);
        assert!(def.validate(&WizardData::new()).is_ok());
    }

    #[test]
    fn validate_blocks_on_missing_required_field() {
        let def = StepDefinition::new(TestStep::Dados).require("produto");
        let err = def.validate(&WizardData::new()).unwrap_err();
        assert_eq!(err.reasons(), ["Field 'produto' is required"]);
    }

    #[test]
    fn validate_collects_all_unmet_reasons() {
        let def = StepDefinition::new(TestStep::Dados)
            .require("produto")
            .require("quantidade")
            .rule(|_: &WizardData| Err("at least one document is required".to_string()));

        let err = def.validate(&WizardData::new()).unwrap_err();
        assert_eq!(err.reasons().len(), 3);
    }

    #[test]
    fn validate_passes_when_fields_filled_and_rules_hold() {
        let def = StepDefinition::new(TestStep::Dados)
            .require("produto")
            .rule(|d: &WizardData| {
                if d.number("quantidade").unwrap_or(0.0) > 0.0 {
                    Ok(())
                } else {
                    Err("quantity must be positive".to_string())
                }
            });

        let mut data = WizardData::new();
        data.set("produto", "Bomba de Infusão");
        data.set("quantidade", 3.0);
        assert!(def.validate(&data).is_ok());
    }

    #[test]
    fn steps_are_reachable_by_default() {
        let def = StepDefinition::new(TestStep::Revisao);
        assert!(def.is_reachable(&WizardData::new()));
    }

    #[test]
    fn reachable_when_gates_the_step() {
        let def = StepDefinition::new(TestStep::Revisao).reachable_when(|d: &WizardData| {
            if d.is_blank("produto") {
                Err("select a product first".to_string())
            } else {
                Ok(())
            }
        });

        assert!(!def.is_reachable(&WizardData::new()));

        let mut data = WizardData::new();
        data.set("produto", "Desfibrilador");
        assert!(def.is_reachable(&data));
    }

    #[test]
    fn blocked_display_joins_reasons() {
        let blocked = Blocked::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(format!("{}", blocked), "step blocked: a; b");
    }
}
