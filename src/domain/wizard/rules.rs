//! Reusable step rules shared by the concrete wizards.

use crate::domain::foundation::AttachmentPolicy;

use super::{StepRule, WizardData};

/// Requires a list field to hold a minimum number of items, with an
/// optional justification escape hatch.
///
/// When a justification field is configured and filled, fewer items are
/// accepted - the rule used by supply requisitions that normally demand
/// three supplier quotes.
pub struct MinListLen {
    field: String,
    min: usize,
    justification_field: Option<String>,
}

impl MinListLen {
    /// Requires at least `min` items in `field`.
    pub fn new(field: impl Into<String>, min: usize) -> Self {
        Self {
            field: field.into(),
            min,
            justification_field: None,
        }
    }

    /// Accepts fewer items when `field` is filled with a justification.
    pub fn or_justified_by(mut self, field: impl Into<String>) -> Self {
        self.justification_field = Some(field.into());
        self
    }
}

impl StepRule for MinListLen {
    fn check(&self, data: &WizardData) -> Result<(), String> {
        let len = data.list_len(&self.field);
        if len >= self.min {
            return Ok(());
        }

        if let Some(justification) = &self.justification_field {
            if !data.is_blank(justification) {
                return Ok(());
            }
            return Err(format!(
                "Field '{}' needs at least {} items (got {}), or fill '{}' to justify fewer",
                self.field, self.min, len, justification
            ));
        }

        Err(format!(
            "Field '{}' needs at least {} items (got {})",
            self.field, self.min, len
        ))
    }
}

/// Requires every attachment in a field to conform to a policy
/// (size limit and accepted extensions).
pub struct AttachmentsConform {
    field: String,
    policy: AttachmentPolicy,
}

impl AttachmentsConform {
    pub fn new(field: impl Into<String>, policy: AttachmentPolicy) -> Self {
        Self {
            field: field.into(),
            policy,
        }
    }
}

impl StepRule for AttachmentsConform {
    fn check(&self, data: &WizardData) -> Result<(), String> {
        for attachment in data.attachments(&self.field) {
            self.policy
                .check(attachment)
                .map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}
