//! Gated linear wizard engine.
//!
//! The engine sequences a fixed, ordered list of named steps, refusing
//! forward or arbitrary navigation when validation or reachability rules
//! are unmet while allowing unrestricted backward navigation. On the
//! final step, submission hands the accumulated data to an external save
//! callback exactly once.
//!
//! # Module Organization
//!
//! - `data` - Field values and the accumulated `WizardData`
//! - `step` - Step trait, definitions, rules, and the `Blocked` refusal
//! - `rules` - Reusable step rules (minimum counts, attachment policies)
//! - `sequence` - Fixed step ordering
//! - `controller` - Navigation state machine
//! - `phase_gate` - Status-derived read-only locking of earlier phases

mod controller;
mod data;
mod phase_gate;
mod rules;
mod sequence;
mod step;

pub use controller::WizardController;
pub use data::{FieldValue, WizardData};
pub use phase_gate::{PhasePolicy, PhasedController};
pub use rules::{AttachmentsConform, MinListLen};
pub use sequence::StepSequence;
pub use step::{Blocked, Step, StepDefinition, StepRule};
