//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, errors, and the traits that form
//! the vocabulary of the back-office domain.

mod attachment;
mod confirmation;
mod errors;
mod handles;
mod ids;
mod severity;
mod state_machine;
mod store;
mod timeline;
mod timestamp;

pub use attachment::{
    AttachmentPolicy, AttachmentReference, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_FILE_BYTES,
};
pub use confirmation::{require, Confirmation};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use handles::HandleRegistry;
pub use ids::{
    CertificateId, CompanyId, DocumentId, EmailAccountId, GazetteUpdateId, InvoiceId,
    OpportunityId, ProcessId, RequisitionId, WizardId,
};
pub use severity::Severity;
pub use state_machine::StateMachine;
pub use store::{Identified, Store};
pub use timeline::{Timeline, TimelineEntry};
pub use timestamp::Timestamp;
