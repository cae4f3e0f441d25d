//! Command handlers - one file per user-facing command.

pub mod classify_gazette_update;
pub mod delete_email_account;
pub mod get_dashboard_summary;
pub mod import_gazette_documents;
pub mod onboard_company;
pub mod submit_certificate;
pub mod submit_product_update;
pub mod submit_requisition;
pub mod suspend_company;
pub mod update_opportunity;

pub use classify_gazette_update::{
    ClassifyGazetteUpdateCommand, ClassifyGazetteUpdateError, ClassifyGazetteUpdateHandler,
    ClassifyGazetteUpdateResult,
};
pub use delete_email_account::{
    DeleteEmailAccountCommand, DeleteEmailAccountError, DeleteEmailAccountHandler,
};
pub use get_dashboard_summary::GetDashboardSummaryHandler;
pub use import_gazette_documents::{
    cancel_pair, CancelHandle, CancelSignal, ImportGazetteDocumentsCommand,
    ImportGazetteDocumentsError, ImportGazetteDocumentsHandler, ImportOutcome,
};
pub use onboard_company::{
    OnboardCompanyCommand, OnboardCompanyError, OnboardCompanyHandler, OnboardCompanyResult,
};
pub use submit_certificate::{
    SubmitCertificateCommand, SubmitCertificateError, SubmitCertificateHandler,
    SubmitCertificateResult,
};
pub use submit_product_update::{
    SubmitProductUpdateCommand, SubmitProductUpdateError, SubmitProductUpdateHandler,
    SubmitProductUpdateResult,
};
pub use submit_requisition::{
    SubmitRequisitionCommand, SubmitRequisitionError, SubmitRequisitionHandler,
    SubmitRequisitionResult,
};
pub use suspend_company::{
    SuspendCompanyCommand, SuspendCompanyError, SuspendCompanyHandler, SuspendCompanyResult,
};
pub use update_opportunity::{
    UpdateOpportunityCommand, UpdateOpportunityError, UpdateOpportunityHandler,
    UpdateOpportunityResult,
};
