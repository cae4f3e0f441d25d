//! Ports layer - contracts between the application core and the outside.
//!
//! Store ports wrap the parent-owned top-level lists; the notifier is the
//! toast boundary; the gazette importer stands in for the future network
//! call.

mod certificate_store;
mod company_store;
mod email_account_store;
mod gazette_importer;
mod gazette_store;
mod invoice_store;
mod notifier;
mod opportunity_store;
mod process_store;
mod requisition_store;

pub use certificate_store::CertificateStore;
pub use company_store::CompanyStore;
pub use email_account_store::EmailAccountStore;
pub use gazette_importer::GazetteImporter;
pub use gazette_store::GazetteStore;
pub use invoice_store::InvoiceStore;
pub use notifier::{Notice, Notifier};
pub use opportunity_store::OpportunityStore;
pub use process_store::ProcessStore;
pub use requisition_store::RequisitionStore;
