//! Regulatory module - ANVISA processes, certificates and DOU tracking.

pub mod certificate;
pub mod gazette;
pub mod process;
pub mod product_update;

pub use certificate::{Certificate, CertificateStatus, CertificateStep};
pub use gazette::{GazetteUpdate, ImportedGazetteDocument};
pub use process::{ProcessDocument, ProcessStatus, RegulatoryArea, RegulatoryProcess};
pub use product_update::ProductUpdateStep;
