//! Strongly-typed identifier value objects.
//!
//! One newtype per aggregate. The `define_id!` macro generates the
//! constructor, conversion, and formatting boilerplate each id shares.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Defines a UUID-backed identifier newtype.
macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(
    /// Unique identifier for an open wizard instance.
    WizardId
);

define_id!(
    /// Unique identifier for a regulatory process.
    ProcessId
);

define_id!(
    /// Unique identifier for a good-practices certificate.
    CertificateId
);

define_id!(
    /// Unique identifier for a bid opportunity.
    OpportunityId
);

define_id!(
    /// Unique identifier for a supply requisition.
    RequisitionId
);

define_id!(
    /// Unique identifier for a distributor company (tenant).
    CompanyId
);

define_id!(
    /// Unique identifier for an invoice.
    InvoiceId
);

define_id!(
    /// Unique identifier for a DOU update record.
    GazetteUpdateId
);

define_id!(
    /// Unique identifier for a managed email account.
    EmailAccountId
);

define_id!(
    /// Unique identifier for a document row inside a wizard or process.
    DocumentId
);
