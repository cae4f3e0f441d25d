//! Billing module - invoices.

pub mod invoice;

pub use invoice::{Invoice, InvoiceStatus};
