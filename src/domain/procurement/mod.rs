//! Procurement module - supply requisitions and quote rules.

pub mod requisition;

pub use requisition::{
    Requisition, RequisitionItem, RequisitionStatus, RequisitionStep, SupplierQuote, MIN_QUOTES,
};
