//! Dashboard module - summary figures derived from store contents.

pub mod summary;

pub use summary::{summarize, DashboardSummary};
