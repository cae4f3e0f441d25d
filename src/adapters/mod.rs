//! Adapters layer - concrete implementations of the ports.
//!
//! # Module Organization
//!
//! - `memory` - In-memory list stores (the production adapter here)
//! - `seed` - Mock datasets each screen loads once
//! - `import` - Fixed-delay gazette importer
//! - `notify` - Tracing and recording notifiers

pub mod import;
pub mod memory;
pub mod notify;
pub mod seed;
