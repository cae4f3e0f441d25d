//! Caduceu Backoffice - Workflow core for a medical equipment distributor
//!
//! This crate implements the back-office workflows (regulatory, commercial,
//! procurement, corporate, billing) on top of a gated linear wizard engine
//! with per-step validation and phase-gated navigation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
