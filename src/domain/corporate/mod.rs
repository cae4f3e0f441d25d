//! Corporate module - company lifecycle and email administration.

pub mod company;
pub mod email;

pub use company::{Company, CompanyStatus, OnboardingStep};
pub use email::EmailAccount;
