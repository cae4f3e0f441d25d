//! Display severity attached to statuses and notices.

use serde::{Deserialize, Serialize};

/// Severity level driving badge colors and notification styling.
///
/// Every status enum maps each variant to exactly one severity; the UI
/// shell translates the severity into a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
    Neutral,
}
