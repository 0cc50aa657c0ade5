//! Aggregated run summary and its serialized forms.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

/// Aggregated outcome of a recording session, as handed to rendering sinks.
///
/// The message lists preserve insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub pass_count: usize,
    pub fail_count: usize,
    pub total_count: usize,
    pub pass_messages: Vec<String>,
    pub fail_messages: Vec<String>,
}

/// Pretty JSON form of a summary.
#[must_use]
pub fn format_summary_json(summary: &RunSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}

/// UTC timestamp for stamping rendered reports, e.g. `2026-08-06T12:00:00Z`.
#[must_use]
pub fn utc_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
        ))
        .unwrap_or_else(|_| "unknown".to_string())
}
