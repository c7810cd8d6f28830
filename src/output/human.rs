//! Human-readable rendering

use crate::models::{Metrics, ValidityState};
use chrono::SecondsFormat;

/// Render metrics as a single human-readable line.
///
/// Timestamps are RFC 3339 in UTC, independent of locale.
pub fn render(metrics: &Metrics) -> String {
    let window = format!(
        "not_before={} not_after={}",
        metrics.not_before.to_rfc3339_opts(SecondsFormat::Secs, true),
        metrics.not_after.to_rfc3339_opts(SecondsFormat::Secs, true)
    );

    match metrics.state {
        ValidityState::Valid => format!(
            "certificate '{}' is valid: expires in {} days ({})",
            metrics.subject, metrics.days_until_expiry, window
        ),
        ValidityState::Expired => format!(
            "certificate '{}' is expired: expired {} days ago ({})",
            metrics.subject, -metrics.days_until_expiry, window
        ),
        ValidityState::NotYetValid => format!(
            "certificate '{}' is not-yet-valid: expires in {} days ({})",
            metrics.subject, metrics.days_until_expiry, window
        ),
    }
}
