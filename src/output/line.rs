//! Line-metric rendering
//!
//! One `key=value` line per metric, suitable for ingestion by a metrics
//! collector. Key order is fixed and stable across invocations.

use crate::models::Metrics;

/// Render metrics as `key=value` lines in a fixed order
pub fn render(metrics: &Metrics) -> String {
    let valid = if metrics.is_valid() { 1 } else { 0 };

    [
        format!("cert_days_until_expiry={}", metrics.days_until_expiry),
        format!("cert_seconds_until_expiry={}", metrics.seconds_until_expiry),
        format!("cert_valid={}", valid),
        format!("cert_not_before={}", metrics.not_before.timestamp()),
        format!("cert_not_after={}", metrics.not_after.timestamp()),
        format!("cert_evaluated_at={}", metrics.evaluated_at.timestamp()),
    ]
    .join("\n")
}
