//! Output formatting module
//!
//! Two renderings of the same metrics:
//! - a single human-readable line (default)
//! - a line-metric form for metrics collectors

pub mod human;
pub mod line;

use crate::models::Metrics;

/// Selected output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Human,
    LineMetrics,
}

/// Render metrics in the requested format.
///
/// Rendering is deterministic: the same metrics and format produce
/// byte-identical output.
pub fn render(metrics: &Metrics, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => human::render(metrics),
        OutputFormat::LineMetrics => line::render(metrics),
    }
}
