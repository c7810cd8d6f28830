//! CLI argument definitions using clap

use crate::config::CheckConfig;
use crate::output::OutputFormat;
use clap::Parser;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "cert-check")]
#[command(version)]
#[command(about = "Inspects certificate data and reports expiry metrics", long_about = None)]
pub struct Cli {
    /// URL to the certificate. Supports https, tcp, and file schemes
    #[arg(short, long, env = "CHECK_CERT", value_name = "LOCATOR")]
    pub cert: Option<String>,

    /// Optional TLS servername extension argument
    #[arg(short, long, env = "CHECK_SERVER_NAME")]
    pub servername: Option<String>,

    /// Emit line metrics instead of human-readable output
    #[arg(short, long, env = "CHECK_LINE_METRICS")]
    pub line_metrics: bool,

    /// Execution timeout in seconds (0 disables the deadline)
    #[arg(short, long, env = "CHECK_TIMEOUT", default_value_t = 0)]
    pub timeout: u64,
}

impl Cli {
    /// Build the per-invocation check configuration
    pub fn check_config(&self) -> CheckConfig {
        CheckConfig {
            server_name: self.servername.clone(),
            format: if self.line_metrics {
                OutputFormat::LineMetrics
            } else {
                OutputFormat::Human
            },
            timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
        }
    }
}
