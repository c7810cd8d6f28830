//! Per-invocation check configuration

use crate::output::OutputFormat;
use std::time::Duration;
use tokio::time::Instant;

/// Immutable configuration for a single check run.
///
/// Constructed once at invocation start and passed by reference through the
/// fetch call; never mutated.
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// TLS server-name override for the ClientHello SNI extension.
    /// Ignored by the `file` scheme.
    pub server_name: Option<String>,
    /// Selected output format
    pub format: OutputFormat,
    /// Overall execution timeout. `None` means no deadline.
    pub timeout: Option<Duration>,
}

impl CheckConfig {
    /// Deadline for the whole fetch, derived from the timeout at call time
    pub fn deadline(&self) -> Option<Instant> {
        self.timeout.map(|timeout| Instant::now() + timeout)
    }
}
