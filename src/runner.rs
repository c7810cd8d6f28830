//! Check execution engine
//!
//! Standalone entry point driven by the CLI frontend: validates the
//! locator, fetches the certificate, derives metrics, and renders them.

use crate::config::CheckConfig;
use crate::fetch::{self, CertSource};
use crate::models::Metrics;
use crate::output;
use crate::utils::{CheckError, LocatorError};
use std::fmt;
use tracing::debug;

/// Service states understood by the monitoring scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Critical,
    Unknown,
}

impl ServiceState {
    /// Process exit code for this state
    pub fn exit_code(&self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceState::Ok => write!(f, "OK"),
            ServiceState::Critical => write!(f, "CRITICAL"),
            ServiceState::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Outcome of a check run: the state for the scheduler plus output text
#[derive(Debug)]
pub struct CheckOutcome {
    pub state: ServiceState,
    pub output: String,
}

/// Run the check and return the rendered metrics text.
///
/// A missing or malformed locator fails before any file or network I/O.
pub async fn run_check(locator: &str, config: &CheckConfig) -> Result<String, CheckError> {
    let source = CertSource::parse(locator)?;
    let record = fetch::fetch_certificate(&source, config).await?;
    debug!(
        "fetched certificate for '{}' from {}",
        record.subject, record.locator
    );

    let metrics = Metrics::build(&record);
    Ok(output::render(&metrics, config.format))
}

/// Run the check and map the result onto a scheduler-facing outcome.
///
/// Fetch failures are uniformly CRITICAL; configuration errors are reported
/// as a distinct UNKNOWN state. There is no partial output: either the full
/// rendered metrics or a single diagnostic line.
pub async fn execute(locator: &str, config: &CheckConfig) -> CheckOutcome {
    match run_check(locator, config).await {
        Ok(rendered) => CheckOutcome {
            state: ServiceState::Ok,
            output: rendered,
        },
        Err(err) => {
            let state = state_for(&err);
            CheckOutcome {
                state,
                output: format!("cert-check {}: {}", state, err),
            }
        }
    }
}

/// State mapping: error kinds exist for diagnostics, not control flow.
/// Only the configuration/runtime distinction reaches the scheduler.
fn state_for(err: &CheckError) -> ServiceState {
    match err {
        CheckError::Locator(LocatorError::UnsupportedScheme { .. }) => ServiceState::Critical,
        CheckError::Locator(_) => ServiceState::Unknown,
        CheckError::Fetch(_) => ServiceState::Critical,
    }
}
