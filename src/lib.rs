//! cert-check library
//!
//! A single-shot certificate expiry check. Given a locator (`file://`,
//! `tcp://`, `https://`, or a bare `host:port`) it fetches the leaf
//! certificate, derives expiry metrics from it, and renders them for a
//! monitoring scheduler.
//!
//! Trust-chain verification is deliberately disabled on the network paths:
//! the tool exists to inspect certificates, including untrusted ones.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cert_check::config::CheckConfig;
//! use cert_check::runner;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = CheckConfig::default();
//!     let outcome = runner::execute("tcp://example.com:443", &config).await;
//!     println!("{}", outcome.output);
//!     std::process::exit(outcome.state.exit_code());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod fetch;
pub mod models;
pub mod output;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::CheckConfig;
pub use fetch::CertSource;
pub use models::{CertificateRecord, Metrics, ValidityState};
pub use output::OutputFormat;
pub use runner::{CheckOutcome, ServiceState};
pub use utils::{CheckError, FetchError, LocatorError, Result};
