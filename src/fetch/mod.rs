//! Certificate acquisition
//!
//! Resolves a locator into its source and fetches the leaf certificate it
//! names. A single configured deadline bounds every suspension point
//! (connect, handshake, request, file read); exceeding it surfaces as a
//! distinct timeout error instead of a hang or a generic failure.

pub mod file;
pub mod https;
pub mod locator;
pub mod parse;
pub mod tls;

pub use locator::CertSource;

use crate::config::CheckConfig;
use crate::models::CertificateRecord;
use crate::utils::FetchError;
use std::future::Future;
use tokio::time::{timeout_at, Instant};
use tracing::debug;

/// Fetch the leaf certificate named by `source`.
///
/// A single attempt: errors are propagated as-is, annotated with their
/// target, and never downgraded to a different kind. The caller decides
/// whether to retry across invocations.
pub async fn fetch_certificate(
    source: &CertSource,
    config: &CheckConfig,
) -> Result<CertificateRecord, FetchError> {
    let deadline = config.deadline();
    let sni = config.server_name.as_deref();
    let target = source.target();

    let der = match source {
        CertSource::File(path) => {
            debug!("reading certificate file {}", path.display());
            bounded(deadline, &target, file::read_leaf(path)).await?
        }
        CertSource::Tcp { host, port } => {
            debug!("capturing certificate from {}", target);
            bounded(deadline, &target, tls::capture_leaf(host, *port, sni)).await?
        }
        CertSource::Https(url) => {
            debug!("capturing certificate from {}", url);
            bounded(deadline, &target, https::capture_leaf(url, sni)).await?
        }
    };

    parse::leaf_record(&der, &source.to_string())
}

/// Run `operation` under the optional deadline.
///
/// Expiry aborts the in-flight operation (dropping its socket or file
/// handle) and reports a timeout rather than a generic failure.
async fn bounded<T, F>(deadline: Option<Instant>, target: &str, operation: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    match deadline {
        Some(deadline) => match timeout_at(deadline, operation).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                target: target.to_string(),
            }),
        },
        None => operation.await,
    }
}
