//! HTTPS certificate capture
//!
//! Issues a GET against the target with certificate verification disabled
//! and records the leaf certificate presented during the client handshake.

use crate::utils::FetchError;
use reqwest::tls::TlsInfo;
use std::error::Error as _;
use std::net::SocketAddr;
use url::Url;

/// Perform an HTTPS request against `url` and return the DER-encoded leaf
/// certificate the server presented.
///
/// When `sni` is set, the request host becomes the override while address
/// resolution stays pinned to the original endpoint, so the handshake's
/// server-name extension carries the override.
pub async fn capture_leaf(url: &Url, sni: Option<&str>) -> Result<Vec<u8>, FetchError> {
    let target = url.to_string();
    let host = url.host_str().ok_or_else(|| FetchError::Request {
        target: target.clone(),
        message: "missing host".to_string(),
    })?;
    let port = url.port_or_known_default().unwrap_or(443);

    let mut builder = reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .tls_info(true);

    let request_url = match sni {
        Some(name) if name != host => {
            let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host, port))
                .await
                .map_err(|e| FetchError::Connect {
                    target: format!("{}:{}", host, port),
                    message: e.to_string(),
                })?
                .collect();
            if addrs.is_empty() {
                return Err(FetchError::Connect {
                    target: format!("{}:{}", host, port),
                    message: "no addresses resolved".to_string(),
                });
            }
            builder = builder.resolve_to_addrs(name, &addrs);

            let mut rewritten = url.clone();
            rewritten
                .set_host(Some(name))
                .map_err(|e| FetchError::Request {
                    target: target.clone(),
                    message: format!("invalid server name override: {}", e),
                })?;
            rewritten
        }
        _ => url.clone(),
    };

    let client = builder.build().map_err(|e| FetchError::Request {
        target: target.clone(),
        message: e.to_string(),
    })?;

    let response = client
        .get(request_url)
        .send()
        .await
        .map_err(|e| classify(&target, e))?;

    let tls_info = response
        .extensions()
        .get::<TlsInfo>()
        .ok_or_else(|| FetchError::Invariant {
            message: format!("no TLS session info captured for {}", target),
        })?;

    tls_info
        .peer_certificate()
        .map(|der| der.to_vec())
        .ok_or(FetchError::NoCertificate { target })
}

/// Map a reqwest error onto the fetch taxonomy without losing its kind
fn classify(target: &str, err: reqwest::Error) -> FetchError {
    let message = error_chain(&err);

    if err.is_timeout() {
        FetchError::Timeout {
            target: target.to_string(),
        }
    } else if err.is_connect() {
        let lowered = message.to_lowercase();
        if lowered.contains("tls")
            || lowered.contains("handshake")
            || lowered.contains("certificate")
        {
            FetchError::Handshake {
                target: target.to_string(),
                message,
            }
        } else {
            FetchError::Connect {
                target: target.to_string(),
                message,
            }
        }
    } else {
        FetchError::Request {
            target: target.to_string(),
            message,
        }
    }
}

/// Flatten an error and its sources into one diagnostic string
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
