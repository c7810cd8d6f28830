//! Locator parsing
//!
//! A locator names where to obtain a certificate. Recognized schemes are
//! `file`, `tcp`, and `https`; a bare `host:port` is treated as `tcp`.

use crate::utils::LocatorError;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

/// Where a certificate comes from, keyed by the locator scheme.
///
/// The scheme exclusively determines the acquisition strategy; no scheme is
/// ever reinterpreted as another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertSource {
    /// Local PEM or DER encoded certificate file
    File(PathBuf),
    /// Raw TCP endpoint; the certificate is taken from a TLS handshake
    Tcp { host: String, port: u16 },
    /// HTTPS endpoint; the certificate is taken from the client handshake
    Https(Url),
}

impl CertSource {
    /// Parse a locator string into its certificate source.
    ///
    /// No I/O happens here: malformed locators are rejected before any
    /// file or network access.
    pub fn parse(locator: &str) -> Result<Self, LocatorError> {
        let locator = locator.trim();
        if locator.is_empty() {
            return Err(LocatorError::Empty);
        }

        if !locator.contains("://") {
            let (host, port) = parse_host_port(locator)?;
            return Ok(CertSource::Tcp { host, port });
        }

        let url = Url::parse(locator).map_err(|e| LocatorError::Invalid {
            locator: locator.to_string(),
            message: e.to_string(),
        })?;

        match url.scheme() {
            "file" => {
                let path = url.to_file_path().map_err(|_| LocatorError::Invalid {
                    locator: locator.to_string(),
                    message: "file locators must use an absolute path (file:///path)".to_string(),
                })?;
                Ok(CertSource::File(path))
            }
            "tcp" => {
                let host = url.host_str().ok_or_else(|| invalid(locator, "missing host"))?;
                let port = url.port().ok_or_else(|| invalid(locator, "missing port"))?;
                Ok(CertSource::Tcp {
                    host: strip_brackets(host).to_string(),
                    port,
                })
            }
            "https" => {
                if url.host_str().is_none() {
                    return Err(invalid(locator, "missing host"));
                }
                Ok(CertSource::Https(url))
            }
            other => Err(LocatorError::UnsupportedScheme {
                scheme: other.to_string(),
                locator: locator.to_string(),
            }),
        }
    }

    /// Target string used in diagnostics
    pub fn target(&self) -> String {
        match self {
            CertSource::File(path) => path.display().to_string(),
            CertSource::Tcp { host, port } if host.contains(':') => {
                format!("[{}]:{}", host, port)
            }
            CertSource::Tcp { host, port } => format!("{}:{}", host, port),
            CertSource::Https(url) => url.to_string(),
        }
    }
}

impl fmt::Display for CertSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertSource::File(path) => write!(f, "file://{}", path.display()),
            CertSource::Tcp { .. } => write!(f, "tcp://{}", self.target()),
            CertSource::Https(url) => write!(f, "{}", url),
        }
    }
}

/// Split a bare `host:port` locator. IPv6 literals may be bracketed.
fn parse_host_port(locator: &str) -> Result<(String, u16), LocatorError> {
    // Socket-address form covers bracketed IPv6 like [::1]:443
    if let Ok(addr) = locator.parse::<SocketAddr>() {
        return Ok((addr.ip().to_string(), addr.port()));
    }

    let (host, port) = locator
        .rsplit_once(':')
        .ok_or_else(|| invalid(locator, "expected host:port"))?;
    if host.is_empty() {
        return Err(invalid(locator, "missing host"));
    }
    let port = port
        .parse::<u16>()
        .map_err(|_| invalid(locator, "invalid port"))?;

    Ok((host.to_string(), port))
}

fn strip_brackets(host: &str) -> &str {
    host.trim_start_matches('[').trim_end_matches(']')
}

fn invalid(locator: &str, message: &str) -> LocatorError {
    LocatorError::Invalid {
        locator: locator.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_port_is_tcp() {
        let source = CertSource::parse("example.com:443").unwrap();
        assert_eq!(
            source,
            CertSource::Tcp {
                host: "example.com".to_string(),
                port: 443
            }
        );
    }

    #[test]
    fn test_unsupported_scheme_is_rejected() {
        let err = CertSource::parse("ftp://example.com").unwrap_err();
        assert!(matches!(
            err,
            LocatorError::UnsupportedScheme { ref scheme, .. } if scheme == "ftp"
        ));
    }
}
