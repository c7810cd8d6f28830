//! Fetched certificate data

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The leaf certificate obtained from a locator.
///
/// `not_before <= not_after` is guaranteed by the source certificate's own
/// fields and is not re-validated here.
#[derive(Debug, Clone, Serialize)]
pub struct CertificateRecord {
    /// Locator the certificate was fetched from
    pub locator: String,
    /// Subject identity (CN, or the first DNS SAN)
    pub subject: String,
    /// Issuer common name
    pub issuer: String,
    /// Serial number (hex string)
    pub serial: String,
    /// Not valid before
    pub not_before: DateTime<Utc>,
    /// Not valid after
    pub not_after: DateTime<Utc>,
}
