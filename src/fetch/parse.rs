//! Leaf certificate decoding
//!
//! Turns DER-encoded certificates into records using x509-parser.

use crate::models::CertificateRecord;
use crate::utils::FetchError;
use chrono::{DateTime, TimeZone, Utc};
use x509_parser::prelude::*;

/// Decode a DER-encoded leaf certificate into a record
pub fn leaf_record(der: &[u8], locator: &str) -> Result<CertificateRecord, FetchError> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| FetchError::Parse {
        locator: locator.to_string(),
        message: format!("failed to parse certificate: {:?}", e),
    })?;

    let not_before = asn1_time_to_datetime(cert.validity().not_before, locator)?;
    let not_after = asn1_time_to_datetime(cert.validity().not_after, locator)?;

    let subject = subject_identity(&cert);
    let issuer = extract_cn(&cert.issuer().to_string());

    let serial = cert
        .serial
        .to_bytes_be()
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(":");

    Ok(CertificateRecord {
        locator: locator.to_string(),
        subject,
        issuer,
        serial,
        not_before,
        not_after,
    })
}

/// Subject identity: CN first, then the first DNS SAN, then the full DN
fn subject_identity(cert: &X509Certificate) -> String {
    if let Some(cn) = cert
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
    {
        if !cn.is_empty() {
            return cn.to_string();
        }
    }

    if let Ok(Some(san_ext)) = cert.subject_alternative_name() {
        for name in &san_ext.value.general_names {
            if let GeneralName::DNSName(dns) = name {
                return dns.to_string();
            }
        }
    }

    cert.subject().to_string()
}

/// Convert ASN.1 time to chrono DateTime
fn asn1_time_to_datetime(time: ASN1Time, locator: &str) -> Result<DateTime<Utc>, FetchError> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or_else(|| FetchError::Parse {
            locator: locator.to_string(),
            message: "invalid timestamp in certificate validity".to_string(),
        })
}

/// Extract common name from a distinguished name string
fn extract_cn(dn: &str) -> String {
    // DN format: "CN=example.com, O=Example Inc, ..."
    for part in dn.split(',') {
        let part = part.trim();
        if let Some(cn) = part.strip_prefix("CN=") {
            return cn.to_string();
        }
    }
    dn.to_string()
}
