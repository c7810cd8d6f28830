//! Shared helpers for integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rcgen::{CertificateParams, DnType, KeyPair};
use time::{Duration, OffsetDateTime};

/// Generated certificate material for tests
pub struct TestCert {
    pub pem: String,
    pub der: Vec<u8>,
    pub key_der: Vec<u8>,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
}

/// Generate a self-signed certificate for `cn` valid over the given window,
/// expressed as day offsets from now. Bounds are truncated to whole seconds
/// to match X.509 encoding precision.
pub fn generate_cert(cn: &str, not_before_days: i64, not_after_days: i64) -> TestCert {
    let now = OffsetDateTime::from_unix_timestamp(OffsetDateTime::now_utc().unix_timestamp())
        .expect("valid timestamp");
    let not_before = now + Duration::days(not_before_days);
    let not_after = now + Duration::days(not_after_days);

    let key_pair = KeyPair::generate().expect("generate key pair");
    let mut params = CertificateParams::new(vec![cn.to_string()]).expect("certificate params");
    params.distinguished_name.push(DnType::CommonName, cn);
    params.not_before = not_before;
    params.not_after = not_after;
    let cert = params
        .self_signed(&key_pair)
        .expect("self-signed certificate");

    TestCert {
        pem: cert.pem(),
        der: cert.der().as_ref().to_vec(),
        key_der: key_pair.serialize_der(),
        not_before: Utc.timestamp_opt(not_before.unix_timestamp(), 0).unwrap(),
        not_after: Utc.timestamp_opt(not_after.unix_timestamp(), 0).unwrap(),
    }
}
