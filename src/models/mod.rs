//! Data model for cert-check

pub mod metrics;
pub mod record;

pub use metrics::{Metrics, ValidityState};
pub use record::CertificateRecord;
