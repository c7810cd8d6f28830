//! Expiry metrics derived from a fetched certificate

use crate::models::CertificateRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

const SECONDS_PER_DAY: i64 = 86_400;

/// Time-validity classification of a certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidityState {
    Valid,
    NotYetValid,
    Expired,
}

impl fmt::Display for ValidityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidityState::Valid => write!(f, "valid"),
            ValidityState::NotYetValid => write!(f, "not-yet-valid"),
            ValidityState::Expired => write!(f, "expired"),
        }
    }
}

/// Metrics computed from a certificate record at a single instant.
///
/// Every time-derived field comes from the one `evaluated_at` capture, so
/// the day count can never disagree with the validity state.
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    /// When the metrics were evaluated
    pub evaluated_at: DateTime<Utc>,
    /// Whole days until expiry, floored; negative once expired
    pub days_until_expiry: i64,
    /// Seconds until expiry; negative once expired
    pub seconds_until_expiry: i64,
    /// Time-validity classification
    pub state: ValidityState,
    /// Certificate validity window start
    pub not_before: DateTime<Utc>,
    /// Certificate validity window end
    pub not_after: DateTime<Utc>,
    /// Subject identity of the certificate
    pub subject: String,
    /// Locator the certificate came from
    pub locator: String,
}

impl Metrics {
    /// Build metrics from a record, capturing the wall clock exactly once
    pub fn build(record: &CertificateRecord) -> Self {
        Self::build_at(record, Utc::now())
    }

    /// Build metrics against an explicit evaluation instant.
    ///
    /// Day counts use mathematical floor: a certificate 12 hours past
    /// `not_after` reports -1 days, one valid for another 9.5 days
    /// reports 9.
    pub fn build_at(record: &CertificateRecord, now: DateTime<Utc>) -> Self {
        let remaining = record.not_after.signed_duration_since(now);
        let seconds_until_expiry = remaining.num_seconds();
        let days_until_expiry = seconds_until_expiry.div_euclid(SECONDS_PER_DAY);

        let state = if now > record.not_after {
            ValidityState::Expired
        } else if now < record.not_before {
            ValidityState::NotYetValid
        } else {
            ValidityState::Valid
        };

        Self {
            evaluated_at: now,
            days_until_expiry,
            seconds_until_expiry,
            state,
            not_before: record.not_before,
            not_after: record.not_after,
            subject: record.subject.clone(),
            locator: record.locator.clone(),
        }
    }

    /// Whether the certificate is inside its validity window
    pub fn is_valid(&self) -> bool {
        self.state == ValidityState::Valid
    }
}
