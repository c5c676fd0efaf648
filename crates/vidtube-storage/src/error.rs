//! Admission failures reported by the capacity ledger.

use thiserror::Error;

use vidtube_core::error::AppError;
use vidtube_core::types::format_bytes;
use vidtube_entity::drive::{QuotaSnapshot, QuotaStatus, QuotaThresholds};

/// Why the ledger refused to admit an object.
///
/// Callers branch on the variant; neither variant is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    /// The requested size does not fit in the remaining capacity.
    #[error(
        "Not enough storage space. Need {}, but only {} available.",
        format_bytes(*requested),
        format_bytes(*available)
    )]
    CapacityExceeded {
        /// Bytes the caller asked for.
        requested: u64,
        /// Bytes remaining at the time of the check.
        available: u64,
        /// Quota at the time of the check.
        quota: QuotaSnapshot,
    },

    /// The request was malformed; the ledger was not touched.
    #[error("Invalid upload request: {reason}")]
    InvalidRequest {
        /// What was wrong with the request.
        reason: String,
    },
}

impl AdmissionError {
    /// Map into the application error, attaching the quota the client
    /// should display for capacity rejections.
    pub fn into_app_error(self, thresholds: &QuotaThresholds) -> AppError {
        match &self {
            Self::CapacityExceeded { quota, .. } => {
                let status = QuotaStatus::from_snapshot(*quota, thresholds);
                AppError::capacity_exceeded(self.to_string()).with_detail("quota", status)
            }
            Self::InvalidRequest { .. } => AppError::validation(self.to_string()),
        }
    }
}

impl From<AdmissionError> for AppError {
    fn from(err: AdmissionError) -> Self {
        err.into_app_error(&QuotaThresholds::default())
    }
}
