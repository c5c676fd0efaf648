//! Request DTOs.

use serde::{Deserialize, Serialize};

use vidtube_service::drive::UploadRequest;

/// Content type assumed when an upload does not declare one.
pub const DEFAULT_CONTENT_TYPE: &str = "video/mp4";

/// `POST /api/uploads` body.
///
/// Every field is optional at the JSON level so that a missing field is
/// reported as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadBody {
    /// Object name.
    pub name: Option<String>,
    /// MIME type; defaults to `video/mp4`.
    pub content_type: Option<String>,
    /// Declared size in bytes.
    pub size_bytes: Option<i64>,
}

impl UploadBody {
    /// Convert into the service request, filling defaults.
    ///
    /// Returns `None` when a required field is missing.
    pub fn into_request(self) -> Option<UploadRequest> {
        Some(UploadRequest {
            name: self.name?,
            content_type: self
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            size_bytes: self.size_bytes?,
        })
    }
}

/// `POST /api/debug/simulate-usage` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulateUsageRequest {
    /// Signed usage change in gigabytes; defaults to 1.
    #[serde(rename = "deltaGB")]
    pub delta_gb: Option<f64>,
}

impl SimulateUsageRequest {
    /// The requested delta, or 1 GB when none was given.
    pub fn delta_gb(&self) -> f64 {
        self.delta_gb.unwrap_or(1.0)
    }
}
