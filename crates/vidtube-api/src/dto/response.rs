//! Response DTOs.

use serde::{Deserialize, Serialize};

use vidtube_core::types::ObjectId;
use vidtube_entity::drive::{QuotaStatus, StoredObject};
use vidtube_storage::LedgerMetricsSnapshot;

/// Successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Stored object handle.
    pub handle: StoredObject,
    /// Quota after admission.
    pub quota: QuotaStatus,
}

/// Single object lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandleResponse {
    /// Stored object handle.
    pub handle: StoredObject,
}

/// Where an object's bytes can be fetched from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    /// Object id.
    pub id: ObjectId,
    /// Backend key holding the bytes.
    pub storage_key: String,
    /// MIME type.
    pub content_type: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

/// Object deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Summary.
    pub message: String,
    /// Quota after the bytes were released.
    pub quota: QuotaStatus,
}

/// Usage simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateUsageResponse {
    /// Summary.
    pub message: String,
    /// Quota after the change.
    pub quota: QuotaStatus,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Backend type.
    pub backend: String,
    /// Whether the backend answered its health check.
    pub backend_healthy: bool,
    /// Objects currently recorded in the ledger.
    pub objects: usize,
    /// Ledger activity counters.
    pub ledger: LedgerMetricsSnapshot,
}
