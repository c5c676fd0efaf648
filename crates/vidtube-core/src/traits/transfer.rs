//! Transfer backend trait standing in for the real object store.
//!
//! The capacity ledger only does bookkeeping. Anything that would touch a
//! remote store (and therefore suspend) goes through a [`TransferBackend`],
//! which is called strictly before the admission check or strictly after
//! the usage increment, never in between.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::ObjectId;

/// What the backend needs to know to move an admitted object.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TransferRequest {
    /// Identifier the ledger assigned to the object.
    pub object_id: ObjectId,
    /// Key under which the backend stores the bytes.
    pub storage_key: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type.
    pub content_type: String,
}

/// Trait for object-store backends behind the drive.
///
/// Implementations exist for a latency-simulating backend (demo and
/// production wiring) and an instant backend (tests).
#[async_trait]
pub trait TransferBackend: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend type name (e.g., "simulated", "instant").
    fn backend_type(&self) -> &str;

    /// Check whether the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Round-trip performed before every quota read.
    async fn probe_quota(&self) -> AppResult<()>;

    /// Move the bytes of an already admitted object into the store.
    async fn put(&self, request: &TransferRequest) -> AppResult<()>;

    /// Remove an object from the store.
    async fn remove(&self, object_id: &ObjectId) -> AppResult<()>;

    /// Round-trip performed before an object lookup.
    async fn probe_object(&self, object_id: &ObjectId) -> AppResult<()>;
}
