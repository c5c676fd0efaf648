//! Backend that completes every operation immediately.

use async_trait::async_trait;

use vidtube_core::result::AppResult;
use vidtube_core::traits::{TransferBackend, TransferRequest};
use vidtube_core::types::ObjectId;

/// Zero-latency backend used in tests and latency-free deployments.
#[derive(Debug, Clone, Default)]
pub struct InstantBackend;

impl InstantBackend {
    /// Create a new instant backend.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TransferBackend for InstantBackend {
    fn backend_type(&self) -> &str {
        "instant"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn probe_quota(&self) -> AppResult<()> {
        Ok(())
    }

    async fn put(&self, _request: &TransferRequest) -> AppResult<()> {
        Ok(())
    }

    async fn remove(&self, _object_id: &ObjectId) -> AppResult<()> {
        Ok(())
    }

    async fn probe_object(&self, _object_id: &ObjectId) -> AppResult<()> {
        Ok(())
    }
}
