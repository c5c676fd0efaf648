//! Backend that imitates a remote object store with fixed delays.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use vidtube_core::config::LatencyConfig;
use vidtube_core::result::AppResult;
use vidtube_core::traits::{TransferBackend, TransferRequest};
use vidtube_core::types::ObjectId;

/// Latency-simulating backend. No bytes are moved.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    /// Per-operation delays.
    latency: LatencyConfig,
}

impl SimulatedBackend {
    /// Create a backend with the given delays.
    pub fn new(latency: LatencyConfig) -> Self {
        Self { latency }
    }

    async fn pause(millis: u64) {
        if millis > 0 {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

#[async_trait]
impl TransferBackend for SimulatedBackend {
    fn backend_type(&self) -> &str {
        "simulated"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn probe_quota(&self) -> AppResult<()> {
        Self::pause(self.latency.quota_read_ms).await;
        Ok(())
    }

    async fn put(&self, request: &TransferRequest) -> AppResult<()> {
        Self::pause(self.latency.upload_ms).await;
        debug!(
            object_id = %request.object_id,
            key = %request.storage_key,
            size = request.size_bytes,
            "Simulated transfer complete"
        );
        Ok(())
    }

    async fn remove(&self, object_id: &ObjectId) -> AppResult<()> {
        Self::pause(self.latency.delete_ms).await;
        debug!(object_id = %object_id, "Simulated removal complete");
        Ok(())
    }

    async fn probe_object(&self, _object_id: &ObjectId) -> AppResult<()> {
        Self::pause(self.latency.lookup_ms).await;
        Ok(())
    }
}
