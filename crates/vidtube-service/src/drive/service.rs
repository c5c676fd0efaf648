//! Drive quota reporting, object lookup and removal, usage simulation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use vidtube_core::error::AppError;
use vidtube_core::traits::TransferBackend;
use vidtube_core::types::ObjectId;
use vidtube_core::types::units::gb_to_bytes;
use vidtube_entity::drive::{QuotaStatus, StoredObject};
use vidtube_storage::{CapacityLedger, LedgerMetricsSnapshot};

/// Read-mostly access to the drive plus the non-upload mutations.
#[derive(Debug, Clone)]
pub struct DriveService {
    /// Capacity ledger.
    ledger: Arc<CapacityLedger>,
    /// Object-store backend.
    backend: Arc<dyn TransferBackend>,
}

/// Result of a usage simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Human-readable summary.
    pub message: String,
    /// Quota after the change.
    pub quota: QuotaStatus,
}

impl DriveService {
    /// Creates a new drive service.
    pub fn new(ledger: Arc<CapacityLedger>, backend: Arc<dyn TransferBackend>) -> Self {
        Self { ledger, backend }
    }

    /// Current quota with advisory flags.
    ///
    /// The backend round-trip happens before the ledger is read, so the
    /// status reflects every admission completed by the time it returns.
    pub async fn quota_status(&self) -> Result<QuotaStatus, AppError> {
        self.backend.probe_quota().await?;
        Ok(self.ledger.status())
    }

    /// Fetch the handle of an admitted object.
    pub async fn get_object(&self, id: ObjectId) -> Result<StoredObject, AppError> {
        self.backend.probe_object(&id).await?;
        self.ledger
            .lookup(&id)
            .ok_or_else(|| AppError::not_found(format!("Object {id} not found")))
    }

    /// Remove an object from the store and give its bytes back.
    ///
    /// The backend removal runs first; if it fails the ledger still
    /// accounts for the bytes, matching what the store actually holds.
    pub async fn delete_object(&self, id: ObjectId) -> Result<QuotaStatus, AppError> {
        let object = self
            .ledger
            .lookup(&id)
            .ok_or_else(|| AppError::not_found(format!("Object {id} not found")))?;

        self.backend.remove(&id).await.map_err(|e| {
            warn!(object_id = %id, error = %e, "Backend removal failed");
            AppError::storage(format!("Failed to delete object: {}", e.message))
        })?;

        if self.ledger.forget(&id).is_none() {
            // A concurrent delete released the bytes first.
            info!(object_id = %id, "Object already removed");
            return Err(AppError::not_found(format!("Object {id} not found")));
        }

        info!(object_id = %id, size = object.size_bytes, "Object deleted");
        Ok(self.ledger.status())
    }

    /// Shift usage by `delta_gb` gigabytes, bypassing admission.
    pub fn simulate_usage(&self, delta_gb: f64) -> Result<SimulationOutcome, AppError> {
        if !delta_gb.is_finite() {
            return Err(AppError::validation("deltaGB must be a finite number"));
        }

        self.ledger.simulate_usage_delta(gb_to_bytes(delta_gb));

        Ok(SimulationOutcome {
            message: format!("Simulated {delta_gb}GB storage usage change"),
            quota: self.ledger.status(),
        })
    }

    /// Ledger activity counters.
    pub fn metrics(&self) -> LedgerMetricsSnapshot {
        self.ledger.metrics().snapshot()
    }

    /// Number of objects currently recorded.
    pub fn object_count(&self) -> usize {
        self.ledger.object_count()
    }

    /// Backend type and reachability.
    pub async fn backend_health(&self) -> (String, bool) {
        let healthy = self.backend.health_check().await.unwrap_or(false);
        (self.backend.backend_type().to_string(), healthy)
    }
}
