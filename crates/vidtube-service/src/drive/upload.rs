//! Upload flow: validate, admit against the ledger, transfer, roll back on
//! transfer failure.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};
use validator::Validate;

use vidtube_core::error::AppError;
use vidtube_core::traits::TransferBackend;
use vidtube_entity::drive::{QuotaStatus, StoredObject};
use vidtube_storage::CapacityLedger;

/// Upload parameters, validated before the ledger is touched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UploadRequest {
    /// Object name.
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    /// MIME type.
    #[validate(length(min = 1, max = 127, message = "contentType is required"))]
    pub content_type: String,
    /// Declared size in bytes. Signed so that negative input can be
    /// reported rather than failing deserialization.
    #[validate(range(min = 0, message = "sizeBytes must not be negative"))]
    pub size_bytes: i64,
}

/// Successful upload: the stored handle and the quota after admission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Handle of the stored object.
    pub handle: StoredObject,
    /// Quota right after the admission.
    pub quota: QuotaStatus,
}

/// Admits uploads and moves them into the backend.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Capacity ledger.
    ledger: Arc<CapacityLedger>,
    /// Object-store backend.
    backend: Arc<dyn TransferBackend>,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(ledger: Arc<CapacityLedger>, backend: Arc<dyn TransferBackend>) -> Self {
        Self { ledger, backend }
    }

    /// Upload an object.
    ///
    /// Suspension happens only around the admission: the quota probe runs
    /// before the check and the transfer after the increment. A failed
    /// transfer removes the object again so its bytes are released.
    pub async fn upload(&self, request: UploadRequest) -> Result<UploadReceipt, AppError> {
        request.validate()?;
        let size_bytes = u64::try_from(request.size_bytes)
            .map_err(|_| AppError::validation("sizeBytes must not be negative"))?;

        self.backend.probe_quota().await?;

        let object = self
            .ledger
            .reserve(size_bytes, &request.name, &request.content_type)
            .map_err(|e| e.into_app_error(self.ledger.thresholds()))?;

        if let Err(e) = self.backend.put(&object.transfer_request()).await {
            self.ledger.forget(&object.id);
            error!(
                object_id = %object.id,
                size = object.size_bytes,
                error = %e,
                "Transfer failed after admission; reservation released"
            );
            return Err(AppError::storage(format!(
                "Failed to upload {}: {}",
                object.name, e.message
            )));
        }

        let quota = self.ledger.status();
        info!(
            object_id = %object.id,
            name = %object.name,
            size = object.size_bytes,
            remaining = quota.remaining_bytes,
            "Upload completed"
        );

        Ok(UploadReceipt {
            handle: object,
            quota,
        })
    }
}
