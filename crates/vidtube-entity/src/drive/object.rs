//! Stored object handle returned for every admitted upload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vidtube_core::traits::TransferRequest;
use vidtube_core::types::ObjectId;

/// Handle to an object admitted into the drive.
///
/// Created atomically with the usage increment and never updated.
/// Removing it gives `size_bytes` back to the remaining budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    /// Opaque identifier.
    pub id: ObjectId,
    /// Name supplied by the uploader.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type.
    pub content_type: String,
    /// Key under which the backend stores the bytes.
    pub storage_key: String,
    /// Locator a client uses to download the object.
    pub retrieval_locator: String,
    /// Locator of the object's view page.
    pub view_locator: String,
    /// When the object was admitted.
    pub created_at: DateTime<Utc>,
}

impl StoredObject {
    /// Build a handle for a freshly admitted object.
    ///
    /// Locators are derived from `locator_base` and the id; the storage key
    /// is the sanitized name suffixed with the admission time in millis.
    pub fn admit(
        id: ObjectId,
        name: &str,
        size_bytes: u64,
        content_type: &str,
        locator_base: &str,
    ) -> Self {
        let created_at = Utc::now();
        let base = locator_base.trim_end_matches('/');
        Self {
            id,
            name: name.to_string(),
            size_bytes,
            content_type: content_type.to_string(),
            storage_key: format!(
                "{}_{}",
                sanitize_storage_name(name),
                created_at.timestamp_millis()
            ),
            retrieval_locator: format!("{base}/{id}/content"),
            view_locator: format!("{base}/{id}"),
            created_at,
        }
    }

    /// The request the transfer backend needs to move this object.
    pub fn transfer_request(&self) -> TransferRequest {
        TransferRequest {
            object_id: self.id,
            storage_key: self.storage_key.clone(),
            size_bytes: self.size_bytes,
            content_type: self.content_type.clone(),
        }
    }
}

/// Replace every character outside `[A-Za-z0-9]` with `_`.
pub fn sanitize_storage_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
