//! Object locator handlers: the view and retrieval addresses handed out
//! with every admitted object.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::{ContentResponse, HandleResponse};
use crate::error::ApiError;
use crate::handlers::upload::parse_object_id;
use crate::state::AppState;

/// GET /api/objects/{id}
pub async fn view_object(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HandleResponse>, ApiError> {
    let id = parse_object_id(&id)?;
    let handle = state.drive_service.get_object(id).await?;
    Ok(Json(HandleResponse { handle }))
}

/// GET /api/objects/{id}/content
///
/// The store is simulated, so retrieval answers with where the bytes live
/// rather than the bytes themselves.
pub async fn object_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentResponse>, ApiError> {
    let id = parse_object_id(&id)?;
    let handle = state.drive_service.get_object(id).await?;
    Ok(Json(ContentResponse {
        id: handle.id,
        storage_key: handle.storage_key,
        content_type: handle.content_type,
        size_bytes: handle.size_bytes,
    }))
}
