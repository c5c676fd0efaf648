//! Upload admission and object handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use vidtube_core::error::AppError;
use vidtube_core::types::ObjectId;

use crate::dto::{DeleteResponse, HandleResponse, UploadBody, UploadResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/uploads
pub async fn upload(
    State(state): State<AppState>,
    body: Result<Json<UploadBody>, JsonRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let Json(body) = body?;
    let request = body
        .into_request()
        .ok_or_else(|| AppError::validation("Missing required fields: name, sizeBytes"))?;

    let receipt = state.upload_service.upload(request).await?;
    Ok(Json(UploadResponse {
        handle: receipt.handle,
        quota: receipt.quota,
    }))
}

/// GET /api/uploads/{id}
pub async fn get_upload(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HandleResponse>, ApiError> {
    let id = parse_object_id(&id)?;
    let handle = state.drive_service.get_object(id).await?;
    Ok(Json(HandleResponse { handle }))
}

/// DELETE /api/uploads/{id}
pub async fn delete_upload(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_object_id(&id)?;
    let quota = state.drive_service.delete_object(id).await?;
    Ok(Json(DeleteResponse {
        message: format!("Object {id} deleted"),
        quota,
    }))
}

pub(crate) fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    raw.parse()
        .map_err(|_| AppError::validation(format!("Invalid object id: {raw}")))
}
