//! Drive quota handler.

use axum::Json;
use axum::extract::State;

use vidtube_entity::drive::QuotaStatus;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/quota
pub async fn get_quota(State(state): State<AppState>) -> Result<Json<QuotaStatus>, ApiError> {
    let status = state.drive_service.quota_status().await?;
    Ok(Json(status))
}
