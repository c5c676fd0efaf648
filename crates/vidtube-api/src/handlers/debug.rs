//! Debug-only handlers. Mounted only when `drive.debug_endpoints` is set.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::info;

use crate::dto::{SimulateUsageRequest, SimulateUsageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/debug/simulate-usage
///
/// A request without a JSON body counts as `{}`, so the default delta of
/// 1 GB applies.
pub async fn simulate_usage(
    State(state): State<AppState>,
    body: Result<Option<Json<SimulateUsageRequest>>, JsonRejection>,
) -> Result<Json<SimulateUsageResponse>, ApiError> {
    let request = body?.map(|Json(b)| b).unwrap_or_default();
    let delta_gb = request.delta_gb();

    info!(delta_gb, "Simulating storage usage change");
    let outcome = state.drive_service.simulate_usage(delta_gb)?;

    Ok(Json(SimulateUsageResponse {
        message: outcome.message,
        quota: outcome.quota,
    }))
}
