//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::{DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

/// GET /api/health/detailed
pub async fn health_detailed(State(state): State<AppState>) -> Json<DetailedHealthResponse> {
    let (backend, backend_healthy) = state.drive_service.backend_health().await;

    Json(DetailedHealthResponse {
        status: if backend_healthy { "ok" } else { "degraded" }.to_string(),
        backend,
        backend_healthy,
        objects: state.drive_service.object_count(),
        ledger: state.drive_service.metrics(),
    })
}
