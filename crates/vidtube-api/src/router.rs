//! Route definitions for the drive HTTP API.
//!
//! All routes are mounted under `/api`. The debug routes exist only when
//! `drive.debug_endpoints` is enabled; otherwise they answer 404.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the API router with request logging and the body limit applied.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let mut api_routes = Router::new()
        .merge(drive_routes())
        .merge(upload_routes())
        .merge(object_routes())
        .merge(health_routes());

    if state.config.drive.debug_endpoints {
        tracing::warn!("Debug endpoints enabled");
        api_routes = api_routes.merge(debug_routes());
    }

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Quota reporting
fn drive_routes() -> Router<AppState> {
    Router::new().route("/quota", get(handlers::drive::get_quota))
}

/// Upload admission and object handles
fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/uploads", post(handlers::upload::upload))
        .route(
            "/uploads/{id}",
            get(handlers::upload::get_upload).delete(handlers::upload::delete_upload),
        )
}

/// Targets of the locators handed out with admitted objects
fn object_routes() -> Router<AppState> {
    Router::new()
        .route("/objects/{id}", get(handlers::object::view_object))
        .route("/objects/{id}/content", get(handlers::object::object_content))
}

/// Usage simulation
fn debug_routes() -> Router<AppState> {
    Router::new().route(
        "/debug/simulate-usage",
        post(handlers::debug::simulate_usage),
    )
}

/// Liveness and backend health
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
