//! # vidtube-api
//!
//! HTTP API layer for the VideoTube drive built on Axum.
//!
//! Provides the quota, upload, and debug endpoints, middleware (CORS,
//! compression, request logging), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
