//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use vidtube_api::{AppState, build_app};
use vidtube_core::config::AppConfig;
use vidtube_core::error::AppError;
use vidtube_core::result::AppResult;
use vidtube_core::traits::{TransferBackend, TransferRequest};
use vidtube_core::types::ObjectId;
use vidtube_storage::providers::InstantBackend;

/// 1 GiB.
pub const GB: u64 = 1024 * 1024 * 1024;
/// 1 MiB.
pub const MB: u64 = 1024 * 1024;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for inspecting the ledger directly
    pub state: AppState,
}

impl TestApp {
    /// Default drive (15 GB, 8.5 GB used) with debug endpoints enabled.
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Build an app after adjusting the default configuration.
    pub fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        Self::with_backend(adjust, Arc::new(InstantBackend::new()))
    }

    /// Build an app around a specific backend.
    pub fn with_backend(
        adjust: impl FnOnce(&mut AppConfig),
        backend: Arc<dyn TransferBackend>,
    ) -> Self {
        let mut config = AppConfig::default();
        config.drive.debug_endpoints = true;
        adjust(&mut config);

        let state = AppState::new(config, backend);
        let router = build_app(state.clone());
        Self { router, state }
    }

    /// Send a request; the body, when present, is sent as JSON.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        let body = match body {
            Some(b) => {
                req = req.header("Content-Type", "application/json");
                Body::from(serde_json::to_string(&b).expect("Failed to serialize body"))
            }
            None => Body::empty(),
        };

        let req = req.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// POST /api/uploads with a name and size.
    pub async fn upload(&self, name: &str, size_bytes: u64) -> TestResponse {
        self.request(
            "POST",
            "/api/uploads",
            Some(serde_json::json!({ "name": name, "sizeBytes": size_bytes })),
        )
        .await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
}

/// Backend whose transfers always fail.
#[derive(Debug, Default)]
pub struct FailingBackend;

#[async_trait]
impl TransferBackend for FailingBackend {
    fn backend_type(&self) -> &str {
        "failing"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(false)
    }

    async fn probe_quota(&self) -> AppResult<()> {
        Ok(())
    }

    async fn put(&self, _request: &TransferRequest) -> AppResult<()> {
        Err(AppError::storage("object store unreachable"))
    }

    async fn remove(&self, _object_id: &ObjectId) -> AppResult<()> {
        Err(AppError::storage("object store unreachable"))
    }

    async fn probe_object(&self, _object_id: &ObjectId) -> AppResult<()> {
        Ok(())
    }
}
