//! Integration tests for quota reporting and health.

mod helpers;

use axum::http::StatusCode;

use helpers::{GB, MB, TestApp};

#[tokio::test]
async fn test_initial_quota() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/quota", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = &response.body;
    assert_eq!(body["capacityBytes"], 15 * GB);
    assert_eq!(body["usedBytes"], 17 * GB / 2);
    assert_eq!(body["remainingBytes"], 13 * GB / 2);
    assert_eq!(body["usagePercentage"], 57);
    assert_eq!(body["isNearlyFull"], false);
    assert_eq!(body["isFull"], false);
    assert_eq!(body["total"], "15GB");
    assert_eq!(body["used"], "8.5GB");
    assert_eq!(body["remaining"], "6.5GB");
}

#[tokio::test]
async fn test_quota_reflects_admission() {
    let app = TestApp::new();

    let upload = app.upload("clip.mp4", 50 * MB).await;
    assert_eq!(upload.status, StatusCode::OK);

    let response = app.request("GET", "/api/quota", None).await;
    assert_eq!(response.body["usedBytes"], 17 * GB / 2 + 50 * MB);
}

#[tokio::test]
async fn test_nearly_full_and_full_flags() {
    let app = TestApp::with_config(|c| {
        c.drive.capacity_bytes = 1000 * MB;
        c.drive.initial_used_bytes = 950 * MB;
    });

    let response = app.request("GET", "/api/quota", None).await;

    assert_eq!(response.body["usagePercentage"], 95);
    assert_eq!(response.body["isNearlyFull"], true);
    assert_eq!(response.body["isFull"], true);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");

    let detailed = app.request("GET", "/api/health/detailed", None).await;
    assert_eq!(detailed.status, StatusCode::OK);
    assert_eq!(detailed.body["backend"], "instant");
    assert_eq!(detailed.body["backendHealthy"], true);
    assert_eq!(detailed.body["objects"], 0);
}
