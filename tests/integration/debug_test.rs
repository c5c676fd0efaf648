//! Integration tests for the usage simulation endpoint.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{GB, MB, TestApp};

#[tokio::test]
async fn test_simulate_usage_pushes_near_full() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/debug/simulate-usage",
            Some(json!({ "deltaGB": 6 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Simulated 6GB storage usage change");
    assert_eq!(response.body["quota"]["usedBytes"], 29 * GB / 2);
    assert_eq!(response.body["quota"]["isNearlyFull"], true);
}

#[tokio::test]
async fn test_simulate_usage_defaults_to_one_gigabyte() {
    let app = TestApp::new();

    let response = app.request("POST", "/api/debug/simulate-usage", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["quota"]["usedBytes"], 19 * GB / 2);
}

#[tokio::test]
async fn test_simulate_negative_floors_at_zero() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/debug/simulate-usage",
            Some(json!({ "deltaGB": -100 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["quota"]["usedBytes"], 0);
}

#[tokio::test]
async fn test_simulated_usage_affects_admission() {
    let app = TestApp::new();
    app.request(
        "POST",
        "/api/debug/simulate-usage",
        Some(json!({ "deltaGB": 6.5 })),
    )
    .await;

    let response = app.upload("tiny.mp4", MB).await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_debug_routes_absent_when_disabled() {
    let app = TestApp::with_config(|c| c.drive.debug_endpoints = false);

    let response = app
        .request(
            "POST",
            "/api/debug/simulate-usage",
            Some(json!({ "deltaGB": 1 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.state.ledger.get_quota().used_bytes, 17 * GB / 2);
}
