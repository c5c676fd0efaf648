//! Integration tests for upload admission and object handles.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{FailingBackend, GB, MB, TestApp};

#[tokio::test]
async fn test_upload_admitted() {
    let app = TestApp::new();

    let response = app.upload("holiday.mp4", 50 * MB).await;

    assert_eq!(response.status, StatusCode::OK);
    let handle = &response.body["handle"];
    let id = handle["id"].as_str().expect("id");
    assert!(id.starts_with("obj_"));
    assert_eq!(handle["name"], "holiday.mp4");
    assert_eq!(handle["sizeBytes"], 50 * MB);
    assert_eq!(handle["contentType"], "video/mp4");
    assert_eq!(
        handle["retrievalLocator"],
        format!("/api/objects/{id}/content")
    );
    assert_eq!(response.body["quota"]["usedBytes"], 17 * GB / 2 + 50 * MB);
}

#[tokio::test]
async fn test_upload_over_capacity_rejected() {
    let app = TestApp::new();

    let response = app.upload("huge.mp4", 7 * GB).await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["error"], "CAPACITY_EXCEEDED");
    assert_eq!(
        response.body["message"],
        "Not enough storage space. Need 7 GB, but only 6.5 GB available."
    );
    assert_eq!(response.body["quota"]["remainingBytes"], 13 * GB / 2);
    assert_eq!(app.state.ledger.get_quota().used_bytes, 17 * GB / 2);
}

#[tokio::test]
async fn test_upload_exactly_remaining_is_admitted() {
    let app = TestApp::with_config(|c| {
        c.drive.capacity_bytes = 1000;
        c.drive.initial_used_bytes = 600;
    });

    let response = app.upload("fits", 400).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["quota"]["remainingBytes"], 0);

    let rejected = app.upload("one-more", 1).await;
    assert_eq!(rejected.status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_upload_missing_fields() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/uploads", Some(json!({ "name": "x.mp4" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app
        .request("POST", "/api/uploads", Some(json!({ "sizeBytes": 10 })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_negative_size() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/uploads",
            Some(json!({ "name": "x.mp4", "sizeBytes": -5 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.state.ledger.get_quota().used_bytes, 17 * GB / 2);
}

#[tokio::test]
async fn test_upload_malformed_body() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/uploads", Some(json!({ "sizeBytes": "big" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_and_delete_upload() {
    let app = TestApp::new();
    let upload = app.upload("clip.mp4", 100 * MB).await;
    let id = upload.body["handle"]["id"].as_str().expect("id").to_string();

    let fetched = app.request("GET", &format!("/api/uploads/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["handle"]["id"], id.as_str());

    let deleted = app
        .request("DELETE", &format!("/api/uploads/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["quota"]["usedBytes"], 17 * GB / 2);

    let missing = app.request("GET", &format!("/api/uploads/{id}"), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let again = app
        .request("DELETE", &format!("/api/uploads/{id}"), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_locators_resolve() {
    let app = TestApp::new();
    let upload = app.upload("clip.mp4", MB).await;
    let handle = &upload.body["handle"];
    let id = handle["id"].as_str().expect("id").to_string();
    let view = handle["viewLocator"].as_str().expect("viewLocator").to_string();
    let content = handle["retrievalLocator"]
        .as_str()
        .expect("retrievalLocator")
        .to_string();

    let viewed = app.request("GET", &view, None).await;
    assert_eq!(viewed.status, StatusCode::OK);
    assert_eq!(viewed.body["handle"]["id"], id.as_str());

    let fetched = app.request("GET", &content, None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["id"], id.as_str());
    assert_eq!(fetched.body["sizeBytes"], MB);
    assert_eq!(fetched.body["contentType"], "video/mp4");
    assert_eq!(fetched.body["storageKey"], handle["storageKey"]);

    app.request("DELETE", &format!("/api/uploads/{id}"), None).await;
    let gone = app.request("GET", &content, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_failed_removal_keeps_bytes_counted() {
    let app = TestApp::with_backend(|_| {}, Arc::new(FailingBackend));
    let object = app
        .state
        .ledger
        .reserve(GB, "kept.mp4", "video/mp4")
        .expect("admitted");

    let response = app
        .request("DELETE", &format!("/api/uploads/{}", object.id), None)
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.state.ledger.get_quota().used_bytes, 17 * GB / 2 + GB);
    assert_eq!(app.state.ledger.lookup(&object.id), Some(object));
}

#[tokio::test]
async fn test_invalid_object_id() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/uploads/not-an-id", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_failed_transfer_is_500_and_releases() {
    let app = TestApp::with_backend(|_| {}, Arc::new(FailingBackend));

    let response = app.upload("lost.mp4", GB).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "UPLOAD_FAILED");
    assert_eq!(app.state.ledger.get_quota().used_bytes, 17 * GB / 2);
    assert_eq!(app.state.ledger.object_count(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_uploads_never_overcommit() {
    let app = TestApp::with_config(|c| {
        c.drive.capacity_bytes = 10 * MB;
        c.drive.initial_used_bytes = 0;
    });
    let app = Arc::new(app);

    let requests = (0..25).map(|i| {
        let app = Arc::clone(&app);
        tokio::spawn(async move { app.upload(&format!("part-{i}.mp4"), MB).await.status })
    });
    let statuses: Vec<StatusCode> = futures::future::join_all(requests)
        .await
        .into_iter()
        .map(|r| r.expect("upload task panicked"))
        .collect();

    let admitted = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    let rejected = statuses
        .iter()
        .filter(|s| **s == StatusCode::PAYLOAD_TOO_LARGE)
        .count();

    assert_eq!(admitted, 10);
    assert_eq!(rejected, 15);
    assert_eq!(app.state.ledger.get_quota().used_bytes, 10 * MB);
    assert_eq!(app.state.ledger.object_count(), 10);
}
