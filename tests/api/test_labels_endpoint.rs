// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /v1/labels endpoint tests
//!
//! These tests verify that:
//! - A base64 upload is labeled and returned as table + chart
//! - Rows keep API order while chart bars are sorted by score
//! - API errors, empty results and missing input map to statuses
//! - Malformed base64 is rejected with 400

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`
use vision_label_node::{
    api::http_server::{create_app, AppState},
    vision::Label,
};

use crate::support::{analyzer_with, png_bytes, spawn_image_host, CountingDetector};

fn app(detector: Arc<CountingDetector>) -> Router {
    create_app(AppState::new(analyzer_with(detector)))
}

async fn post_labels(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/labels")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_labels_for_uploaded_image() {
    let detector = CountingDetector::with_labels(vec![
        Label::new("cat", 0.6),
        Label::new("whiskers", 0.95),
    ]);
    let (status, body) = post_labels(
        app(detector.clone()),
        json!({ "image": STANDARD.encode(png_bytes(32, 32)) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["table"]["columns"], json!(["Label", "Score"]));
    assert_eq!(body["table"]["rows"][0]["label"], "cat");
    assert_eq!(body["table"]["rows"][1]["label"], "whiskers");
    assert_eq!(body["chart"]["bars"][0]["category"], "whiskers");
    assert_eq!(body["chart"]["bars"][1]["category"], "cat");
    assert_eq!(detector.calls(), 1);
}

#[tokio::test]
async fn test_repeat_upload_served_from_cache() {
    let detector = CountingDetector::with_labels(vec![Label::new("cat", 0.9)]);
    let app = app(detector.clone());
    let body = json!({ "image": STANDARD.encode(png_bytes(32, 32)) });

    let (_, first) = post_labels(app.clone(), body.clone()).await;
    let (_, second) = post_labels(app, body).await;

    assert_eq!(first, second);
    assert_eq!(detector.calls(), 1);
}

#[tokio::test]
async fn test_labels_for_url() {
    let host = spawn_image_host(png_bytes(8, 8)).await;
    let detector = CountingDetector::with_labels(vec![Label::new("cat", 0.9)]);

    let (status, body) = post_labels(
        app(detector),
        json!({ "url": format!("http://{}/cat.png", host) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unreachable_url_is_warning() {
    let host = spawn_image_host(png_bytes(8, 8)).await;
    let detector = CountingDetector::with_labels(vec![Label::new("cat", 0.9)]);

    let (status, body) = post_labels(
        app(detector.clone()),
        json!({ "url": format!("http://{}/missing.png", host) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "warning");
    assert!(body["inputWarning"].as_str().unwrap().contains("HTTP 404"));
    assert!(body.get("table").is_none());
    assert_eq!(detector.calls(), 0);
}

#[tokio::test]
async fn test_api_error_reported() {
    let detector = CountingDetector::with_error("quota exceeded");
    let (status, body) = post_labels(
        app(detector),
        json!({ "image": STANDARD.encode(png_bytes(8, 8)) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "API error: quota exceeded");
    assert!(body.get("chart").is_none());
}

#[tokio::test]
async fn test_no_labels_reported() {
    let detector = CountingDetector::with_labels(vec![]);
    let (_, body) = post_labels(
        app(detector),
        json!({ "image": STANDARD.encode(png_bytes(8, 8)) }),
    )
    .await;

    assert_eq!(body["status"], "empty");
    assert_eq!(body["message"], "No labels were detected.");
}

#[tokio::test]
async fn test_empty_request_is_missing_content() {
    let detector = CountingDetector::with_labels(vec![Label::new("cat", 0.9)]);
    let (status, body) = post_labels(app(detector.clone()), json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "warning");
    assert_eq!(body["message"], "Upload an image or enter an image URL first.");
    assert_eq!(detector.calls(), 0);
}

#[tokio::test]
async fn test_invalid_base64_rejected() {
    let detector = CountingDetector::with_labels(vec![Label::new("cat", 0.9)]);
    let (status, body) = post_labels(
        app(detector.clone()),
        json!({ "image": "not-valid-base64!!!" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_error");
    assert_eq!(detector.calls(), 0);
}

#[tokio::test]
async fn test_undecodable_upload_is_warning() {
    let detector = CountingDetector::with_labels(vec![Label::new("cat", 0.9)]);
    let (_, body) = post_labels(
        app(detector.clone()),
        json!({ "image": STANDARD.encode(b"definitely not an image") }),
    )
    .await;

    assert_eq!(body["status"], "warning");
    assert!(body["inputWarning"]
        .as_str()
        .unwrap()
        .starts_with("Could not read the uploaded image"));
    assert_eq!(detector.calls(), 0);
}

#[tokio::test]
async fn test_body_over_limit_is_413() {
    let detector = CountingDetector::with_labels(vec![Label::new("cat", 0.9)]);
    let app = create_app(AppState::new(analyzer_with(detector.clone())).with_body_limit(1024));

    let (status, body) = post_labels(app, json!({ "image": STANDARD.encode([0u8; 4096]) })).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error_type"], "payload_too_large");
    assert_eq!(body["details"]["limit_bytes"], 1024);
    assert_eq!(detector.calls(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let detector = CountingDetector::with_labels(vec![]);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/labels")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app(detector).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
