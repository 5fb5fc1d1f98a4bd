// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Label client tests against a local stand-in for the Vision API
//!
//! These tests verify that GoogleVisionClient:
//! - Sends one LABEL_DETECTION request with base64 content
//! - Authenticates with an API key or a service-account bearer token
//! - Returns labels in API order and surfaces per-image errors
//! - Maps HTTP failures to LabelError::Status

use axum::http::StatusCode;
use vision_label_node::vision::{
    GoogleVisionClient, ImageContent, Label, LabelDetector, LabelError, ServiceAccountKey,
    VisionAuth,
};

use crate::support::{service_account_json, FakeVisionApi};

fn labels_body() -> serde_json::Value {
    serde_json::json!({
        "responses": [{
            "labelAnnotations": [
                {"description": "Cat", "score": 0.9},
                {"description": "Dog", "score": 0.5}
            ]
        }]
    })
}

#[tokio::test]
async fn test_api_key_request() {
    let api = FakeVisionApi::spawn(StatusCode::OK, labels_body()).await;
    let client =
        GoogleVisionClient::new(&api.endpoint(), VisionAuth::ApiKey("secret".to_string())).unwrap();

    let response = client
        .detect_labels(&ImageContent::new(b"abc".to_vec()))
        .await
        .unwrap();

    assert!(response.error_message.is_empty());
    assert_eq!(
        response.labels,
        vec![Label::new("Cat", 0.9), Label::new("Dog", 0.5)]
    );

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path_and_query, "/v1/images:annotate?key=secret");
    assert!(requests[0].authorization.is_none());
    assert_eq!(requests[0].body["requests"][0]["image"]["content"], "YWJj");
    assert_eq!(
        requests[0].body["requests"][0]["features"][0]["type"],
        "LABEL_DETECTION"
    );
}

#[tokio::test]
async fn test_per_image_error_is_returned_as_message() {
    let api = FakeVisionApi::spawn(
        StatusCode::OK,
        serde_json::json!({"responses": [{"error": {"code": 8, "message": "quota exceeded"}}]}),
    )
    .await;
    let client =
        GoogleVisionClient::new(&api.endpoint(), VisionAuth::ApiKey("k".to_string())).unwrap();

    let response = client
        .detect_labels(&ImageContent::new(b"abc".to_vec()))
        .await
        .unwrap();
    assert_eq!(response.error_message, "quota exceeded");
    assert!(response.labels.is_empty());
}

#[tokio::test]
async fn test_http_error_maps_to_status() {
    let api = FakeVisionApi::spawn(
        StatusCode::FORBIDDEN,
        serde_json::json!({"error": {"code": 403, "message": "API key not valid."}}),
    )
    .await;
    let client =
        GoogleVisionClient::new(&api.endpoint(), VisionAuth::ApiKey("bad".to_string())).unwrap();

    let result = client.detect_labels(&ImageContent::new(b"abc".to_vec())).await;
    match result {
        Err(LabelError::Status { status, message }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "API key not valid.");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let client = GoogleVisionClient::new(
        "http://127.0.0.1:59999",
        VisionAuth::ApiKey("k".to_string()),
    )
    .unwrap();
    let result = client.detect_labels(&ImageContent::new(b"abc".to_vec())).await;
    assert!(matches!(result, Err(LabelError::Request(_))));
}

#[tokio::test]
async fn test_service_account_bearer_token_reused() {
    let api = FakeVisionApi::spawn(StatusCode::OK, labels_body()).await;
    let key = ServiceAccountKey::from_json(&service_account_json(&api.token_uri())).unwrap();
    let client = GoogleVisionClient::new(&api.endpoint(), VisionAuth::ServiceAccount(key)).unwrap();

    let content = ImageContent::new(b"abc".to_vec());
    client.detect_labels(&content).await.unwrap();
    client.detect_labels(&content).await.unwrap();

    let token_requests = api.token_requests();
    assert_eq!(token_requests.len(), 1);
    assert!(token_requests[0].contains("grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer"));
    assert!(token_requests[0].contains("assertion="));

    let requests = api.requests();
    assert_eq!(requests.len(), 2);
    for request in requests {
        assert_eq!(request.authorization.as_deref(), Some("Bearer tok-1"));
        assert_eq!(request.path_and_query, "/v1/images:annotate");
    }
}
