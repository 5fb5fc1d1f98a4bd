// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Label endpoint handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, warn};

use super::request::LabelsRequest;
use super::response::LabelsResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /v1/labels - Label an image
///
/// # Request
/// - `image`: Base64-encoded image file (optional, wins over `url`)
/// - `url`: Image URL (optional)
///
/// # Response
/// - `status`: ok, empty, error or warning
/// - `message`: Notice text for non-ok statuses
/// - `table`: Label/Score rows in API order
/// - `chart`: Bars sorted by descending score
///
/// # Errors
/// - 400 Bad Request: malformed JSON or image is not valid base64
/// - 413 Payload Too Large: body exceeds the configured limit
pub async fn labels_handler(
    State(state): State<AppState>,
    payload: Result<Json<LabelsRequest>, JsonRejection>,
) -> Result<Json<LabelsResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected label request body: {}", rejection);
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge {
                limit: state.max_body_bytes,
            }
        } else {
            ApiError::InvalidRequest(rejection.body_text())
        }
    })?;

    debug!(
        "Label request received (image: {}, url: {})",
        request.image.is_some(),
        request.url.is_some()
    );

    let input = request.into_input().map_err(|e| {
        warn!("Label request validation failed: {}", e);
        e
    })?;

    let outcome = state.analyzer.analyze(&input).await;
    Ok(Json(LabelsResponse::from(outcome)))
}
