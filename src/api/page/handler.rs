// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page handlers

use axum::{extract::State, http::StatusCode, response::Html};
use axum_extra::extract::{multipart::MultipartError, Multipart};
use tracing::{debug, warn};

use crate::acquire::ImageInput;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::render::{render_page, PageView, Rendered};

/// GET / - the page with input controls and no results
pub async fn index_handler() -> Html<String> {
    Html(render_page(&PageView::default()))
}

/// POST /analyze - run the analysis for the submitted form
///
/// Form fields:
/// - `file`: uploaded image file (optional)
/// - `url`: image URL (optional)
pub async fn analyze_form_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let input = match read_form(multipart).await {
        Ok(input) => input,
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("Analyze form exceeded {} bytes", state.max_body_bytes);
            return Ok(Html(render_page(&too_large_view(state.max_body_bytes))));
        }
        Err(e) => {
            warn!("Failed to read multipart form: {}", e);
            return Err(ApiError::InvalidRequest(format!(
                "invalid form data: {}",
                e.body_text()
            )));
        }
    };
    debug!(
        "Analyze form submitted (file: {}, url: {})",
        input.upload.is_some(),
        input.url.is_some()
    );

    let outcome = state.analyzer.analyze(&input).await;

    let view = PageView {
        url: input.url,
        preview: outcome.preview,
        input_warning: outcome.input_warning,
        rendered: Some(outcome.rendered),
    };

    Ok(Html(render_page(&view)))
}

/// Page for a form whose body was cut off at the size limit
fn too_large_view(limit: usize) -> PageView {
    PageView {
        input_warning: Some(format!(
            "The uploaded file is too large (limit {} MiB).",
            limit / (1024 * 1024)
        )),
        rendered: Some(Rendered::missing_content()),
        ..Default::default()
    }
}

async fn read_form(mut multipart: Multipart) -> Result<ImageInput, MultipartError> {
    let mut input = ImageInput::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    input.upload = Some(bytes);
                }
            }
            "url" => {
                let url = field.text().await?;
                if !url.trim().is_empty() {
                    input.url = Some(url.trim().to_string());
                }
            }
            other => debug!("Ignoring form field '{}'", other),
        }
    }

    Ok(input)
}
