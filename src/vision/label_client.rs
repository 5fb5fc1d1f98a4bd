// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client for the remote image-labeling API

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use super::credentials::{CredentialsError, TokenSource, VisionAuth};
use super::types::{ImageContent, Label};

pub const DEFAULT_VISION_ENDPOINT: &str = "https://vision.googleapis.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw answer from the labeling API for a single image
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelResponse {
    /// Error reported by the API for this image (empty if none)
    pub error_message: String,
    /// Labels in API order
    pub labels: Vec<Label>,
}

/// Failures reaching the labeling API (as opposed to errors it reports)
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),
}

/// Anything that can assign labels to an image
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LabelDetector: Send + Sync {
    /// Submit image bytes and return the API's answer
    async fn detect_labels(&self, content: &ImageContent) -> Result<LabelResponse, LabelError>;

    /// Name used in logs
    fn name(&self) -> &'static str {
        "label-detector"
    }
}

// --- images:annotate serde structs ---

#[derive(serde::Serialize)]
struct AnnotateRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(serde::Serialize)]
struct AnnotateImageRequest {
    image: ImagePayload,
    features: Vec<Feature>,
}

#[derive(serde::Serialize)]
struct ImagePayload {
    content: String,
}

#[derive(serde::Serialize)]
struct Feature {
    #[serde(rename = "type")]
    feature_type: &'static str,
}

#[derive(serde::Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    label_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    error: Option<RpcStatus>,
}

#[derive(serde::Deserialize)]
struct EntityAnnotation {
    #[serde(default)]
    description: String,
    #[serde(default)]
    score: f32,
}

#[derive(serde::Deserialize)]
struct RpcStatus {
    #[serde(default)]
    message: String,
}

#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: RpcStatus,
}

enum Auth {
    ApiKey(String),
    Bearer(TokenSource),
}

/// Google Cloud Vision `images:annotate` client (LABEL_DETECTION)
pub struct GoogleVisionClient {
    client: Client,
    endpoint: String,
    auth: Auth,
}

impl GoogleVisionClient {
    /// Create a new client
    ///
    /// Built once at startup and shared; it holds no per-request state
    /// besides the cached bearer token.
    pub fn new(endpoint: &str, auth: VisionAuth) -> Result<Self, LabelError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LabelError::Request(e.to_string()))?;

        let auth = match auth {
            VisionAuth::ApiKey(key) => Auth::ApiKey(key),
            VisionAuth::ServiceAccount(key) => {
                let tokens = TokenSource::new(key, client.clone())?;
                debug!("Using service account {}", tokens.client_email());
                Auth::Bearer(tokens)
            }
        };

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!("Vision client configured: endpoint={}", endpoint);

        Ok(Self {
            client,
            endpoint,
            auth,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request(content: &ImageContent) -> AnnotateRequest {
        AnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: ImagePayload {
                    content: STANDARD.encode(content.as_bytes()),
                },
                features: vec![Feature {
                    feature_type: "LABEL_DETECTION",
                }],
            }],
        }
    }

    fn parse_response(response: AnnotateResponse) -> Result<LabelResponse, LabelError> {
        let first = response
            .responses
            .into_iter()
            .next()
            .ok_or_else(|| LabelError::InvalidResponse("no responses in batch".to_string()))?;

        Ok(LabelResponse {
            error_message: first.error.map(|e| e.message).unwrap_or_default(),
            labels: first
                .label_annotations
                .into_iter()
                .map(|a| Label::new(a.description, a.score))
                .collect(),
        })
    }
}

#[async_trait]
impl LabelDetector for GoogleVisionClient {
    async fn detect_labels(&self, content: &ImageContent) -> Result<LabelResponse, LabelError> {
        let url = format!("{}/v1/images:annotate", self.endpoint);
        let mut request = self.client.post(&url).json(&Self::build_request(content));

        request = match &self.auth {
            Auth::ApiKey(key) => request.query(&[("key", key)]),
            Auth::Bearer(tokens) => request.bearer_auth(tokens.access_token().await?),
        };

        debug!("Submitting {} bytes for label detection", content.len());

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                LabelError::Timeout(REQUEST_TIMEOUT)
            } else {
                LabelError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(LabelError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let data: AnnotateResponse = response
            .json()
            .await
            .map_err(|e| LabelError::InvalidResponse(format!("JSON parse error: {}", e)))?;

        Self::parse_response(data)
    }

    fn name(&self) -> &'static str {
        "google-vision"
    }
}
