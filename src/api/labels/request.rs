// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Label request types and validation

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::acquire::ImageInput;
use crate::api::errors::ApiError;

/// Request for image labels
///
/// Both fields are optional; a request with neither is answered with the
/// missing-content warning rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelsRequest {
    /// Base64-encoded image file (takes precedence over `url`)
    #[serde(default)]
    pub image: Option<String>,

    /// Image URL to fetch
    #[serde(default)]
    pub url: Option<String>,
}

impl LabelsRequest {
    /// Validate and convert into acquirer input
    pub fn into_input(self) -> Result<ImageInput, ApiError> {
        let upload = match self.image.as_deref().map(str::trim) {
            Some(image) if !image.is_empty() => {
                let bytes = STANDARD.decode(image).map_err(|e| ApiError::ValidationError {
                    field: "image".to_string(),
                    message: format!("image is not valid base64: {}", e),
                })?;
                Some(bytes.into())
            }
            _ => None,
        };

        Ok(ImageInput {
            upload,
            url: self.url,
        })
    }
}
