// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types shared by the acquirer, label client and renderer

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Encoded image bytes ready to be submitted for labeling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageContent(Bytes);

impl ImageContent {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// SHA-256 digest of the exact bytes
    pub fn digest(&self) -> [u8; 32] {
        Sha256::digest(&self.0).into()
    }

    /// Short hex prefix of the digest, for logs
    pub fn fingerprint(&self) -> String {
        hex::encode(&self.digest()[..6])
    }
}

impl From<Vec<u8>> for ImageContent {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes::from(bytes))
    }
}

/// A textual tag assigned to an image, paired with a confidence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    /// Label text (e.g. "cat")
    pub description: String,
    /// Confidence score (0.0-1.0)
    pub score: f32,
}

impl Label {
    pub fn new(description: impl Into<String>, score: f32) -> Self {
        Self {
            description: description.into(),
            score,
        }
    }
}

/// Outcome of a single labeling request
#[derive(Debug, Clone, PartialEq)]
pub enum LabelResult {
    /// Labels in the order the API returned them (may be empty)
    Labels(Vec<Label>),
    /// Error message reported while labeling, surfaced verbatim
    ApiError(String),
}

impl LabelResult {
    pub fn is_error(&self) -> bool {
        matches!(self, LabelResult::ApiError(_))
    }
}
