// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image labeling
//!
//! This module provides:
//! - Upload decoding, downscaling and JPEG re-encoding
//! - The remote label API client and its credentials
//! - Content-keyed TTL memoization of label results

pub mod credentials;
pub mod image_utils;
pub mod label_cache;
pub mod label_client;
pub mod label_service;
pub mod types;

pub use credentials::{CredentialsError, ServiceAccountKey, TokenSource, VisionAuth};
pub use image_utils::{decode_image_bytes, detect_format, prepare_upload, ImageError, ImageInfo};
pub use label_cache::{CacheStats, LabelCache};
pub use label_client::{GoogleVisionClient, LabelDetector, LabelError, LabelResponse};
pub use label_service::LabelService;
pub use types::{ImageContent, Label, LabelResult};
