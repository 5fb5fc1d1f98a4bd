// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Label service orchestration
//!
//! Combines a label detector with the content-keyed TTL cache so repeated
//! submissions of the same image within the TTL reuse the earlier result.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::label_cache::LabelCache;
use super::label_client::LabelDetector;
use super::types::{ImageContent, LabelResult};

pub struct LabelService {
    detector: Arc<dyn LabelDetector>,
    cache: LabelCache,
}

impl LabelService {
    pub fn new(detector: Arc<dyn LabelDetector>, cache: LabelCache) -> Self {
        Self { detector, cache }
    }

    pub fn cache(&self) -> &LabelCache {
        &self.cache
    }

    /// Label an image
    ///
    /// Results produced by the API (labels, possibly empty, or an error it
    /// reported) are memoized. Failures to reach the API are returned as an
    /// error result but not memoized.
    pub async fn analyze(&self, content: &ImageContent) -> LabelResult {
        if let Some(result) = self.cache.get(content) {
            debug!(
                "Label cache hit for {} ({} bytes)",
                content.fingerprint(),
                content.len()
            );
            return result;
        }

        debug!(
            "Label cache miss for {} ({} bytes)",
            content.fingerprint(),
            content.len()
        );
        let start = Instant::now();

        match self.detector.detect_labels(content).await {
            Ok(response) => {
                let result = if response.error_message.is_empty() {
                    info!(
                        "Label detection complete: {} labels from {} in {}ms",
                        response.labels.len(),
                        self.detector.name(),
                        start.elapsed().as_millis()
                    );
                    LabelResult::Labels(response.labels)
                } else {
                    warn!("Label API reported an error: {}", response.error_message);
                    LabelResult::ApiError(response.error_message)
                };

                self.cache.insert(content, &result);
                result
            }
            Err(e) => {
                warn!("Label detection via {} failed: {}", self.detector.name(), e);
                LabelResult::ApiError(e.to_string())
            }
        }
    }
}
