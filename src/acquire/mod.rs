// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Input acquisition
//!
//! Turns the user's input (an uploaded file or an image URL) into
//! [`ImageContent`]. The upload wins when both are present.

pub mod url_fetch;

use bytes::Bytes;
use std::time::Duration;
use tracing::{debug, warn};

use crate::vision::image_utils::{self, DEFAULT_MAX_DIMENSION};
use crate::vision::ImageContent;

pub use url_fetch::{FetchError, UrlFetcher, DEFAULT_FETCH_TIMEOUT};

/// Raw user input for one analysis
#[derive(Debug, Clone, Default)]
pub struct ImageInput {
    pub upload: Option<Bytes>,
    pub url: Option<String>,
}

impl ImageInput {
    pub fn from_upload(bytes: impl Into<Bytes>) -> Self {
        Self {
            upload: Some(bytes.into()),
            url: None,
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            upload: None,
            url: Some(url.into()),
        }
    }

    fn upload(&self) -> Option<&Bytes> {
        self.upload.as_ref().filter(|b| !b.is_empty())
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

/// Where acquired content came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Upload,
    Url,
}

impl ImageSource {
    pub fn caption(&self) -> &'static str {
        match self {
            ImageSource::Upload => "Uploaded image",
            ImageSource::Url => "Image from URL",
        }
    }
}

/// Result of acquiring input
#[derive(Debug, Clone, PartialEq)]
pub enum Acquisition {
    Content {
        content: ImageContent,
        source: ImageSource,
    },
    /// Input was given but could not be turned into content
    Warning(String),
    /// No input was given
    Empty,
}

pub struct Acquirer {
    fetcher: UrlFetcher,
    max_dimension: u32,
}

impl Acquirer {
    pub fn new(fetcher: UrlFetcher, max_dimension: u32) -> Self {
        Self {
            fetcher,
            max_dimension,
        }
    }

    /// Acquirer with the default 5s fetch timeout and 1024px bound
    pub fn with_defaults() -> Result<Self, FetchError> {
        Ok(Self::new(
            UrlFetcher::new(DEFAULT_FETCH_TIMEOUT)?,
            DEFAULT_MAX_DIMENSION,
        ))
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetcher.timeout()
    }

    pub async fn acquire(&self, input: &ImageInput) -> Acquisition {
        if let Some(upload) = input.upload() {
            return self.acquire_upload(upload);
        }

        match input.url() {
            Some(url) => self.acquire_url(url).await,
            None => Acquisition::Empty,
        }
    }

    fn acquire_upload(&self, upload: &Bytes) -> Acquisition {
        match image_utils::prepare_upload(upload, self.max_dimension) {
            Ok((jpeg, info)) => {
                debug!(
                    "Prepared upload: {}x{}, {} bytes (from {} bytes)",
                    info.width,
                    info.height,
                    info.size_bytes,
                    upload.len()
                );
                Acquisition::Content {
                    content: ImageContent::from(jpeg),
                    source: ImageSource::Upload,
                }
            }
            Err(e) => {
                warn!("Failed to prepare upload: {}", e);
                Acquisition::Warning(format!("Could not read the uploaded image: {}", e))
            }
        }
    }

    async fn acquire_url(&self, url: &str) -> Acquisition {
        match self.fetcher.fetch(url).await {
            Ok(bytes) => {
                debug!("Fetched {} bytes from URL", bytes.len());
                Acquisition::Content {
                    content: ImageContent::new(bytes),
                    source: ImageSource::Url,
                }
            }
            Err(FetchError::Status(status)) => {
                warn!("URL fetch returned HTTP {}", status);
                Acquisition::Warning(format!(
                    "Could not fetch an image from the URL (HTTP {}).",
                    status
                ))
            }
            Err(e) => {
                warn!("URL fetch failed: {}", e);
                Acquisition::Warning(format!("URL error: {}", e))
            }
        }
    }
}
