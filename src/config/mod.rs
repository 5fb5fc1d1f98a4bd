// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration loaded from environment variables

use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::acquire::DEFAULT_FETCH_TIMEOUT;
use crate::api::http_server::MAX_BODY_BYTES;
use crate::vision::credentials::{CredentialsError, ServiceAccountKey, VisionAuth};
use crate::vision::image_utils::DEFAULT_MAX_DIMENSION;
use crate::vision::label_cache::{DEFAULT_LABEL_CACHE_ENTRIES, DEFAULT_LABEL_CACHE_TTL_SECS};
use crate::vision::label_client::DEFAULT_VISION_ENDPOINT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {message}")]
    Invalid { field: &'static str, message: String },

    #[error(transparent)]
    Credentials(#[from] CredentialsError),
}

/// Configuration for the labeling node
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// Base URL of the label API
    pub vision_endpoint: String,
    /// API key (used when no service account is configured)
    pub api_key: Option<String>,
    /// Inline service-account JSON
    pub credentials_json: Option<String>,
    /// Path to a service-account JSON file
    pub credentials_file: Option<PathBuf>,
    /// Label memoization TTL in seconds
    pub cache_ttl_secs: u64,
    /// Maximum memoized results
    pub cache_max_entries: usize,
    /// URL fetch timeout in seconds
    pub fetch_timeout_secs: u64,
    /// Uploads are shrunk to fit this many pixels per side
    pub max_image_dimension: u32,
    /// Request body limit for the page form and the JSON endpoint
    pub max_body_bytes: usize,
}

impl NodeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            listen_addr: non_empty("API_PORT")
                .map(|port| format!("0.0.0.0:{}", port.trim()))
                .unwrap_or(defaults.listen_addr),
            vision_endpoint: non_empty("VISION_API_ENDPOINT").unwrap_or(defaults.vision_endpoint),
            api_key: non_empty("GOOGLE_API_KEY"),
            credentials_json: non_empty("GOOGLE_CREDENTIALS"),
            credentials_file: non_empty("GOOGLE_CREDENTIALS_FILE").map(PathBuf::from),
            cache_ttl_secs: non_empty("LABEL_CACHE_TTL_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.cache_ttl_secs),
            cache_max_entries: non_empty("LABEL_CACHE_MAX_ENTRIES")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.cache_max_entries),
            fetch_timeout_secs: non_empty("URL_FETCH_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.fetch_timeout_secs),
            max_image_dimension: non_empty("MAX_IMAGE_DIMENSION")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_image_dimension),
            max_body_bytes: non_empty("MAX_BODY_BYTES")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_body_bytes),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "LABEL_CACHE_TTL_SECS",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.cache_max_entries == 0 {
            return Err(ConfigError::Invalid {
                field: "LABEL_CACHE_MAX_ENTRIES",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "URL_FETCH_TIMEOUT_SECS",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.max_image_dimension == 0 {
            return Err(ConfigError::Invalid {
                field: "MAX_IMAGE_DIMENSION",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::Invalid {
                field: "MAX_BODY_BYTES",
                message: "must be greater than 0".to_string(),
            });
        }
        if url::Url::parse(&self.vision_endpoint).is_err() {
            return Err(ConfigError::Invalid {
                field: "VISION_API_ENDPOINT",
                message: format!("'{}' is not a valid URL", self.vision_endpoint),
            });
        }
        if !self.has_credentials() {
            return Err(CredentialsError::Missing.into());
        }
        Ok(())
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials_json.is_some() || self.credentials_file.is_some() || self.api_key.is_some()
    }

    /// Resolve credentials: inline JSON, then file, then API key
    pub fn vision_auth(&self) -> Result<VisionAuth, ConfigError> {
        if let Some(raw) = &self.credentials_json {
            return Ok(VisionAuth::ServiceAccount(ServiceAccountKey::from_json(raw)?));
        }
        if let Some(path) = &self.credentials_file {
            return Ok(VisionAuth::ServiceAccount(ServiceAccountKey::from_file(path)?));
        }
        if let Some(key) = &self.api_key {
            return Ok(VisionAuth::ApiKey(key.clone()));
        }
        Err(CredentialsError::Missing.into())
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            vision_endpoint: DEFAULT_VISION_ENDPOINT.to_string(),
            api_key: None,
            credentials_json: None,
            credentials_file: None,
            cache_ttl_secs: DEFAULT_LABEL_CACHE_TTL_SECS,
            cache_max_entries: DEFAULT_LABEL_CACHE_ENTRIES,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT.as_secs(),
            max_image_dimension: DEFAULT_MAX_DIMENSION,
            max_body_bytes: MAX_BODY_BYTES,
        }
    }
}
