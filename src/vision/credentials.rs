// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Credentials for the label API
//!
//! Supports two schemes:
//! - A plain API key appended to each request
//! - A service-account key, exchanged for short-lived bearer tokens using a
//!   signed JWT assertion (RS256)

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};
use tracing::{debug, info};

/// OAuth scope required by the label API
pub const VISION_SCOPE: &str = "https://www.googleapis.com/auth/cloud-vision";

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime accepted by the token endpoint
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Tokens are refreshed this long before they expire
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("No credentials configured")]
    Missing,

    #[error("Failed to read credentials file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid service account JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid service account private key: {0}")]
    InvalidKey(String),

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// Service-account credential blob
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl ServiceAccountKey {
    /// Parse a credential blob
    ///
    /// Raw control characters inside string values (typically literal
    /// newlines in `private_key` after a round trip through a secret store)
    /// are accepted and escaped before parsing.
    pub fn from_json(raw: &str) -> Result<Self, CredentialsError> {
        match serde_json::from_str(raw) {
            Ok(key) => Ok(key),
            Err(_) => serde_json::from_str(&escape_control_chars_in_strings(raw))
                .map_err(|e| CredentialsError::InvalidJson(e.to_string())),
        }
    }

    /// Read and parse a credential file
    pub fn from_file(path: &Path) -> Result<Self, CredentialsError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CredentialsError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&raw)
    }
}

/// Escape raw control characters that appear inside JSON string literals
fn escape_control_chars_in_strings(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in raw.chars() {
        if in_string {
            if escaped {
                escaped = false;
                out.push(c);
                continue;
            }
            match c {
                '\\' => {
                    escaped = true;
                    out.push(c);
                }
                '"' => {
                    in_string = false;
                    out.push(c);
                }
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
                c => out.push(c),
            }
        } else {
            if c == '"' {
                in_string = true;
            }
            out.push(c);
        }
    }

    out
}

/// How requests to the label API are authenticated
#[derive(Debug, Clone)]
pub enum VisionAuth {
    ApiKey(String),
    ServiceAccount(ServiceAccountKey),
}

#[derive(Debug, Serialize, Deserialize)]
struct AssertionClaims {
    iss: String,
    scope: String,
    aud: String,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Exchanges a service-account key for bearer tokens and reuses them until
/// shortly before they expire
pub struct TokenSource {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    client: Client,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenSource {
    pub fn new(key: ServiceAccountKey, client: Client) -> Result<Self, CredentialsError> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| CredentialsError::InvalidKey(e.to_string()))?;

        info!(
            "Service account credentials loaded: {} (project: {})",
            key.client_email,
            key.project_id.as_deref().unwrap_or("unknown")
        );

        Ok(Self {
            key,
            encoding_key,
            client,
            cached: Mutex::new(None),
        })
    }

    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    /// Build the signed assertion sent to the token endpoint
    fn build_assertion(&self, now: i64) -> Result<String, CredentialsError> {
        let claims = AssertionClaims {
            iss: self.key.client_email.clone(),
            scope: VISION_SCOPE.to_string(),
            aud: self.key.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();

        jsonwebtoken::encode(&header, &claims, &self.encoding_key)
            .map_err(|e| CredentialsError::InvalidKey(e.to_string()))
    }

    /// Get a valid bearer token, exchanging a new assertion when needed
    pub async fn access_token(&self) -> Result<String, CredentialsError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if Instant::now() + TOKEN_REFRESH_MARGIN < token.expires_at {
                return Ok(token.token.clone());
            }
        }

        debug!("Exchanging service account assertion at {}", self.key.token_uri);
        let assertion = self.build_assertion(chrono::Utc::now().timestamp())?;

        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| CredentialsError::TokenExchange(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CredentialsError::TokenExchange(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CredentialsError::TokenExchange(format!("JSON parse error: {}", e)))?;

        let access_token = token.access_token.clone();
        *cached = Some(CachedToken {
            token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        });

        Ok(access_token)
    }
}
