// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! URL acquisition tests against a local image host
//!
//! - 200 responses are returned byte-for-byte (no re-encoding, no resizing)
//! - Non-200 responses and timeouts become warnings

use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use vision_label_node::acquire::{
    Acquirer, Acquisition, FetchError, ImageInput, ImageSource, UrlFetcher,
};

use crate::support::{png_bytes, spawn_image_host};

#[tokio::test]
async fn test_fetch_returns_body_unmodified() {
    // Larger than the upload bound: URL content is not resized
    let image = png_bytes(1500, 20);
    let host = spawn_image_host(image.clone()).await;
    let fetcher = UrlFetcher::new(Duration::from_secs(1)).unwrap();

    let bytes = assert_ok!(fetcher.fetch(&format!("http://{}/cat.png", host)).await);
    assert_eq!(bytes.as_ref(), image.as_slice());
}

#[tokio::test]
async fn test_fetch_404_is_status_error() {
    let host = spawn_image_host(png_bytes(2, 2)).await;
    let fetcher = UrlFetcher::new(Duration::from_secs(1)).unwrap();

    let err = assert_err!(fetcher.fetch(&format!("http://{}/missing.png", host)).await);
    assert!(matches!(err, FetchError::Status(404)));
}

#[tokio::test]
async fn test_fetch_times_out() {
    let host = spawn_image_host(png_bytes(2, 2)).await;
    let fetcher = UrlFetcher::new(Duration::from_millis(300)).unwrap();

    let result = fetcher.fetch(&format!("http://{}/slow.png", host)).await;
    assert!(matches!(result, Err(FetchError::Timeout(_))));
}

#[tokio::test]
async fn test_acquire_url_content() {
    let image = png_bytes(4, 4);
    let host = spawn_image_host(image.clone()).await;
    let acquirer = Acquirer::new(UrlFetcher::new(Duration::from_secs(1)).unwrap(), 1024);

    match acquirer
        .acquire(&ImageInput::from_url(format!("http://{}/cat.png", host)))
        .await
    {
        Acquisition::Content { content, source } => {
            assert_eq!(source, ImageSource::Url);
            assert_eq!(content.as_bytes(), image.as_slice());
        }
        other => panic!("expected content, got {:?}", other),
    }
}

#[tokio::test]
async fn test_acquire_url_404_warns() {
    let host = spawn_image_host(png_bytes(2, 2)).await;
    let acquirer = Acquirer::new(UrlFetcher::new(Duration::from_secs(1)).unwrap(), 1024);

    let result = acquirer
        .acquire(&ImageInput::from_url(format!("http://{}/missing.png", host)))
        .await;
    assert!(matches!(result, Acquisition::Warning(msg) if msg.contains("HTTP 404")));
}

#[tokio::test]
async fn test_acquire_url_timeout_warns() {
    let host = spawn_image_host(png_bytes(2, 2)).await;
    let acquirer = Acquirer::new(UrlFetcher::new(Duration::from_millis(300)).unwrap(), 1024);

    let result = acquirer
        .acquire(&ImageInput::from_url(format!("http://{}/slow.png", host)))
        .await;
    assert!(matches!(result, Acquisition::Warning(msg) if msg.starts_with("URL error:")));
}
