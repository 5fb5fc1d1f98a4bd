// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! End-to-end analyze flow with a real URL fetch and a counting detector

use vision_label_node::acquire::ImageInput;
use vision_label_node::render::{NoticeLevel, MISSING_CONTENT_MESSAGE, NO_LABELS_MESSAGE};
use vision_label_node::vision::Label;

use crate::support::{analyzer_with, png_bytes, spawn_image_host, CountingDetector};

#[tokio::test]
async fn test_url_labels_rendered_in_order() {
    let host = spawn_image_host(png_bytes(16, 16)).await;
    let detector = CountingDetector::with_labels(vec![
        Label::new("dog", 0.5),
        Label::new("cat", 0.9),
        Label::new("pet", 0.7),
    ]);
    let analyzer = analyzer_with(detector.clone());

    let outcome = analyzer
        .analyze(&ImageInput::from_url(format!("http://{}/cat.png", host)))
        .await;

    let preview = outcome.preview.expect("preview");
    assert_eq!(preview.caption, "Image from URL");
    assert!(preview.data_url.starts_with("data:image/png;base64,"));
    assert!(outcome.input_warning.is_none());

    let table = outcome.rendered.table().expect("table");
    let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["dog", "cat", "pet"]);

    let chart = outcome.rendered.chart().expect("chart");
    assert_eq!(chart.categories(), vec!["cat", "pet", "dog"]);
    assert_eq!(detector.calls(), 1);
}

#[tokio::test]
async fn test_same_url_labeled_once() {
    let host = spawn_image_host(png_bytes(16, 16)).await;
    let detector = CountingDetector::with_labels(vec![Label::new("cat", 0.9)]);
    let analyzer = analyzer_with(detector.clone());
    let input = ImageInput::from_url(format!("http://{}/cat.png", host));

    let first = analyzer.analyze(&input).await;
    let second = analyzer.analyze(&input).await;

    assert_eq!(first.rendered, second.rendered);
    assert_eq!(detector.calls(), 1);
}

#[tokio::test]
async fn test_url_404_never_reaches_detector() {
    let host = spawn_image_host(png_bytes(4, 4)).await;
    let detector = CountingDetector::with_labels(vec![Label::new("cat", 0.9)]);
    let analyzer = analyzer_with(detector.clone());

    let outcome = analyzer
        .analyze(&ImageInput::from_url(format!("http://{}/missing.png", host)))
        .await;

    assert!(outcome.preview.is_none());
    assert!(outcome.input_warning.unwrap().contains("HTTP 404"));
    assert_eq!(
        outcome.rendered.notice(),
        Some((NoticeLevel::Warning, MISSING_CONTENT_MESSAGE))
    );
    assert_eq!(detector.calls(), 0);
}

#[tokio::test]
async fn test_url_timeout_never_reaches_detector() {
    let host = spawn_image_host(png_bytes(4, 4)).await;
    let detector = CountingDetector::with_labels(vec![Label::new("cat", 0.9)]);
    let analyzer = analyzer_with(detector.clone());

    let outcome = analyzer
        .analyze(&ImageInput::from_url(format!("http://{}/slow.png", host)))
        .await;

    assert!(outcome.input_warning.unwrap().starts_with("URL error:"));
    assert_eq!(detector.calls(), 0);
}

#[tokio::test]
async fn test_upload_wins_over_url() {
    let host = spawn_image_host(png_bytes(4, 4)).await;
    let detector = CountingDetector::with_labels(vec![Label::new("cat", 0.9)]);
    let analyzer = analyzer_with(detector.clone());

    let input = ImageInput {
        upload: Some(png_bytes(8, 8).into()),
        // Would produce a warning if it were used
        url: Some(format!("http://{}/missing.png", host)),
    };
    let outcome = analyzer.analyze(&input).await;

    assert_eq!(outcome.preview.unwrap().caption, "Uploaded image");
    assert!(outcome.input_warning.is_none());
    assert!(outcome.rendered.table().is_some());
    assert_eq!(detector.calls(), 1);
}

#[tokio::test]
async fn test_api_error_shown_without_table() {
    let detector = CountingDetector::with_error("Bad image data.");
    let analyzer = analyzer_with(detector.clone());

    let outcome = analyzer
        .analyze(&ImageInput::from_upload(png_bytes(8, 8)))
        .await;

    assert_eq!(
        outcome.rendered.notice(),
        Some((NoticeLevel::Error, "API error: Bad image data."))
    );
    assert!(outcome.rendered.table().is_none());
    assert!(outcome.rendered.chart().is_none());
}

#[tokio::test]
async fn test_empty_labels_shown_as_info() {
    let detector = CountingDetector::with_labels(vec![]);
    let analyzer = analyzer_with(detector.clone());

    let outcome = analyzer
        .analyze(&ImageInput::from_upload(png_bytes(8, 8)))
        .await;

    assert_eq!(
        outcome.rendered.notice(),
        Some((NoticeLevel::Info, NO_LABELS_MESSAGE))
    );
}

#[tokio::test]
async fn test_no_input_is_missing_content() {
    let detector = CountingDetector::with_labels(vec![Label::new("cat", 0.9)]);
    let analyzer = analyzer_with(detector.clone());

    let outcome = analyzer.analyze(&ImageInput::default()).await;

    assert!(outcome.input_warning.is_none());
    assert_eq!(
        outcome.rendered.notice(),
        Some((NoticeLevel::Warning, MISSING_CONTENT_MESSAGE))
    );
    assert_eq!(detector.calls(), 0);
}
