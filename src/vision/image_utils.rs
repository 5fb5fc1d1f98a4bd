// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image loading, downscaling and re-encoding for uploaded files

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{
    codecs::jpeg::JpegEncoder, imageops::FilterType, DynamicImage, ImageFormat, ImageReader,
    Limits,
};
use std::io::Cursor;
use thiserror::Error;

/// Upper bound on decoder allocations (512 MiB)
///
/// Bounds decompression bombs; the encoded size itself is not limited.
pub const MAX_DECODE_ALLOC: u64 = 512 * 1024 * 1024;

/// Longest side accepted by the label API without downscaling
pub const DEFAULT_MAX_DIMENSION: u32 = 1024;

/// JPEG quality used when re-encoding uploads
const JPEG_QUALITY: u8 = 75;

/// Custom error types for image processing
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Unsupported image format")]
    UnsupportedFormat,

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("Failed to encode image: {0}")]
    EncodeFailed(String),

    #[error("Image data is empty")]
    EmptyData,
}

/// Image information extracted during loading
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Detected format
    pub format: ImageFormat,
    /// Size in bytes
    pub size_bytes: usize,
}

fn decode_limits() -> Limits {
    let mut limits = Limits::default();
    limits.max_alloc = Some(MAX_DECODE_ALLOC);
    limits
}

/// Decode raw image bytes (for multipart uploads)
///
/// Any encoded size is accepted; only the decoder's allocations are bounded.
pub fn decode_image_bytes(bytes: &[u8]) -> Result<(DynamicImage, ImageInfo), ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::EmptyData);
    }

    let format = detect_format(bytes)?;

    let mut reader = ImageReader::with_format(Cursor::new(bytes), format);
    reader.limits(decode_limits());
    let img = reader
        .decode()
        .map_err(|e| ImageError::DecodeFailed(e.to_string()))?;

    let info = ImageInfo {
        width: img.width(),
        height: img.height(),
        format,
        size_bytes: bytes.len(),
    };

    Ok((img, info))
}

/// Detect image format from magic bytes
pub fn detect_format(bytes: &[u8]) -> Result<ImageFormat, ImageError> {
    if bytes.len() < 4 {
        return Err(ImageError::UnsupportedFormat);
    }

    match bytes {
        // PNG: 89 50 4E 47 (0x89 P N G)
        [0x89, 0x50, 0x4E, 0x47, ..] => Ok(ImageFormat::Png),

        // JPEG: FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => Ok(ImageFormat::Jpeg),

        // WebP: RIFF .... WEBP
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Ok(ImageFormat::WebP),

        // GIF: GIF87a or GIF89a
        [0x47, 0x49, 0x46, 0x38, x, ..] if *x == 0x37 || *x == 0x39 => Ok(ImageFormat::Gif),

        // BMP: BM
        [0x42, 0x4D, ..] => Ok(ImageFormat::Bmp),

        // TIFF: II (little-endian) or MM (big-endian)
        [0x49, 0x49, 0x2A, 0x00, ..] | [0x4D, 0x4D, 0x00, 0x2A, ..] => Ok(ImageFormat::Tiff),

        _ => Err(ImageError::UnsupportedFormat),
    }
}

/// Dimensions after shrinking `width`x`height` to fit in a `max`x`max` box
///
/// Aspect ratio is preserved and images are never enlarged. The longer side
/// lands exactly on `max`; the shorter side is rounded and never below 1.
pub fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }

    let scale = |side: u32, long: u32| -> u32 {
        let scaled = (side as f64 * max as f64 / long as f64).round() as u32;
        scaled.clamp(1, max)
    };

    if width >= height {
        (max, scale(height, width))
    } else {
        (scale(width, height), max)
    }
}

/// Shrink an image so neither side exceeds `max` pixels
pub fn downscale_to_fit(img: DynamicImage, max: u32) -> DynamicImage {
    let (width, height) = fit_within(img.width(), img.height(), max);
    if (width, height) == (img.width(), img.height()) {
        return img;
    }
    img.resize_exact(width, height, FilterType::Triangle)
}

/// Encode an image as JPEG (alpha is dropped)
pub fn encode_jpeg(img: &DynamicImage) -> Result<Vec<u8>, ImageError> {
    let rgb = img.to_rgb8();
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| ImageError::EncodeFailed(e.to_string()))?;
    Ok(buf)
}

/// Decode an upload, shrink it to fit `max` and re-encode it as JPEG
///
/// Returns the JPEG bytes together with the info of the *output* image.
pub fn prepare_upload(bytes: &[u8], max: u32) -> Result<(Vec<u8>, ImageInfo), ImageError> {
    let (img, _) = decode_image_bytes(bytes)?;
    let img = downscale_to_fit(img, max);
    let jpeg = encode_jpeg(&img)?;

    let info = ImageInfo {
        width: img.width(),
        height: img.height(),
        format: ImageFormat::Jpeg,
        size_bytes: jpeg.len(),
    };

    Ok((jpeg, info))
}

/// Get the MIME type for a detected format
pub fn format_to_mime(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Gif => "image/gif",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::Tiff => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Build a `data:` URL for previewing raw image bytes
pub fn to_data_url(bytes: &[u8]) -> String {
    let mime = detect_format(bytes)
        .map(format_to_mime)
        .unwrap_or("application/octet-stream");
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
