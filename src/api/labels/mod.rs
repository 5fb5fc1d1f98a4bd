// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Label API endpoint module
//!
//! Provides POST /v1/labels for labeling a base64 image or an image URL.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::labels_handler;
pub use request::LabelsRequest;
pub use response::{AnalysisStatus, LabelsResponse};
