// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML page endpoints
//!
//! - GET / serves the empty page
//! - POST /analyze takes the multipart form and serves the rendered page

pub mod handler;

pub use handler::{analyze_form_handler, index_handler};
