// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod http_server;
pub mod labels;
pub mod page;

pub use errors::{ApiError, ErrorResponse};
pub use http_server::{create_app, start_server, AppState};
pub use labels::{labels_handler, LabelsRequest, LabelsResponse};
pub use page::{analyze_form_handler, index_handler};
