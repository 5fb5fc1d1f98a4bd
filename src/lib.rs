// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod acquire;
pub mod api;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod render;
pub mod version;
pub mod vision;

pub use acquire::{Acquirer, Acquisition, ImageInput, ImageSource, UrlFetcher};
pub use config::NodeConfig;
pub use pipeline::{AnalysisOutcome, Analyzer};
pub use render::{render, NoticeLevel, Rendered};
pub use vision::{GoogleVisionClient, ImageContent, Label, LabelResult, LabelService};
