// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Result rendering
//!
//! Turns a [`LabelResult`] into what the user sees: a notice, or a label
//! table plus a bar chart.

pub mod chart;
pub mod html;
pub mod table;

use serde::Serialize;

use crate::vision::LabelResult;

pub use chart::{Bar, BarChart};
pub use html::{render_page, PageView};
pub use table::{LabelRow, LabelTable};

pub const NO_LABELS_MESSAGE: &str = "No labels were detected.";
pub const MISSING_CONTENT_MESSAGE: &str = "Upload an image or enter an image URL first.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Error,
    Warning,
    Info,
}

/// What the output region shows
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Notice { level: NoticeLevel, message: String },
    Table { table: LabelTable, chart: BarChart },
}

impl Rendered {
    pub fn warning(message: impl Into<String>) -> Self {
        Rendered::Notice {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    /// Shown when analysis is triggered without any content
    pub fn missing_content() -> Self {
        Self::warning(MISSING_CONTENT_MESSAGE)
    }

    pub fn notice(&self) -> Option<(NoticeLevel, &str)> {
        match self {
            Rendered::Notice { level, message } => Some((*level, message.as_str())),
            Rendered::Table { .. } => None,
        }
    }

    pub fn table(&self) -> Option<&LabelTable> {
        match self {
            Rendered::Table { table, .. } => Some(table),
            Rendered::Notice { .. } => None,
        }
    }

    pub fn chart(&self) -> Option<&BarChart> {
        match self {
            Rendered::Table { chart, .. } => Some(chart),
            Rendered::Notice { .. } => None,
        }
    }
}

/// Image shown next to the input controls
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub caption: String,
    pub data_url: String,
}

pub fn render(result: &LabelResult) -> Rendered {
    match result {
        LabelResult::ApiError(message) => Rendered::Notice {
            level: NoticeLevel::Error,
            message: format!("API error: {}", message),
        },
        LabelResult::Labels(labels) if labels.is_empty() => Rendered::Notice {
            level: NoticeLevel::Info,
            message: NO_LABELS_MESSAGE.to_string(),
        },
        LabelResult::Labels(labels) => Rendered::Table {
            table: LabelTable::from_labels(labels),
            chart: BarChart::from_labels(labels),
        },
    }
}
