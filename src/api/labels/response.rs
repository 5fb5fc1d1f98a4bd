// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Label response types

use serde::Serialize;

use crate::pipeline::AnalysisOutcome;
use crate::render::{BarChart, LabelTable, NoticeLevel, Rendered};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    /// Labels were found
    Ok,
    /// The API returned no labels
    Empty,
    /// The API reported an error
    Error,
    /// No content could be acquired
    Warning,
}

/// Response from image labeling
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelsResponse {
    pub status: AnalysisStatus,
    /// Notice text for non-ok statuses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Warning raised while acquiring input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<LabelTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<BarChart>,
}

impl From<AnalysisOutcome> for LabelsResponse {
    fn from(outcome: AnalysisOutcome) -> Self {
        let input_warning = outcome.input_warning;
        match outcome.rendered {
            Rendered::Table { table, chart } => Self {
                status: AnalysisStatus::Ok,
                message: None,
                input_warning,
                table: Some(table),
                chart: Some(chart),
            },
            Rendered::Notice { level, message } => Self {
                status: match level {
                    NoticeLevel::Error => AnalysisStatus::Error,
                    NoticeLevel::Warning => AnalysisStatus::Warning,
                    NoticeLevel::Info => AnalysisStatus::Empty,
                },
                message: Some(message),
                input_warning,
                table: None,
                chart: None,
            },
        }
    }
}
