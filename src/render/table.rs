// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tabular view of a label list

use serde::Serialize;

use crate::vision::Label;

pub const TABLE_COLUMNS: [&str; 2] = ["Label", "Score"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelRow {
    pub label: String,
    pub score: f32,
}

/// Two-column (Label, Score) table; rows keep API order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelTable {
    pub columns: [&'static str; 2],
    pub rows: Vec<LabelRow>,
}

impl LabelTable {
    pub fn from_labels(labels: &[Label]) -> Self {
        Self {
            columns: TABLE_COLUMNS,
            rows: labels
                .iter()
                .map(|l| LabelRow {
                    label: l.description.clone(),
                    score: l.score,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
