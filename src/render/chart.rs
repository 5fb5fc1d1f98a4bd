// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Horizontal bar chart of label scores

use serde::Serialize;
use std::fmt::Write as _;

use crate::vision::Label;

const CHART_WIDTH: u32 = 640;
const LABEL_GUTTER: u32 = 180;
const VALUE_GUTTER: u32 = 56;
const BAR_HEIGHT: u32 = 22;
const BAR_GAP: u32 = 8;
const AXIS_HEIGHT: u32 = 28;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub category: String,
    pub value: f32,
}

/// Score on the value axis, label on the category axis, categories sorted
/// by descending score
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChart {
    pub value_axis: &'static str,
    pub category_axis: &'static str,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn from_labels(labels: &[Label]) -> Self {
        let mut bars: Vec<Bar> = labels
            .iter()
            .map(|l| Bar {
                category: l.description.clone(),
                value: l.score,
            })
            .collect();

        // Stable: equal scores keep API order
        bars.sort_by(|a, b| b.value.total_cmp(&a.value));

        Self {
            value_axis: "Score",
            category_axis: "Label",
            bars,
        }
    }

    /// Category order as drawn, top to bottom
    pub fn categories(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.category.as_str()).collect()
    }

    /// Render as an inline SVG element
    pub fn to_svg(&self) -> String {
        let plot_width = CHART_WIDTH - LABEL_GUTTER - VALUE_GUTTER;
        let rows = self.bars.len() as u32;
        let height = rows * (BAR_HEIGHT + BAR_GAP) + AXIS_HEIGHT;

        // Scores live in [0, 1]; stretch only if the API ever exceeds that
        let max_value = self
            .bars
            .iter()
            .map(|b| b.value)
            .fold(1.0f32, f32::max);

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg class="bar-chart" xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="{axis} by {cat}">"#,
            w = CHART_WIDTH,
            h = height,
            axis = self.value_axis,
            cat = self.category_axis,
        );

        for (i, bar) in self.bars.iter().enumerate() {
            let y = i as u32 * (BAR_HEIGHT + BAR_GAP);
            let value = bar.value.max(0.0);
            let width = ((value / max_value) * plot_width as f32).round() as u32;
            let label = ammonia::clean_text(&bar.category);

            let _ = write!(
                svg,
                r#"<g class="bar"><text x="{tx}" y="{ty}" text-anchor="end">{label}</text><rect x="{x}" y="{y}" width="{width}" height="{bh}"></rect><text x="{vx}" y="{ty}">{value:.3}</text></g>"#,
                tx = LABEL_GUTTER - 8,
                ty = y + BAR_HEIGHT / 2 + 5,
                x = LABEL_GUTTER,
                bh = BAR_HEIGHT,
                vx = LABEL_GUTTER + width + 6,
                value = bar.value,
            );
        }

        let axis_y = rows * (BAR_HEIGHT + BAR_GAP);
        let _ = write!(
            svg,
            r#"<line class="axis" x1="{x}" y1="{y}" x2="{x2}" y2="{y}"></line><text class="axis-title" x="{tx}" y="{ty}" text-anchor="middle">{title}</text></svg>"#,
            x = LABEL_GUTTER,
            x2 = LABEL_GUTTER + plot_width,
            y = axis_y,
            tx = LABEL_GUTTER + plot_width / 2,
            ty = axis_y + AXIS_HEIGHT - 8,
            title = self.value_axis,
        );

        svg
    }
}
