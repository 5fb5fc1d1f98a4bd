// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! The analyze flow: acquire → label → render
//!
//! Each call is independent. Nothing from a previous analysis is kept, so a
//! request without usable input always ends in the missing-content warning.

use tracing::{debug, info};

use crate::acquire::{Acquirer, Acquisition, ImageInput};
use crate::render::{render, Preview, Rendered};
use crate::vision::image_utils::to_data_url;
use crate::vision::LabelService;

/// Everything produced by one analysis
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub preview: Option<Preview>,
    /// Warning raised while acquiring input (shown with the input controls)
    pub input_warning: Option<String>,
    pub rendered: Rendered,
}

pub struct Analyzer {
    acquirer: Acquirer,
    labels: LabelService,
}

impl Analyzer {
    pub fn new(acquirer: Acquirer, labels: LabelService) -> Self {
        Self { acquirer, labels }
    }

    pub fn labels(&self) -> &LabelService {
        &self.labels
    }

    pub async fn analyze(&self, input: &ImageInput) -> AnalysisOutcome {
        match self.acquirer.acquire(input).await {
            Acquisition::Content { content, source } => {
                info!("Analyzing {} bytes ({:?})", content.len(), source);
                let preview = Preview {
                    caption: source.caption().to_string(),
                    data_url: to_data_url(content.as_bytes()),
                };
                let result = self.labels.analyze(&content).await;

                AnalysisOutcome {
                    preview: Some(preview),
                    input_warning: None,
                    rendered: render(&result),
                }
            }
            Acquisition::Warning(warning) => {
                debug!("No content acquired: {}", warning);
                AnalysisOutcome {
                    preview: None,
                    input_warning: Some(warning),
                    rendered: Rendered::missing_content(),
                }
            }
            Acquisition::Empty => AnalysisOutcome {
                preview: None,
                input_warning: None,
                rendered: Rendered::missing_content(),
            },
        }
    }
}
