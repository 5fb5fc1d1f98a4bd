// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Command-line flags for the node binary

use clap::Parser;
use std::path::PathBuf;

use crate::config::NodeConfig;

/// Image labeling node
#[derive(Parser, Debug)]
#[command(name = "vision-label-node")]
#[command(version)]
#[command(about = "Upload an image or give a URL, get its labels", long_about = None)]
pub struct Cli {
    /// Address to bind the HTTP server to (overrides API_PORT)
    #[arg(long, env = "LISTEN_ADDR")]
    pub listen_addr: Option<String>,

    /// Service-account JSON file (overrides GOOGLE_CREDENTIALS_FILE)
    #[arg(long)]
    pub credentials_file: Option<PathBuf>,

    /// Label API base URL (overrides VISION_API_ENDPOINT)
    #[arg(long)]
    pub vision_endpoint: Option<String>,
}

impl Cli {
    /// Apply flags on top of environment configuration
    pub fn apply(self, mut config: NodeConfig) -> NodeConfig {
        if let Some(addr) = self.listen_addr {
            config.listen_addr = addr;
        }
        if let Some(path) = self.credentials_file {
            config.credentials_json = None;
            config.credentials_file = Some(path);
        }
        if let Some(endpoint) = self.vision_endpoint {
            config.vision_endpoint = endpoint;
        }
        config
    }
}
