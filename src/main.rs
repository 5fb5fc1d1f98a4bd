// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use std::{env, net::SocketAddr, sync::Arc, time::Duration};
use tracing::info;
use vision_label_node::{
    acquire::{Acquirer, UrlFetcher},
    api::{start_server, AppState},
    cli::Cli,
    config::NodeConfig,
    pipeline::Analyzer,
    version,
    vision::{GoogleVisionClient, LabelCache, LabelService},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = cli.apply(NodeConfig::from_env());
    config.validate().context("invalid configuration")?;

    info!("Starting {}", version::get_version_info());

    // Credentials are loaded once; the client is shared by every request
    let auth = config.vision_auth().context("failed to load credentials")?;
    let detector = GoogleVisionClient::new(&config.vision_endpoint, auth)
        .context("failed to create vision client")?;
    info!("Vision client initialized");

    let labels = LabelService::new(
        Arc::new(detector),
        LabelCache::new(
            Duration::from_secs(config.cache_ttl_secs),
            config.cache_max_entries,
        ),
    );
    let fetcher = UrlFetcher::new(Duration::from_secs(config.fetch_timeout_secs))
        .context("failed to create URL fetcher")?;
    let acquirer = Acquirer::new(fetcher, config.max_image_dimension);

    let state =
        AppState::new(Analyzer::new(acquirer, labels)).with_body_limit(config.max_body_bytes);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen address '{}'", config.listen_addr))?;

    info!("Page:      http://{}/", addr);
    info!("Label API: POST http://{}/v1/labels", addr);

    start_server(addr, state).await?;

    info!("Goodbye");
    Ok(())
}
