//! dicom-fetch - DICOM metadata command line client
//!
//! Sends each storage path to the metadata backend and prints the returned
//! metadata as pretty JSON on stdout. Logs go to stderr.

mod app;
mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use dicomlink_http::HttpClientConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{app::run, cli::Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.base_url.as_deref() {
        Some(base_url) => HttpClientConfig::with_base_url(base_url),
        None => HttpClientConfig::from_env(),
    }
    .context("Invalid client configuration")?;

    info!(endpoint = %config.endpoint, "Using metadata backend");

    let service = dicomlink_http::api_service(config);

    run(&cli, &service, &mut std::io::stdout().lock()).await
}
