//! vspc-exporter - Prometheus exporter for vmware-vspc TCP statistics

#![allow(missing_docs)]

use clap::Parser;
use std::process::ExitCode;
use tracing::info;
use vspc_exporter::cli::Cli;
use vspc_exporter::utils::{LogLevel, init_logging};
use vspc_exporter::{ExporterApp, ExporterConfig, Result};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Cli::parse().into_config();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps the message readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ExporterConfig) -> Result<()> {
    let level: LogLevel = config.log_level.parse()?;
    init_logging(level)?;

    info!(
        version = vspc_exporter::VERSION,
        git_hash = vspc_exporter::build_info().git_hash,
        "Starting vmware-vspc exporter"
    );

    ExporterApp::new(config)?.run_until_shutdown().await
}
