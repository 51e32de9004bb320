//! Loan Predictor - Main Entry Point

use api::{init_logging, run_server, AppConfig, StartupError};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Serve loan approval predictions over a web form and a JSON endpoint
#[derive(Debug, Parser)]
#[command(name = "loan-predictor", version)]
struct Args {
    /// Configuration file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Classifier artifact (.onnx or .json), overrides model.path
    #[arg(short, long)]
    model: Option<PathBuf>,
    /// Bind address, overrides server.host
    #[arg(long)]
    host: Option<String>,
    /// Bind port, overrides server.port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(model) = args.model {
        config.model.path = model;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_logging(&config.telemetry)?;

    info!("=== Loan Predictor v{} ===", env!("CARGO_PKG_VERSION"));
    run_server(config).await
}
