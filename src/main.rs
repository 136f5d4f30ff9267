//! las-report - Well log report server
//!
//! Loads one LAS file, lays it out as a paginated report (well metadata
//! tables followed by overlaid curve charts) and serves it over HTTP.
//!
//! # Usage
//!
//! ```bash
//! las-report path/to/well.las
//! las-report path/to/well.las --addr 0.0.0.0:8050 --debug
//! las-report path/to/well.las --config las_report.toml
//! ```
//!
//! # Environment Variables
//!
//! - `LAS_REPORT_CONFIG`: Path to a TOML config file
//! - `LAS_REPORT_CORS_ORIGINS`: Comma-separated origins allowed to call the API
//! - `RUST_LOG`: Logging level (default: info, or debug with `--debug`)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use las_report::api::{create_app, ReportState};
use las_report::config::ReportConfig;
use las_report::curves::resolve;
use las_report::las;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "las-report")]
#[command(about = "Paginated report server for LAS well-log files")]
#[command(version)]
struct CliArgs {
    /// LAS file to report on
    lasfile: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    debug: bool,

    /// Override the server address (default: "127.0.0.1:8050")
    #[arg(short, long, value_name = "HOST:PORT")]
    addr: Option<String>,

    /// Config file, taking precedence over LAS_REPORT_CONFIG and ./las_report.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ============================================================================
// Startup
// ============================================================================

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

fn load_config(args: &CliArgs) -> Result<ReportConfig> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::load(),
    };

    if let Some(addr) = &args.addr {
        config.server.addr.clone_from(addr);
        config
            .validate()
            .with_context(|| format!("Invalid --addr '{addr}'"))?;
    }
    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.debug);

    let config = load_config(&args)?;

    // A LAS file that cannot be read is fatal: there is no partial report.
    let log = las::read_file(&args.lasfile)
        .with_context(|| format!("Failed to read LAS file {}", args.lasfile.display()))?;

    let charts = resolve(&log);
    if charts.is_empty() {
        warn!("No known curve mnemonics in this file; the report will only show well information");
    }

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  LAS Report");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  File:    {}", args.lasfile.display());
    info!(
        "  Version: {}",
        log.version_description().unwrap_or("unknown")
    );
    info!("  Well:    {} entries", log.well.len());
    info!(
        "  Charts:  {}",
        charts
            .iter()
            .map(|c| c.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let server_addr = config.server.addr.clone();
    let state = ReportState::new(log, config, &args.lasfile.to_string_lossy());
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind {server_addr}"))?;

    info!("Report available at: http://{}", server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}
