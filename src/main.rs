//! Standalone probe server.
//!
//! Serves the healthy and ready endpoints for a component and walks them
//! through the process lifecycle:
//!
//! ```text
//!   start ──▶ healthy ──▶ ready ──▶ SIGTERM ──▶ not ready ──▶ drain ──▶ exit
//!                                                 │
//!   GET /-/ready:   503        200                503
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use prober::config::{load_config, ProberConfig};
use prober::lifecycle::{signals, startup};
use prober::observability::init_logging;
use prober::Prober;

#[derive(Parser)]
#[command(name = "prober")]
#[command(about = "Expose healthy/ready probe endpoints for a component", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProberConfig::default(),
    };

    init_logging(&config.observability)?;

    tracing::info!(
        component = %config.component,
        bind_address = %config.listener.bind_address,
        healthy_path = %config.probes.healthy_path,
        ready_path = %config.probes.ready_path,
        "Configuration loaded"
    );

    let recorder = startup::metrics_recorder(&config.observability)?;
    let prober = Arc::new(Prober::new(&config.component, recorder));

    startup::run(&config, prober, signals::wait_for_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
