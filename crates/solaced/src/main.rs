//! Solace Daemon - serves the support chat over HTTP
//!
//! Trains the corpus once at startup, then answers `/get` requests from the
//! shared read-only engine.

use anyhow::{Context, Result};
use clap::Parser;
use solace_shared::{DialogueEngine, SolaceConfig};
use solaced::server::{self, AppState, DEFAULT_BIND};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "solaced")]
#[command(about = "Solace - support chat daemon", long_about = None)]
#[command(version = solace_shared::VERSION)]
struct Cli {
    /// Config file (defaults to /etc/solace/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, default_value = DEFAULT_BIND)]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!("[BOOT] Solace Daemon v{} starting...", solace_shared::VERSION);

    let config = match &cli.config {
        Some(path) => SolaceConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SolaceConfig::load(),
    };

    // Training finishes here, before the listener is bound
    let engine = DialogueEngine::from_config(&config).context("Invalid configuration")?;
    info!("[BOOT] Engine trained");

    server::run(AppState::new(engine), &cli.bind).await
}
