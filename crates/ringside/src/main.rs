//! Ringside — terminal client for the Ringside duel game.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ringside::app;
use ringside::cli::{Cli, Command};
use ringside::config::GameConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, dev } => {
            let config = load_config(&config)?;
            init_tui_tracing(config.log_file())?;
            app::run(config, dev).await
        }
        Command::Status { config } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .init();
            let config = load_config(&config)?;
            app::status(config).await
        }
    }
}

/// Loads the client configuration, falling back to defaults when the file
/// does not exist.
fn load_config(path: &Path) -> Result<GameConfig> {
    if path.exists() {
        Ok(GameConfig::from_file(path)?)
    } else {
        info!(path = %path.display(), "Config file not found, using defaults");
        Ok(GameConfig::default())
    }
}

/// Routes tracing output to a file while the TUI owns the terminal.
fn init_tui_tracing(log_file: &str) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
