//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use noughts::GameConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file; stdout belongs to the TUI.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let mut config = if cli.config.exists() {
        GameConfig::from_file(&cli.config)?
    } else {
        info!(path = %cli.config.display(), "No settings file, using defaults");
        GameConfig::default()
    };

    if let Some(seconds) = cli.turn_seconds {
        config.set_turn_seconds(seconds);
    }
    if let Some(theme) = cli.theme {
        config.set_theme(theme);
    }
    if let Some(path) = cli.history_path {
        config.set_history_path(path);
    }

    noughts::tui::run(config).await
}
