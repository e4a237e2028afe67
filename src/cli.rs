//! Command-line interface for noughts.

use clap::Parser;
use noughts::ThemeName;
use std::path::PathBuf;

/// Noughts - terminal tic-tac-toe with minimax AI, turn timers, and
/// match history
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe with an unbeatable opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Seconds per turn before the turn is skipped (overrides the file)
    #[arg(long)]
    pub turn_seconds: Option<u64>,

    /// Color theme (overrides the file)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeName>,

    /// Where to persist the match-result log (overrides the file)
    #[arg(long)]
    pub history_path: Option<PathBuf>,

    /// Log file for diagnostics
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}
