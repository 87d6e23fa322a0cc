//! Command-line interface.

use crate::theme::Theme;
use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe in the terminal, two players on one keyboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Theme at startup, overriding the config file
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Log file, overriding the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
