//! Tic Tac Toe terminal UI.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tictactoe_tui::terminal::{self, Tui};
use tictactoe_tui::{App, Cli, TuiConfig, init_logging};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)
        .context("Failed to load configuration")?
        .with_theme(cli.theme)
        .with_log_file(cli.log_file);

    init_logging(config.log_file())?;
    info!(theme = %config.theme(), "Starting Tic Tac Toe");

    let mut tui = terminal::setup_terminal()?;
    let res = run(&mut tui, App::new(*config.theme()));
    let restored = terminal::restore_terminal(&mut tui);

    info!("Exiting");
    terminal::finish(res, restored)
}

/// Draws, waits for a key, repeats until the user quits.
#[instrument(skip_all)]
fn run(tui: &mut Tui, mut app: App) -> Result<()> {
    while !app.should_quit() {
        tui.draw(|f| tictactoe_tui::draw(f, &app))?;
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
