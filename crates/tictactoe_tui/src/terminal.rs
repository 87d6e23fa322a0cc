//! Raw-mode terminal setup and teardown.

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::error;

/// The terminal the app draws on.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen.
///
/// Also installs a panic hook that leaves both before the panic message is
/// printed, so a crash does not strand the shell in raw mode.
pub fn setup_terminal() -> Result<Tui> {
    install_panic_hook();
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leaves raw mode and the alternate screen.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Best effort: the panic is what gets reported.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

/// Merges the game loop result with the teardown result.
///
/// Neither error is dropped: a teardown failure after a loop failure is
/// logged and attached to the loop error as context.
pub fn finish(run: Result<()>, restore: Result<()>) -> Result<()> {
    match (run, restore) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(err), Ok(())) => {
            error!(error = ?err, "Game loop error");
            Err(err)
        }
        (Ok(()), Err(restore_err)) => {
            error!(error = ?restore_err, "Terminal restore failed");
            Err(restore_err)
        }
        (Err(err), Err(restore_err)) => {
            error!(error = ?err, restore_error = ?restore_err, "Game loop and terminal restore failed");
            Err(err.context(format!("terminal restore also failed: {:#}", restore_err)))
        }
    }
}
