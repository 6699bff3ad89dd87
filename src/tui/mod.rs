//! Terminal UI: raw-mode setup, the match table and per-game views.

pub mod console;
pub mod games;
pub mod matches;
pub mod prompt;
pub mod table;

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::config::ParlorConfig;
use crate::lobby::LobbyController;
use crate::logging;
use crate::scores::ScoreStore;
use console::{Console, CrosstermKeys};
use table::Table;

/// Leaves raw mode and the alternate screen when dropped, also on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            error!(error = %e, "Failed to leave raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
            error!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs the interactive suite until the players quit.
///
/// Logs go to `config.log_file()` so they never draw over the screen.
#[instrument(skip(config))]
pub fn run(config: &ParlorConfig) -> anyhow::Result<()> {
    logging::init_file(config.log_file())?;
    info!(scores = %config.scores_dir().display(), "Starting parlor games");

    let _guard = TerminalGuard::enter()?;
    let mut terminal: Terminal<CrosstermBackend<Stdout>> =
        Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let console = Console::new(terminal, Box::new(CrosstermKeys));
    let table = Table::new(console, config).shared();
    let mut lobby = LobbyController::new(table, ScoreStore::new(config.scores_dir()));
    lobby.run()?;

    info!("Parlor games closed");
    Ok(())
}
