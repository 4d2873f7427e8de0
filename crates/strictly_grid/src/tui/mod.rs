//! Terminal UI for Strictly Grid

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Command, command_for, move_cursor};

use crate::config::GameConfig;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip(config))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!(size = %config.size(), opponent = *config.opponent(), "Starting Strictly Grid TUI");

    let mut app = App::new(config)?;

    enable_raw_mode()?;
    with_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
            run_loop(&mut terminal, &mut app)
        },
        restore_terminal,
    )
}

/// Runs `body`, then `restore` whether or not `body` failed.
///
/// An error from `body` wins over one from `restore`.
fn with_restore<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = body();
    let restored = restore();

    match (res, restored) {
        (Err(err), restored) => {
            error!(error = ?err, "Game loop error");
            if let Err(restore_err) = restored {
                error!(error = ?restore_err, "Terminal restore failed");
            }
            Err(err)
        }
        (Ok(value), restored) => restored.map(|()| value),
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            info!("User quit");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_when_setup_fails() {
        let restored = Cell::new(false);
        let res: Result<()> = with_restore(
            || Err(anyhow::anyhow!("no terminal")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(res.unwrap_err().to_string(), "no terminal");
    }

    #[test]
    fn test_body_error_wins_over_restore_error() {
        let res: Result<()> = with_restore(
            || Err(anyhow::anyhow!("loop failed")),
            || Err(anyhow::anyhow!("restore failed")),
        );
        assert_eq!(res.unwrap_err().to_string(), "loop failed");
    }

    #[test]
    fn test_restore_error_surfaces_after_clean_run() {
        let res = with_restore(|| Ok(7), || Err(anyhow::anyhow!("restore failed")));
        assert_eq!(res.unwrap_err().to_string(), "restore failed");
        assert_eq!(with_restore(|| Ok(7), || Ok(())).unwrap(), 7);
    }
}
