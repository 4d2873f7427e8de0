//! Application state and logic.

use super::input::{Command, command_for};
use crate::config::{BoardSize, GameConfig};
use crossterm::event::KeyCode;
use strictly_tictactoe::{Action, Game, MoveError, Session, TracingObserver};
use tracing::{debug, instrument};

/// Main application state.
pub struct App {
    session: Session,
    cursor: usize,
    opponent: bool,
    message: Option<String>,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Result<Self, MoveError> {
        let mut session = Session::new(Game::new(config.size().get())?);
        session.subscribe(TracingObserver);
        Ok(Self {
            session,
            cursor: 0,
            opponent: *config.opponent(),
            message: None,
        })
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        self.session.game()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the opponent key is active.
    pub fn opponent_enabled(&self) -> bool {
        self.opponent
    }

    /// Transient message for the status area.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles a key press. Returns `false` once the user quits.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        let game = self.game().clone();
        let size = game.size();
        let command = command_for(key, self.cursor, size, self.opponent);
        debug!(?command, "Handling key");
        self.message = None;

        match command {
            Command::Quit => return false,
            Command::Ignore => {}
            Command::Cursor(cell) => self.cursor = cell,
            Command::Dispatch(action) => {
                if let Err(e) = self.session.try_dispatch(action) {
                    self.message = Some(e.to_string());
                }
            }
            Command::Grow => self.resize(BoardSize::clamped(size).grow()),
            Command::Shrink => self.resize(BoardSize::clamped(size).shrink()),
            Command::Back => {
                let index = game.current_move().saturating_sub(1);
                self.session.dispatch(Action::JumpTo(index));
            }
            Command::Forward => {
                let index = game.current_move() + 1;
                self.session.dispatch(Action::JumpTo(index));
            }
        }
        true
    }

    fn resize(&mut self, size: BoardSize) {
        let old_size = self.game().size();
        let (row, col) = (self.cursor / old_size, self.cursor % old_size);
        let game = self.session.dispatch(Action::Resize(size.get()));
        let new_size = game.size();
        self.cursor = row.min(new_size - 1) * new_size + col.min(new_size - 1);
    }
}
