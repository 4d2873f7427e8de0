//! Non-interactive move scripts.
//!
//! A script is a list of steps separated by commas or whitespace:
//! a cell index plays there, `ai` asks the opponent, `r:N` resizes,
//! `j:N` jumps to history index N and `reset` clears the board.

use crate::config::BoardSize;
use derive_more::{Display, Error};
use serde::Serialize;
use strictly_tictactoe::{Action, Board, Game, GameStatus, Move, Session, TracingObserver};
use tracing::{debug, instrument};

/// Parses a move script into session actions.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<Action>, ScriptError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_step)
        .collect()
}

fn parse_step(token: &str) -> Result<Action, ScriptError> {
    let number = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| ScriptError::new(format!("Expected a number in step '{}'", token)))
    };

    let action = match token.to_ascii_lowercase().as_str() {
        "ai" => Action::OpponentMove,
        "reset" => Action::Reset,
        step => match step.split_once(':') {
            Some(("r", n)) => {
                let size = BoardSize::new(number(n)?)
                    .map_err(|e| ScriptError::new(e.message))?;
                Action::Resize(size.get())
            }
            Some(("j", n)) => Action::JumpTo(number(n)?),
            Some(_) => return Err(ScriptError::new(format!("Unknown step '{}'", token))),
            None => Action::Play(number(step)?),
        },
    };
    debug!(token, ?action, "Parsed step");
    Ok(action)
}

/// Runs `actions` on a fresh board of `size`.
#[instrument(skip(actions), fields(steps = actions.len()))]
pub fn run(size: BoardSize, actions: &[Action]) -> Result<Game, ScriptError> {
    let game = Game::new(size.get()).map_err(|e| ScriptError::new(e.to_string()))?;
    let mut session = Session::new(game);
    session.subscribe(TracingObserver);

    for action in actions {
        session.dispatch(*action);
    }
    Ok(session.game().clone())
}

/// Final state of a replay, as printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Board edge length.
    pub size: usize,
    /// Displayed snapshot.
    pub board: Board,
    /// Status line data.
    pub status: GameStatus,
    /// Moves along the history.
    pub moves: Vec<Move>,
    /// Index of the displayed snapshot.
    pub current_move: usize,
}

impl From<&Game> for ReplayReport {
    fn from(game: &Game) -> Self {
        Self {
            size: game.size(),
            board: game.current_board().clone(),
            status: game.status(),
            moves: game.moves(),
            current_move: game.current_move(),
        }
    }
}

/// Plain-text rendering: the board followed by the status line.
pub fn render_text(game: &Game) -> String {
    format!("{}\n{}", game.current_board().display(), game.status())
}

/// Move script error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
