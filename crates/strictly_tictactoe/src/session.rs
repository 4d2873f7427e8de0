//! Session: the current game plus the views watching it.

use super::action::MoveError;
use super::game::Game;
use super::opponent::{HeuristicOpponent, Opponent};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A request from the view layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::IntoStaticStr,
)]
pub enum Action {
    /// Place the current player's mark at a cell index.
    Play(usize),
    /// Change the board edge length.
    Resize(usize),
    /// Let the opponent pick a square for the player due to move.
    OpponentMove,
    /// Display an earlier (or later) snapshot.
    JumpTo(usize),
    /// Clear the board, keeping its size.
    Reset,
}

/// Receives every state change of a [`Session`].
pub trait GameObserver {
    /// Called after the game changed.
    fn on_state_changed(&mut self, action: Action, game: &Game);
}

/// Logs state changes through `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_state_changed(&mut self, action: Action, game: &Game) {
        let kind: &'static str = action.into();
        info!(
            action = kind,
            size = game.size(),
            current_move = game.current_move(),
            history_len = game.history().len(),
            status = %game.status(),
            "Game state changed"
        );
    }
}

/// Owns the current [`Game`] and replaces it on every action.
pub struct Session {
    game: Game,
    opponent: Box<dyn Opponent>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Session {
    /// Creates a session around `game` with the heuristic opponent.
    #[instrument(skip(game), fields(size = game.size()))]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            opponent: Box::new(HeuristicOpponent),
            observers: Vec::new(),
        }
    }

    /// Replaces the opponent.
    pub fn with_opponent(mut self, opponent: impl Opponent + 'static) -> Self {
        self.opponent = Box::new(opponent);
        self
    }

    /// Registers an observer.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Applies `action` and notifies observers if the game changed.
    ///
    /// A rejected action leaves the game as it was, notifies nobody and
    /// returns the reason.
    #[instrument(skip(self))]
    pub fn try_dispatch(&mut self, action: Action) -> Result<&Game, MoveError> {
        let next = match action {
            Action::Play(position) => self.game.try_play(position),
            Action::Resize(size) => self.game.try_resize(size),
            Action::OpponentMove => self.game.try_play_opponent(self.opponent.as_ref()),
            Action::JumpTo(index) => self.game.try_jump_to(index),
            Action::Reset => Ok(self.game.reset()),
        }?;

        if next == self.game {
            debug!("Action left the game unchanged");
            return Ok(&self.game);
        }

        self.game = next;
        for observer in &mut self.observers {
            observer.on_state_changed(action, &self.game);
        }
        Ok(&self.game)
    }

    /// Like [`Session::try_dispatch`], but rejections are only logged.
    pub fn dispatch(&mut self, action: Action) -> &Game {
        if let Err(e) = self.try_dispatch(action) {
            debug!(?action, error = %e, "Action ignored");
        }
        &self.game
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Game::default())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game)
            .field("observers", &self.observers.len())
            .finish()
    }
}
