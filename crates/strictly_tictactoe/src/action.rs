//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark at a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Row-major cell index.
    pub position: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: usize) -> Self {
        Self { player, position }
    }

    /// Recovers the move that turns `before` into `after`.
    ///
    /// Returns `None` unless exactly one cell went from empty to a mark
    /// and the boards share a size.
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        if before.size() != after.size() {
            return None;
        }
        let mut changed = before
            .squares()
            .iter()
            .zip(after.squares())
            .enumerate()
            .filter(|(_, (b, a))| b != a);

        let (position, (was, now)) = changed.next()?;
        if changed.next().is_some() || *was != Square::Empty {
            return None;
        }
        now.player().map(|player| Self { player, position })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a transition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The position lies outside the board.
    #[display("Position {} is outside a {}x{} board", position, size, size)]
    OutOfBounds {
        /// Requested cell index.
        position: usize,
        /// Board edge length.
        size: usize,
    },

    /// The requested board size is not supported.
    #[display("Board size {} is out of range", _0)]
    SizeOutOfRange(usize),

    /// The history index does not exist.
    #[display("History index {} is out of range (length {})", index, len)]
    HistoryOutOfRange {
        /// Requested history index.
        index: usize,
        /// Current history length.
        len: usize,
    },

    /// Decoded squares do not fill a `size * size` board.
    #[display("Board of size {} cannot hold {} squares", size, len)]
    MalformedBoard {
        /// Declared edge length.
        size: usize,
        /// Number of squares supplied.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
