//! Game state controller.
//!
//! A [`Game`] is an immutable value. Every transition returns a new
//! `Game`; older values stay valid, and snapshots are shared between
//! them through [`Arc`], so keeping a previous `Game` around is enough
//! to undo to it.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::invariants::{GameInvariants, InvariantSet, describe};
use super::opponent::Opponent;
use super::rules::check_winner;
use super::{Board, GameStatus, MAX_SIZE, Player, Square};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Snapshot history, current position, turn and board size.
///
/// Invariants:
/// - `history` is never empty and every snapshot is `size * size`
/// - each snapshot after the first adds exactly one mark to its predecessor
/// - `current_move < history.len()`
///
/// Decoded games are checked against [`GameInvariants`] before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGame")]
pub struct Game {
    pub(crate) size: usize,
    pub(crate) history: Vec<Arc<Board>>,
    pub(crate) current_move: usize,
    pub(crate) to_move: Player,
}

impl Game {
    /// Creates a game on an empty `size`×`size` board with X to move.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, MoveError> {
        check_size(size)?;
        Ok(Self::from_origin(Board::new(size)))
    }

    /// Starts a single-snapshot history from `origin`.
    fn from_origin(origin: Board) -> Self {
        Self {
            size: origin.size(),
            history: vec![Arc::new(origin)],
            current_move: 0,
            to_move: Player::X,
        }
    }

    /// Board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Arc<Board>] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Winner on the displayed snapshot.
    #[instrument(skip(self), fields(size = self.size, current_move = self.current_move))]
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Status line for the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::NextPlayer(self.to_move),
        }
    }

    /// Moves recovered from consecutive snapshots.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .windows(2)
            .filter_map(|pair| Move::between(&pair[0], &pair[1]))
            .collect()
    }

    /// Places the current player's mark at `position`.
    ///
    /// Snapshots after `current_move` are discarded before the new one
    /// is appended. Rejected when the board already has a winner, when the
    /// square is taken, or when `position` is off the board.
    #[instrument(skip(self), fields(player = %self.to_move, size = self.size))]
    pub fn try_play(&self, position: usize) -> Result<Self, MoveError> {
        MoveContract::pre(self, &position)?;

        let board = self.current_board().with_mark(position, self.to_move);
        let mut history = self.history[..=self.current_move].to_vec();
        history.push(Arc::new(board));

        let next = Self {
            size: self.size,
            current_move: history.len() - 1,
            history,
            to_move: self.to_move.opponent(),
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        info!(current_move = next.current_move, "Move applied");
        Ok(next)
    }

    /// Like [`Game::try_play`], but a rejected move leaves the game unchanged.
    pub fn play(&self, position: usize) -> Self {
        self.try_play(position).unwrap_or_else(|e| {
            debug!(position, error = %e, "Move ignored");
            self.clone()
        })
    }

    /// Asks `opponent` for a cell and plays it for whoever is due to move.
    ///
    /// A full board is not an error and returns the game unchanged.
    #[instrument(skip(self, opponent), fields(player = %self.to_move))]
    pub fn try_play_opponent(&self, opponent: &dyn Opponent) -> Result<Self, MoveError> {
        match opponent.choose(self.current_board()) {
            Some(position) => {
                debug!(position, "Opponent chose position");
                self.try_play(position)
            }
            None => {
                debug!("Opponent found no empty square");
                Ok(self.clone())
            }
        }
    }

    /// Like [`Game::try_play_opponent`], but a rejected move leaves the game unchanged.
    pub fn play_opponent(&self, opponent: &dyn Opponent) -> Self {
        self.try_play_opponent(opponent).unwrap_or_else(|e| {
            debug!(error = %e, "Opponent move ignored");
            self.clone()
        })
    }

    /// Migrates the displayed board to a `new_size`×`new_size` board.
    ///
    /// The overlapping top-left square is copied by row and column, all
    /// other cells start empty. History collapses to that one snapshot,
    /// position goes to 0 and X moves next.
    #[instrument(skip(self), fields(old_size = self.size))]
    pub fn try_resize(&self, new_size: usize) -> Result<Self, MoveError> {
        check_size(new_size)?;

        let old = self.current_board();
        let overlap = self.size.min(new_size);
        let mut board = Board::new(new_size);
        for row in 0..overlap {
            for col in 0..overlap {
                if let Some(square @ Square::Occupied(_)) = old.get_at(row, col) {
                    board.set(row * new_size + col, square);
                }
            }
        }

        info!(new_size, "Board resized");
        Ok(Self::from_origin(board))
    }

    /// Like [`Game::try_resize`], but an unsupported size leaves the game unchanged.
    pub fn resize(&self, new_size: usize) -> Self {
        self.try_resize(new_size).unwrap_or_else(|e| {
            debug!(new_size, error = %e, "Resize ignored");
            self.clone()
        })
    }

    /// Clears the board, keeping its size.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&self) -> Self {
        Self::from_origin(Board::new(self.size))
    }

    /// Displays the snapshot at `index`.
    ///
    /// The turn indicator follows the snapshot: X on even indexes, O on odd.
    /// History is kept, so a later move branches from here.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn try_jump_to(&self, index: usize) -> Result<Self, MoveError> {
        if index >= self.history.len() {
            return Err(MoveError::HistoryOutOfRange {
                index,
                len: self.history.len(),
            });
        }

        Ok(Self {
            current_move: index,
            to_move: turn_at(index),
            ..self.clone()
        })
    }

    /// Like [`Game::try_jump_to`], but a missing index leaves the game unchanged.
    pub fn jump_to(&self, index: usize) -> Self {
        self.try_jump_to(index).unwrap_or_else(|e| {
            debug!(index, error = %e, "Jump ignored");
            self.clone()
        })
    }
}

/// Wire form of [`Game`] before validation.
#[derive(Deserialize)]
struct RawGame {
    size: usize,
    history: Vec<Arc<Board>>,
    current_move: usize,
    to_move: Player,
}

impl TryFrom<RawGame> for Game {
    type Error = MoveError;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        check_size(raw.size)?;
        let game = Self {
            size: raw.size,
            history: raw.history,
            current_move: raw.current_move,
            to_move: raw.to_move,
        };

        GameInvariants::check_all(&game).map_err(|violations| {
            let descriptions = describe(&violations);
            debug!(%descriptions, "Rejected decoded game");
            MoveError::InvariantViolation(descriptions)
        })?;
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::from_origin(Board::new(3))
    }
}

/// Player due to move at history index `index`.
pub(crate) fn turn_at(index: usize) -> Player {
    if index % 2 == 0 { Player::X } else { Player::O }
}

fn check_size(size: usize) -> Result<(), MoveError> {
    if (1..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(MoveError::SizeOutOfRange(size))
    }
}
