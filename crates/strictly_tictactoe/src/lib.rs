//! Strictly Tic-Tac-Toe - pure N×N tic-tac-toe rules
//!
//! # Architecture
//!
//! - **Rules**: full-line win detection for any board edge
//! - **Game**: immutable state with branching snapshot history, resize and
//!   history navigation
//! - **Contracts / Invariants**: pre- and postconditions checked on every move
//! - **Opponent**: win, block, then positional heuristic
//! - **Session**: owns the current game and notifies observers
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, GameStatus, Player};
//!
//! let game = Game::default().play(4).play(0);
//! assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
//!
//! let smaller = game.resize(2);
//! assert_eq!(smaller.history().len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod opponent;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotWon, InBounds, LegalMove, MoveContract, SquareIsEmpty};
pub use game::Game;
pub use invariants::{
    AlternatingTurnInvariant, BoardShapeInvariant, GameInvariants, Invariant, InvariantSet,
    InvariantViolation, MonotonicHistoryInvariant,
};
pub use opponent::{CLASSIC_ORDER, HeuristicOpponent, Opponent, choose_move, preference_order};
pub use rules::{check_winner, detect_winner, winning_line, winning_lines};
pub use session::{Action, GameObserver, Session, TracingObserver};
pub use types::{Board, GameStatus, MAX_SIZE, Player, Square};
