//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::game::Game;
use super::invariants::{GameInvariants, InvariantSet, describe};
use super::rules::check_winner;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: Nobody holds a full line on the displayed board.
pub struct GameNotWon;

impl GameNotWon {
    /// Fails with [`MoveError::GameOver`] once the board has a winner.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        match check_winner(game.current_board()) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: The position lies on the board.
pub struct InBounds;

impl InBounds {
    /// Fails with [`MoveError::OutOfBounds`] past the last cell.
    #[instrument(skip(game))]
    pub fn check(position: usize, game: &Game) -> Result<(), MoveError> {
        let size = game.size();
        if position >= size * size {
            Err(MoveError::OutOfBounds { position, size })
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] on a taken square.
    #[instrument(skip(game))]
    pub fn check(position: usize, game: &Game) -> Result<(), MoveError> {
        if !game.current_board().is_empty(position) {
            Err(MoveError::SquareOccupied(position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: no winner yet, on the board, and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(position: usize, game: &Game) -> Result<(), MoveError> {
        GameNotWon::check(game)?;
        InBounds::check(position, game)?;
        SquareIsEmpty::check(position, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - No winner on the displayed board
/// - Position on the board
/// - Square must be empty
///
/// Postconditions:
/// - Every snapshot keeps the board shape
/// - Each snapshot adds exactly one mark
/// - Players still alternate
/// - History grew by one past the old position
pub struct MoveContract;

impl Contract<Game, usize> for MoveContract {
    fn pre(game: &Game, position: &usize) -> Result<(), MoveError> {
        LegalMove::check(*position, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.history().len() != before.current_move() + 2
            || after.current_move() != after.history().len() - 1
        {
            warn!(
                before = before.current_move(),
                after = after.current_move(),
                len = after.history().len(),
                "History did not branch from the displayed snapshot"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must end one move past the old position".into(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = describe(&violations);
            warn!(%descriptions, "Invariant check failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};
    use std::sync::Arc;

    #[test]
    fn test_precondition_empty_square() {
        let game = Game::default();
        assert!(MoveContract::pre(&game, &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = Game::default().play(4);
        assert!(matches!(
            MoveContract::pre(&game, &4),
            Err(MoveError::SquareOccupied(4))
        ));
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let game = Game::new(4).unwrap();
        assert!(MoveContract::pre(&game, &15).is_ok());
        assert!(matches!(
            MoveContract::pre(&game, &16),
            Err(MoveError::OutOfBounds { position: 16, size: 4 })
        ));
    }

    #[test]
    fn test_winner_checked_before_occupancy() {
        let game = [0, 3, 1, 4, 2].into_iter().fold(Game::default(), |g, p| g.play(p));
        assert_eq!(MoveContract::pre(&game, &0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = Game::default();
        let after = game.try_play(4).unwrap();
        assert!(MoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = Game::default();
        let mut after = game.try_play(4).unwrap();

        // Sneak a second mark into the newest snapshot.
        let mut board = (*after.history[1]).clone();
        board.set(0, Square::Occupied(Player::O));
        after.history[1] = Arc::new(board);

        assert!(MoveContract::post(&game, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_missing_branch() {
        let game = Game::default().play(0);
        let unchanged = game.clone();
        assert!(MoveContract::post(&game, &unchanged).is_err());
    }
}
