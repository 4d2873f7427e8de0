//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Joins violation descriptions into one message.
pub(crate) fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for 2- and 3-tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod alternating_turn;
pub mod board_shape;
pub mod monotonic_history;

pub use alternating_turn::AlternatingTurnInvariant;
pub use board_shape::BoardShapeInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    BoardShapeInvariant,
    MonotonicHistoryInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Player, Square};
    use std::sync::Arc;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::default();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_resize() {
        let game = [0, 4, 8].into_iter().fold(Game::default(), |g, p| g.play(p));
        assert!(GameInvariants::check_all(&game).is_ok());

        let game = game.resize(7).play(20).play(30);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::default().play(4);
        let mut board = (*game.history[1]).clone();
        board.set(0, Square::Occupied(Player::O));
        game.history[1] = Arc::new(board);

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
        assert!(
            violations
                .iter()
                .any(|v| v.description == MonotonicHistoryInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::default().play(0);

        type TwoInvariants = (BoardShapeInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
