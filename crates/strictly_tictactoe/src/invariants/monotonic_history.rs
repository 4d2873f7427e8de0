//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::super::{Game, Move};
use super::Invariant;

/// Invariant: Squares are never overwritten along history.
///
/// Every snapshot after the first differs from its predecessor by one
/// cell going from empty to a mark.
pub struct MonotonicHistoryInvariant;

impl Invariant<Game> for MonotonicHistoryInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .windows(2)
            .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};
    use std::sync::Arc;

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicHistoryInvariant::holds(&Game::default()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let game = [0, 1, 2, 3].into_iter().fold(Game::default(), |g, p| g.play(p));
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = Game::default().play(4).play(0);
        let mut board = (*game.history[2]).clone();
        board.set(4, Square::Occupied(Player::O));
        game.history[2] = Arc::new(board);
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let mut game = Game::default().play(4);
        let last = game.history[1].clone();
        game.history.push(last);
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }
}
