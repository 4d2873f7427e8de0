//! Board shape invariant: every snapshot is `size * size` and the cursor is in range.

use super::super::Game;
use super::Invariant;

/// Invariant: History is non-empty, every snapshot has the game's size,
/// and `current_move` points into history.
pub struct BoardShapeInvariant;

impl Invariant<Game> for BoardShapeInvariant {
    fn holds(game: &Game) -> bool {
        let size = game.size();

        !game.history().is_empty()
            && game.current_move() < game.history().len()
            && game
                .history()
                .iter()
                .all(|b| b.size() == size && b.squares().len() == size * size)
    }

    fn description() -> &'static str {
        "Every snapshot is size x size and the current position is in history"
    }
}
