//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::game::turn_at;
use super::super::{Game, Move};
use super::Invariant;

/// Invariant: Players alternate turns from the origin snapshot.
///
/// The mark added at step `i` belongs to X on even `i` and O on odd `i`,
/// and the player to move matches the displayed position.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let alternates = game.history().windows(2).enumerate().all(|(i, pair)| {
            Move::between(&pair[0], &pair[1]).is_some_and(|m| m.player == turn_at(i))
        });

        alternates && game.to_move() == turn_at(game.current_move())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
