//! Heuristic computer opponent.
//!
//! Priority: take a winning square for O, else take a winning square for
//! X, else the first free square of a fixed positional order. The first
//! step always looks for an O win, whichever player is actually due to
//! move; the returned square is then played for the player due to move.

use super::rules::check_winner;
use super::{Board, Player};
use tracing::{debug, instrument};

/// Positional preference on the 3×3 board: centre, corners, edges.
pub const CLASSIC_ORDER: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

/// Something that picks a square to play.
pub trait Opponent {
    /// Returns the chosen cell index, or `None` on a full board.
    fn choose(&self, board: &Board) -> Option<usize>;
}

/// The win, block, then position heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicOpponent;

impl Opponent for HeuristicOpponent {
    fn choose(&self, board: &Board) -> Option<usize> {
        choose_move(board)
    }
}

/// Picks a square using the fixed priority.
#[instrument(skip(board), fields(size = board.size()))]
pub fn choose_move(board: &Board) -> Option<usize> {
    if let Some(pos) = completing_move(board, Player::O) {
        debug!(pos, "Taking winning square for O");
        return Some(pos);
    }

    if let Some(pos) = completing_move(board, Player::X) {
        debug!(pos, "Taking winning square for X");
        return Some(pos);
    }

    let pos = preference_order(board.size())
        .into_iter()
        .find(|&i| board.is_empty(i));
    debug!(?pos, "Falling back to positional order");
    pos
}

/// First empty square where `player` would complete a line.
fn completing_move(board: &Board, player: Player) -> Option<usize> {
    board
        .empty_cells()
        .find(|&i| check_winner(&board.with_mark(i, player)) == Some(player))
}

/// Positional preference for a board of edge `size`.
///
/// The centre cell (odd sizes only), then the four corners, then every
/// other cell ascending. For `size == 3` this is [`CLASSIC_ORDER`].
pub fn preference_order(size: usize) -> Vec<usize> {
    if size == 0 {
        return Vec::new();
    }

    let last = size * size - 1;
    let mut order = Vec::with_capacity(size * size);
    if size % 2 == 1 {
        order.push((size / 2) * size + size / 2);
    }
    for corner in [0, size - 1, last - (size - 1), last] {
        if !order.contains(&corner) {
            order.push(corner);
        }
    }
    for i in 0..=last {
        if !order.contains(&i) {
            order.push(i);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: usize, xs: &[usize], os: &[usize]) -> Board {
        let b = xs.iter().fold(Board::new(size), |b, &i| b.with_mark(i, Player::X));
        os.iter().fold(b, |b, &i| b.with_mark(i, Player::O))
    }

    #[test]
    fn test_empty_board_takes_centre() {
        assert_eq!(choose_move(&Board::new(3)), Some(4));
    }

    #[test]
    fn test_classic_order() {
        assert_eq!(preference_order(3), CLASSIC_ORDER.to_vec());
    }

    #[test]
    fn test_preference_order_even_size_has_no_centre() {
        let order = preference_order(4);
        assert_eq!(&order[..5], &[0, 3, 12, 15, 1]);
        assert_eq!(order.len(), 16);
    }

    #[test]
    fn test_single_cell_board() {
        assert_eq!(preference_order(1), vec![0]);
        assert_eq!(choose_move(&Board::new(1)), Some(0));
    }

    #[test]
    fn test_takes_o_win() {
        // O O _ / X X _ / X _ _
        let b = board(3, &[3, 4, 6], &[0, 1]);
        assert_eq!(choose_move(&b), Some(2));
    }

    #[test]
    fn test_o_win_beats_x_block() {
        // X X _ / O O _ / _ _ _ : X's threat at 2 comes first by index,
        // but O's win at 5 has priority.
        let b = board(3, &[0, 1], &[3, 4]);
        assert_eq!(choose_move(&b), Some(5));
    }

    #[test]
    fn test_blocks_x() {
        // X X _ / _ O _ / _ _ _
        let b = board(3, &[0, 1], &[4]);
        assert_eq!(choose_move(&b), Some(2));
    }

    #[test]
    fn test_falls_back_to_corner_when_centre_taken() {
        let b = board(3, &[4], &[]);
        assert_eq!(choose_move(&b), Some(0));
    }

    #[test]
    fn test_full_board_returns_none() {
        // X O X / X O O / O X X
        let b = board(3, &[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        assert_eq!(choose_move(&b), None);
    }

    #[test]
    fn test_larger_board_uses_full_lines() {
        // O holds three of row 0 on a 4×4 board.
        let b = board(4, &[5, 6, 9], &[0, 1, 2]);
        assert_eq!(choose_move(&b), Some(3));
    }
}
