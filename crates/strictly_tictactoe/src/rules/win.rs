//! Win detection logic for tic-tac-toe.
//!
//! Only full-length lines count: on an N×N board a player needs all N
//! cells of a row, a column or one of the two long diagonals.

use super::super::{Board, Player, Square};
use tracing::instrument;

/// Builds every winning line for a board of edge `size`.
///
/// Order is rows, then columns, then the main diagonal, then the
/// anti-diagonal. Each line holds `size` cell indexes.
#[instrument]
pub fn winning_lines(size: usize) -> Vec<Vec<usize>> {
    let mut lines = Vec::with_capacity(2 * size + 2);

    // Rows
    for row in 0..size {
        lines.push((0..size).map(|col| row * size + col).collect());
    }

    // Columns
    for col in 0..size {
        lines.push((0..size).map(|row| row * size + col).collect());
    }

    // Diagonals
    lines.push((0..size).map(|i| i * size + i).collect());
    lines.push((0..size).map(|i| i * size + (size - 1 - i)).collect());

    lines
}

/// Returns the mark holding every cell of `line`, if any.
fn line_owner(squares: &[Square], line: &[usize]) -> Option<Player> {
    let (&first, rest) = line.split_first()?;
    let owner = squares.get(first).copied()?.player()?;
    rest.iter()
        .all(|&i| squares.get(i) == Some(&Square::Occupied(owner)))
        .then_some(owner)
}

/// Checks a flat row-major board of edge `size` for a winner.
///
/// Returns the mark of the first full line found, scanning rows, then
/// columns, then diagonals.
#[instrument(skip(squares))]
pub fn detect_winner(squares: &[Square], size: usize) -> Option<Player> {
    debug_assert_eq!(squares.len(), size * size, "board length must be size²");

    winning_lines(size)
        .iter()
        .find_map(|line| line_owner(squares, line))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player holds a full line,
/// `None` otherwise.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    detect_winner(board.squares(), board.size())
}

/// Returns the cells of the first winning line on the board.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board) -> Option<Vec<usize>> {
    winning_lines(board.size())
        .into_iter()
        .find(|line| line_owner(board.squares(), line).is_some())
}
