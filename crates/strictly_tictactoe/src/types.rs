//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Largest board edge the engine accepts.
pub const MAX_SIZE: usize = 10;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Square board of `size * size` cells.
///
/// Deserialization goes through [`Board::from_squares`], so a decoded board
/// always holds `size * size` squares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    /// Edge length.
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with the given edge length.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Builds a board from row-major squares.
    ///
    /// Returns `None` unless `squares.len() == size * size`.
    pub fn from_squares(size: usize, squares: Vec<Square>) -> Option<Self> {
        (size.checked_mul(size) == Some(squares.len())).then_some(Self { size, squares })
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the square at the given index.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Gets the square at the given row and column.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Square> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.get(row * self.size + col)
    }

    /// Checks if a square is empty. Out-of-range indexes are not empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Sets the square at the given position. Out-of-range writes are dropped.
    pub(crate) fn set(&mut self, pos: usize, square: Square) {
        if let Some(slot) = self.squares.get_mut(pos) {
            *slot = square;
        }
    }

    /// Returns a copy of this board with `player` placed at `pos`.
    pub fn with_mark(&self, pos: usize, player: Player) -> Self {
        let mut next = self.clone();
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// True when no empty square remains.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Indexes of all empty squares, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
    }

    /// Converts an index to `(row, col)`.
    pub fn coords(&self, pos: usize) -> (usize, usize) {
        (pos / self.size, pos % self.size)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show `.`; rows are separated by newlines.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.squares[row * self.size + col] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                result.push(symbol);
                if col + 1 < self.size {
                    result.push(' ');
                }
            }
            if row + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }
}

/// Wire form of [`Board`] before the length check.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    squares: Vec<Square>,
}

impl TryFrom<RawBoard> for Board {
    type Error = MoveError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let (size, len) = (raw.size, raw.squares.len());
        Self::from_squares(size, raw.squares).ok_or(MoveError::MalformedBoard { size, len })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Status line derived from the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A full line is held by this player.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// No winner yet; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::NextPlayer(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4);
        assert_eq!(board.squares().len(), 16);
        assert_eq!(board.empty_cells().count(), 16);
        assert!(!board.is_full());
    }

    #[test]
    fn test_with_mark_leaves_source_untouched() {
        let board = Board::new(3);
        let next = board.with_mark(4, Player::X);
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_get_at_matches_row_major_index() {
        let board = Board::new(5).with_mark(7, Player::O);
        assert_eq!(board.coords(7), (1, 2));
        assert_eq!(board.get_at(1, 2), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get_at(5, 0), None);
    }

    #[test]
    fn test_from_squares_rejects_wrong_length() {
        assert!(Board::from_squares(3, vec![Square::Empty; 8]).is_none());
        assert!(Board::from_squares(2, vec![Square::Empty; 4]).is_some());
    }

    #[test]
    fn test_from_squares_survives_huge_size() {
        assert!(Board::from_squares(usize::MAX, vec![Square::Empty]).is_none());
    }

    #[test]
    fn test_deserialize_checks_length() {
        let board: Board = serde_json::from_str(r#"{"size":2,"squares":["Empty","Empty","Empty",{"Occupied":"X"}]}"#).unwrap();
        assert_eq!(board.display(), ". .\n. X");

        let err = serde_json::from_str::<Board>(r#"{"size":3,"squares":["Empty"]}"#).unwrap_err();
        assert!(err.to_string().contains("cannot hold 1 squares"));
    }

    #[test]
    fn test_display() {
        let board = Board::new(2).with_mark(0, Player::X).with_mark(3, Player::O);
        assert_eq!(board.display(), "X .\n. O");
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(GameStatus::Won(Player::O).to_string(), "Winner: O");
        assert_eq!(GameStatus::NextPlayer(Player::X).to_string(), "Next player: X");
    }
}
