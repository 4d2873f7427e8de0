//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so contracts and the opponent can compose them.

pub mod win;

pub use win::{check_winner, detect_winner, winning_line, winning_lines};
