//! Keyboard handling.

use crossterm::event::KeyCode;
use strictly_tictactoe::Action;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor to this cell.
    Cursor(usize),
    /// Forward an action to the session.
    Dispatch(Action),
    /// Grow the board by one.
    Grow,
    /// Shrink the board by one.
    Shrink,
    /// Step back through history.
    Back,
    /// Step forward through history.
    Forward,
    /// Leave the UI.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: usize, size: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / size, cursor % size);
    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(size - 1)),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(size - 1), col),
        _ => (row, col),
    };
    row * size + col
}

/// Maps a key to a command for a board of `size` with the cursor at `cursor`.
pub fn command_for(key: KeyCode, cursor: usize, size: usize, opponent: bool) -> Command {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => Command::Dispatch(Action::Play(cursor)),
        KeyCode::Char('a') if opponent => Command::Dispatch(Action::OpponentMove),
        KeyCode::Char('r') => Command::Dispatch(Action::Reset),
        KeyCode::Char('+') | KeyCode::Char('=') => Command::Grow,
        KeyCode::Char('-') => Command::Shrink,
        KeyCode::Char('[') => Command::Back,
        KeyCode::Char(']') => Command::Forward,
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Char('h' | 'j' | 'k' | 'l') => Command::Cursor(move_cursor(cursor, size, key)),
        _ => Command::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_row_and_column() {
        assert_eq!(move_cursor(4, 3, KeyCode::Right), 5);
        assert_eq!(move_cursor(4, 3, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, 3, KeyCode::Up), 1);
        assert_eq!(move_cursor(4, 3, KeyCode::Down), 7);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(0, 5, KeyCode::Left), 0);
        assert_eq!(move_cursor(0, 5, KeyCode::Up), 0);
        assert_eq!(move_cursor(24, 5, KeyCode::Right), 24);
        assert_eq!(move_cursor(24, 5, KeyCode::Down), 24);
        assert_eq!(move_cursor(4, 5, KeyCode::Right), 4);
    }

    #[test]
    fn test_opponent_key_needs_opponent() {
        assert_eq!(
            command_for(KeyCode::Char('a'), 0, 3, true),
            Command::Dispatch(Action::OpponentMove)
        );
        assert_eq!(command_for(KeyCode::Char('a'), 0, 3, false), Command::Ignore);
    }

    #[test]
    fn test_enter_plays_cursor() {
        assert_eq!(
            command_for(KeyCode::Enter, 7, 3, true),
            Command::Dispatch(Action::Play(7))
        );
    }
}
