//! Property checks over many move sequences.

use strictly_tictactoe::{
    Game, GameInvariants, InvariantSet, MAX_SIZE, MoveError, Player, Square, winning_lines,
};
use strum::IntoEnumIterator;

/// Deterministic pseudo-random cell picker.
fn sequence(seed: u64, len: usize, cells: usize) -> Vec<usize> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as usize) % cells
        })
        .collect()
}

#[test]
fn test_every_full_line_wins() {
    for size in 1..=MAX_SIZE {
        for line in winning_lines(size) {
            for player in Player::iter() {
                let mut squares = vec![Square::Empty; size * size];
                for &i in &line {
                    squares[i] = Square::Occupied(player);
                }
                assert_eq!(
                    strictly_tictactoe::detect_winner(&squares, size),
                    Some(player),
                    "size {size}, line {line:?}"
                );
            }
        }
    }
}

#[test]
fn test_line_with_one_gap_does_not_win() {
    for size in 2..=MAX_SIZE {
        for line in winning_lines(size) {
            let mut squares = vec![Square::Empty; size * size];
            for &i in &line[1..] {
                squares[i] = Square::Occupied(Player::O);
            }
            assert_eq!(strictly_tictactoe::detect_winner(&squares, size), None);
        }
    }
}

#[test]
fn test_moves_keep_history_properties() {
    for seed in 0..50 {
        for size in [3, 4, 7] {
            let mut game = Game::new(size).unwrap();
            for position in sequence(seed, 40, size * size) {
                let before = game.clone();
                match before.try_play(position) {
                    Ok(after) => {
                        let changed = before
                            .current_board()
                            .squares()
                            .iter()
                            .zip(after.current_board().squares())
                            .filter(|(a, b)| a != b)
                            .count();
                        assert_eq!(changed, 1);
                        assert_eq!(after.to_move(), before.to_move().opponent());
                        assert_eq!(after.current_move(), after.history().len() - 1);
                        game = after;
                    }
                    Err(MoveError::GameOver) => {
                        assert!(before.winner().is_some());
                        assert_eq!(before.play(position), before);
                    }
                    Err(MoveError::SquareOccupied(p)) => {
                        assert_eq!(p, position);
                        assert_eq!(before.play(position), before);
                    }
                    Err(other) => panic!("unexpected error {other}"),
                }
                assert!(GameInvariants::check_all(&game).is_ok());
            }
        }
    }
}

#[test]
fn test_resize_copies_overlap_only() {
    for seed in 0..20 {
        let mut game = Game::new(6).unwrap();
        for position in sequence(seed, 12, 36) {
            game = game.play(position);
        }
        for new_size in 1..=MAX_SIZE {
            let resized = game.resize(new_size);
            let old = game.current_board();
            let new = resized.current_board();
            let overlap = game.size().min(new_size);

            assert_eq!(new.squares().len(), new_size * new_size);
            for row in 0..new_size {
                for col in 0..new_size {
                    let expected = if row < overlap && col < overlap {
                        old.get_at(row, col)
                    } else {
                        Some(Square::Empty)
                    };
                    assert_eq!(new.get_at(row, col), expected);
                }
            }
            assert_eq!(resized.history().len(), 1);
            assert_eq!(resized.current_move(), 0);
            assert_eq!(resized.to_move(), Player::X);
        }
    }
}
