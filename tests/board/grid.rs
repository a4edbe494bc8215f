use connect4_minimax::board::{Board, PlayError, Side};
use connect4_minimax::util::board_gen::{board_with_moves, random_board_with_moves};
use connect4_minimax::util::game_stats::perft;
use connect4_minimax::util::tiny::consistent_rng;

use crate::board::{board_from_columns, board_test_main};

#[test]
fn empty() {
    let board = Board::new();
    board_test_main(&board);

    assert!(!board.is_full());
    assert_eq!(board.available_columns().collect::<Vec<_>>(), (0..7).collect::<Vec<_>>());
    assert_eq!(board.piece_count(Side::Human) + board.piece_count(Side::Computer), 0);
    assert_eq!(board, Board::default());
}

#[test]
fn basic() {
    board_test_main(&board_with_moves(Side::Human, &[1]));
    board_test_main(&board_with_moves(Side::Human, &[1, 2]));
    board_test_main(&board_with_moves(Side::Computer, &[1, 2, 3]));
    board_test_main(&board_with_moves(Side::Computer, &[3, 3, 3, 3, 3]));
}

#[test]
fn drop_stacks_from_bottom() {
    let mut board = Board::new();
    for expected_row in (0..Board::HEIGHT).rev() {
        assert!(!board.is_column_full(4));
        assert_eq!(board.drop_piece(4, Side::Computer), Ok(expected_row));
    }

    assert!(board.is_column_full(4));
    assert_eq!(board.drop_piece(4, Side::Human), Err(PlayError::ColumnFull(4)));
    assert_eq!(board.available_columns().collect::<Vec<_>>(), vec![0, 1, 2, 3, 5, 6]);
    board_test_main(&board);
}

#[test]
fn invalid_column() {
    let mut board = Board::new();
    assert_eq!(board.drop_piece(7, Side::Human), Err(PlayError::InvalidColumn(7)));
    assert_eq!(board, Board::new());
}

#[test]
fn clone_is_independent() {
    let original = board_with_moves(Side::Human, &[3, 3, 2]);
    let mut copy = original.clone();

    copy.drop_piece(3, Side::Computer).unwrap();
    copy.drop_piece(0, Side::Human).unwrap();

    assert_ne!(copy, original);
    assert_eq!(original, board_with_moves(Side::Human, &[3, 3, 2]));
    assert_eq!(original.tile(0, Board::HEIGHT - 1), None);
    assert_eq!(original.top_row(3), Some(Board::HEIGHT - 2));
}

#[test]
fn clone_and_drop_leaves_original() {
    let original = board_with_moves(Side::Human, &[0]);
    let child = original.clone_and_drop(0, Side::Computer).unwrap();

    assert_eq!(original.top_row(0), Some(Board::HEIGHT - 1));
    assert_eq!(child.top_row(0), Some(Board::HEIGHT - 2));
    assert_eq!(child.tile(0, Board::HEIGHT - 2), Some(Side::Computer));
}

#[test]
fn full_board() {
    let columns = ["xxoxxo", "ooxoox", "xxoxxo", "ooxoox", "xxoxxo", "ooxoox", "xxoxxo"];
    let board = board_from_columns(columns);

    assert!(board.is_full());
    assert_eq!(board.available_columns().count(), 0);
    board_test_main(&board);
}

#[test]
fn display() {
    let board = board_with_moves(Side::Human, &[0, 1, 0]);
    let expected = ".......\n.......\n.......\n.......\nx......\nxo.....\n0123456\n";
    assert_eq!(board.to_string(), expected);
    assert_eq!(format!("{:?}", board), "Board { xx/o///// }");
}

#[test]
fn random() {
    let mut rng = consistent_rng();

    for n in 0..30 {
        for &first in &Side::BOTH {
            let board = random_board_with_moves(first, n, &mut rng);
            assert_eq!(
                board.piece_count(Side::Human) + board.piece_count(Side::Computer),
                n as usize
            );
            board_test_main(&board);
        }
    }
}

#[test]
fn perft_empty() {
    // nobody can win before the seventh move
    let expected = [1, 7, 49, 343, 2401, 16807];
    for (depth, &expected) in expected.iter().enumerate() {
        assert_eq!(perft(&Board::new(), Side::Human, depth as u32), expected, "depth {}", depth);
    }
}
