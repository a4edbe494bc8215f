use connect4_minimax::board::{Board, PlayError, Side};

mod grid;

/// Check the basic invariants every reachable board should satisfy.
pub fn board_test_main(board: &Board) {
    println!("Currently testing board\n{:?}\n{}", board, board);

    board.assert_valid();
    test_available_match(board);
    test_drop_each_column(board);
    test_transforms(board);
}

fn test_available_match(board: &Board) {
    let available: Vec<usize> = board.available_columns().collect();

    for column in 0..Board::WIDTH {
        assert_eq!(
            available.contains(&column),
            !board.is_column_full(column),
            "available_columns and is_column_full disagree on column {}",
            column
        );
    }

    assert!(available.windows(2).all(|w| w[0] < w[1]), "columns not ascending");
    assert_eq!(available.is_empty(), board.is_full());
}

fn test_drop_each_column(board: &Board) {
    for column in 0..Board::WIDTH {
        let mut child = board.clone();
        let result = child.drop_piece(column, Side::Human);

        if board.is_column_full(column) {
            assert_eq!(result, Err(PlayError::ColumnFull(column)));
            assert_eq!(&child, board, "failed drop must not modify the board");
        } else {
            let expected_row = board.top_row(column).unwrap_or(Board::HEIGHT) - 1;
            assert_eq!(result, Ok(expected_row));
            assert_eq!(child.tile(column, expected_row), Some(Side::Human));
            assert_eq!(child.piece_count(Side::Human), board.piece_count(Side::Human) + 1);
            child.assert_valid();
        }
    }

    let mut child = board.clone();
    assert_eq!(
        child.drop_piece(Board::WIDTH, Side::Computer),
        Err(PlayError::InvalidColumn(Board::WIDTH))
    );
}

fn test_transforms(board: &Board) {
    assert_eq!(&board.mirror().mirror(), board);
    assert_eq!(&board.swap_sides().swap_sides(), board);

    let swapped = board.swap_sides();
    assert_eq!(swapped.piece_count(Side::Human), board.piece_count(Side::Computer));
    assert_eq!(swapped.piece_count(Side::Computer), board.piece_count(Side::Human));

    let mirrored = board.mirror();
    for column in 0..Board::WIDTH {
        for row in 0..Board::HEIGHT {
            assert_eq!(mirrored.tile(Board::WIDTH - 1 - column, row), board.tile(column, row));
        }
    }
}

/// Build a board from one string per column, listing pieces from the bottom up with `x` for the human
/// and `o` for the computer.
pub fn board_from_columns(columns: [&str; Board::WIDTH]) -> Board {
    let mut board = Board::new();
    for (column, pieces) in columns.iter().enumerate() {
        for c in pieces.chars() {
            let side = match c {
                'x' => Side::Human,
                'o' => Side::Computer,
                _ => panic!("unexpected piece {:?}", c),
            };
            board.drop_piece(column, side).unwrap();
        }
    }
    board
}
