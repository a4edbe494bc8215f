//! Win and draw detection after a single drop.
use crate::board::{Board, Outcome, Side};

/// The four line axes as `(column, row)` steps: horizontal, vertical and both diagonals.
/// Each axis is walked in both directions from the last placed piece.
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Determine the outcome of the game right after a piece was dropped into `last_column`.
///
/// Only lines through that piece are considered, so this must be called after every move for the result to be
/// meaningful. Returns `None` if the game is not finished yet.
///
/// Panics if `last_column` is empty.
pub fn detect(board: &Board, last_column: usize) -> Option<Outcome> {
    // pieces settle at the lowest empty row, so the topmost piece is the one that was just played
    let last_row = board
        .top_row(last_column)
        .unwrap_or_else(|| panic!("column {} is empty, nothing was played there:\n{}", last_column, board));
    let side = board
        .tile(last_column, last_row)
        .unwrap_or_else(|| unreachable!("top row of column {} is empty", last_column));

    let won = AXES.iter().any(|&(dc, dr)| {
        let column = last_column as isize;
        let row = last_row as isize;

        let count = 1 + run_length(board, side, column, row, dc, dr) + run_length(board, side, column, row, -dc, -dr);
        count >= Board::WIN_LENGTH
    });

    if won {
        Some(Outcome::WonBy(side))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// The number of consecutive pieces of `side` starting next to `(column, row)` and stepping by `(dc, dr)`,
/// stopping at the first mismatching tile or the edge of the board.
fn run_length(board: &Board, side: Side, column: isize, row: isize, dc: isize, dr: isize) -> usize {
    (1..)
        .map(|i| board.tile_checked(column + i * dc, row + i * dr))
        .take_while(|&tile| tile == Some(Some(side)))
        .count()
}
