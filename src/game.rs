//! The entry points used by a front-end to run a human versus computer game.
//!
//! The front-end owns the live board and the turn bookkeeping, the functions here only take board snapshots
//! and return new boards or decisions.
use crate::ai::minimax::MinimaxBot;
use crate::ai::Bot;
use crate::board::{Board, NoLegalMove, Outcome, PlayError, Side};
use crate::outcome::detect;

/// A fresh empty board.
pub fn initialise_board() -> Board {
    Board::new()
}

/// Play a real move for `side` in `column`, returning the new board and the resulting outcome.
/// The outcome is `None` while the game is still going on.
pub fn drop_piece(board: &Board, column: usize, side: Side) -> Result<(Board, Option<Outcome>), PlayError> {
    let next = board.clone_and_drop(column, side)?;
    let outcome = detect(&next, column);
    Ok((next, outcome))
}

/// Pick the column for the computer's next move, searching up to
/// [MAX_DEPTH](crate::ai::minimax::MAX_DEPTH) plies.
///
/// Should only be called while the game is still going on.
pub fn select_computer_move(board: &Board) -> Result<usize, NoLegalMove> {
    MinimaxBot::default().select_move(board)
}
