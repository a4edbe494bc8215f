//! Utilities to generate a `Board` in a given or random state.
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Side};
use crate::outcome::detect;

/// Play the given columns in order, starting with `first` and alternating sides.
/// Panics if a column is full or the game ends before the last move.
pub fn board_with_moves(first: Side, moves: &[usize]) -> Board {
    let mut curr = Board::new();
    let mut side = first;
    let mut outcome = None;

    for &mv in moves {
        assert!(
            outcome.is_none(),
            "Game already finished with {:?}, playing {} on\n{}",
            outcome,
            mv,
            curr
        );
        if let Err(e) = curr.drop_piece(mv, side) {
            panic!("{}, playing {} on\n{}", e, mv, curr);
        }
        outcome = detect(&curr, mv);
        side = side.other();
    }

    curr
}

/// Generate a `Board` by playing `n` random moves, starting with `first` and alternating sides.
/// The resulting game is never finished, games that end early are restarted.
pub fn random_board_with_moves(first: Side, n: u32, rng: &mut impl Rng) -> Board {
    assert!((n as usize) < Board::TILES, "cannot play {} moves without finishing the game", n);

    //this could backtrack instead of starting from scratch, but n is small in practice
    'new_try: loop {
        let mut board = Board::new();
        let mut side = first;

        for _ in 0..n {
            let columns = board.available_columns().collect_vec();
            let column = match columns.choose(rng) {
                Some(&column) => column,
                None => continue 'new_try,
            };

            if let Err(e) = board.drop_piece(column, side) {
                unreachable!("open column {} was rejected: {}", column, e);
            }
            if detect(&board, column).is_some() {
                continue 'new_try;
            }
            side = side.other();
        }

        return board;
    }
}
