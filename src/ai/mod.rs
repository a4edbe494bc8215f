use std::fmt::Debug;

use crate::board::{Board, NoLegalMove};

pub mod minimax;
pub mod simple;

/// A move picking strategy. Bots always play as [Side::Computer](crate::board::Side::Computer),
/// use [Board::swap_sides] to let them play the human seat.
pub trait Bot: Debug {
    /// Pick a column to drop the next piece in.
    /// Returns [NoLegalMove] if every column is full.
    ///
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select_move(&mut self, board: &Board) -> Result<usize, NoLegalMove>;
}

impl<F: FnMut(&Board) -> Result<usize, NoLegalMove> + Debug> Bot for F {
    fn select_move(&mut self, board: &Board) -> Result<usize, NoLegalMove> {
        self(board)
    }
}
