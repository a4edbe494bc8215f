//! A bot that plays uniformly random moves, used as a baseline opponent.
use std::fmt::{Debug, Formatter};

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::Bot;
use crate::board::{Board, NoLegalMove};

/// Bot that chooses moves randomly uniformly among the open columns.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &Board) -> Result<usize, NoLegalMove> {
        let columns = board.available_columns().collect_vec();
        columns.choose(&mut self.rng).copied().ok_or(NoLegalMove)
    }
}
