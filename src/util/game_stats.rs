//! Utilities for collecting game statistics and testing bot implementations.
use std::collections::HashMap;

use crate::ai::Bot;
use crate::board::{Board, Side};
use crate::outcome::detect;

/// The number of move sequences of length `depth` starting from `board` with `next` to move,
/// where finished games are not continued. See <https://www.chessprogramming.org/Perft>.
pub fn perft(board: &Board, next: Side, depth: u32) -> u64 {
    let mut map = HashMap::default();
    perft_recurse(&mut map, board.clone(), next, depth)
}

fn perft_recurse(map: &mut HashMap<(Board, Side, u32), u64>, board: Board, next: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    // we need the depth in the key, the same board can be encountered at different depths
    let key = (board, next, depth);
    if let Some(&p) = map.get(&key) {
        return p;
    }
    let board = &key.0;

    let mut p = 0;
    for column in board.available_columns() {
        let mut child = board.clone();
        if let Err(e) = child.drop_piece(column, next) {
            unreachable!("open column {} was rejected: {}", column, e);
        }

        if detect(&child, column).is_none() {
            p += perft_recurse(map, child, next.other(), depth - 1);
        } else if depth == 1 {
            p += 1;
        }
    }

    map.insert(key, p);
    p
}

/// Structure returned by [`average_game_stats`].
#[derive(Debug)]
pub struct GameStats {
    pub game_length: f32,
    pub available_moves: f32,
}

/// Return `GameStats` estimated from `n` games in which `bot` plays both sides, starting with `first`.
pub fn average_game_stats(first: Side, mut bot: impl Bot, n: u64) -> GameStats {
    let mut total_moves = 0;
    let mut total_positions = 0;

    for _ in 0..n {
        let mut board = Board::new();
        let mut side = first;

        loop {
            total_moves += board.available_columns().count();
            total_positions += 1;

            let view = match side {
                Side::Computer => board.clone(),
                Side::Human => board.swap_sides(),
            };
            let column = match bot.select_move(&view) {
                Ok(column) => column,
                Err(_) => break,
            };
            if let Err(e) = board.drop_piece(column, side) {
                panic!("{:?} picked unplayable column: {}", bot, e);
            }
            if detect(&board, column).is_some() {
                break;
            }
            side = side.other();
        }
    }

    GameStats {
        game_length: total_positions as f32 / n as f32,
        available_moves: total_moves as f32 / total_positions as f32,
    }
}
