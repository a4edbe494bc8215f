#![warn(missing_debug_implementations)]

//! Connect four on a 7x6 board, played by a human against a computer opponent.
//!
//! The computer picks its moves with a full-width minimax search of fixed depth,
//! see [minimax](crate::ai::minimax::minimax). Positions are only scored by their outcome:
//! faster wins are preferred, losses and draws are pushed as far into the future as possible,
//! and unfinished positions at the depth limit are neutral.
//!
//! The crate contains:
//! * The [Board](crate::board::Board) itself, a grid where pieces drop to the lowest empty row of a column.
//! * The [outcome detector](crate::outcome::detect) that checks for a win or draw after each move.
//! * The [SearchNode](crate::ai::minimax::SearchNode) game tree and the
//!     [MinimaxBot](crate::ai::minimax::MinimaxBot) built on top of it.
//! * The entry points a front-end needs, see [game](crate::game).
//! * Utilities to generate boards, run [bot matches](crate::util::bot_game) and count positions.
//!
//! # Examples
//!
//! ## Answer a human move with the computer's best move.
//!
//! ```
//! use connect4_minimax::board::Side;
//! use connect4_minimax::game::{drop_piece, initialise_board, select_computer_move};
//!
//! let board = initialise_board();
//! let (board, outcome) = drop_piece(&board, 3, Side::Human).unwrap();
//! assert_eq!(outcome, None);
//!
//! let column = select_computer_move(&board).unwrap();
//! let (board, _) = drop_piece(&board, column, Side::Computer).unwrap();
//! println!("{}", board);
//! ```

pub mod board;
pub mod outcome;
pub mod wdl;

pub mod ai;

pub mod game;

pub mod util;
