//! Utilities to run bots against each other and report the results.
use std::fmt::{Debug, Formatter};
use std::time::Instant;

use log::debug;

use crate::ai::Bot;
use crate::board::{Board, Outcome, Side};
use crate::outcome::detect;
use crate::util::rating::elo_from_wdl;
use crate::wdl::{POV, WDL};

/// Run `bot_l` against `bot_r` for `games_per_side` pairs of games.
///
/// The left bot always owns the [Side::Computer] pieces and the right bot the [Side::Human] pieces,
/// every pair consists of one game where the left bot starts and one where the right bot starts.
/// Bots in the human seat are shown a board with swapped sides, so both of them search as the computer.
///
/// `callback` is called after every game with the running result from the left bot POV.
#[must_use]
pub fn run<L: Bot, R: Bot>(
    bot_l: impl Fn() -> L,
    bot_r: impl Fn() -> R,
    games_per_side: u32,
    callback: impl Fn(WDL<u32>, &Replay),
) -> BotGameResult {
    let debug_l = format!("{:?}", bot_l());
    let debug_r = format!("{:?}", bot_r());

    let game_count = 2 * games_per_side;
    let mut partial_wdl = WDL::<u32>::default();

    let replays: Vec<Replay> = (0..game_count)
        .map(|game_i| {
            let first = if game_i % 2 == 0 { Side::Computer } else { Side::Human };
            let replay = play_single_game(first, &mut bot_l(), &mut bot_r());

            partial_wdl += replay.outcome.pov(Side::Computer).to_wdl();
            debug!("game {} started by {:?}: {:?}", game_i, first, replay.outcome);
            callback(partial_wdl, &replay);

            replay
        })
        .collect();

    let total_time_l = replays.iter().map(|r| r.total_time_l).sum::<f32>();
    let total_time_r = replays.iter().map(|r| r.total_time_r).sum::<f32>();
    let move_count_l = replays.iter().map(|r| r.move_count_l).sum::<u32>();
    let move_count_r = replays.iter().map(|r| r.move_count_r).sum::<u32>();

    BotGameResult {
        game_count,
        average_game_length: replays.iter().map(|r| r.moves.len() as f32).sum::<f32>() / game_count as f32,
        wdl_l: partial_wdl,
        time_l: total_time_l / move_count_l as f32,
        time_r: total_time_r / move_count_r as f32,
        debug_l,
        debug_r,
        replays,
    }
}

/// Play a single game from the empty board, `bot_l` owns the computer pieces and `bot_r` the human pieces.
pub fn play_single_game(first: Side, bot_l: &mut impl Bot, bot_r: &mut impl Bot) -> Replay {
    let mut board = Board::new();
    let mut side = first;

    let mut total_time_l = 0.0;
    let mut total_time_r = 0.0;
    let mut move_count_l: u32 = 0;
    let mut move_count_r: u32 = 0;
    let mut moves = vec![];

    let outcome = loop {
        let start_time = Instant::now();
        let selected = match side {
            Side::Computer => {
                let selected = bot_l.select_move(&board);
                total_time_l += start_time.elapsed().as_secs_f32();
                move_count_l += 1;
                selected
            }
            Side::Human => {
                let selected = bot_r.select_move(&board.swap_sides());
                total_time_r += start_time.elapsed().as_secs_f32();
                move_count_r += 1;
                selected
            }
        };

        // a full board is always detected as a draw after the last move, so there is always an open column here
        let mv = match selected {
            Ok(mv) => mv,
            Err(e) => panic!("{:?} to move on\n{}\nbut {}", side, board, e),
        };
        if let Err(e) = board.drop_piece(mv, side) {
            panic!("{:?} played an unavailable move: {}\n{}", side, e, board);
        }
        moves.push(mv);

        if let Some(outcome) = detect(&board, mv) {
            break outcome;
        }
        side = side.other();
    };

    Replay {
        first,
        moves,
        outcome,
        total_time_l,
        total_time_r,
        move_count_l,
        move_count_r,
        debug_l: format!("{:?}", bot_l),
        debug_r: format!("{:?}", bot_r),
    }
}

#[derive(Debug, Clone)]
pub struct Replay {
    pub first: Side,
    pub moves: Vec<usize>,
    pub outcome: Outcome,

    pub total_time_l: f32,
    pub total_time_r: f32,
    pub move_count_l: u32,
    pub move_count_r: u32,

    pub debug_l: String,
    pub debug_r: String,
}

/// Structure returned by the function [`run`].
pub struct BotGameResult {
    pub game_count: u32,
    pub replays: Vec<Replay>,

    pub average_game_length: f32,
    pub wdl_l: WDL<u32>,

    //time per move in seconds
    pub time_l: f32,
    pub time_r: f32,

    pub debug_l: String,
    pub debug_r: String,
}

impl Debug for BotGameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(f, "  left      {:?}", self.wdl_l,)?;
        writeln!(
            f,
            "  left      {:.3?}",
            self.wdl_l.to_f64() / self.game_count as f64
        )?;
        writeln!(f, "  left elo: {:.1}", elo_from_wdl(self.wdl_l.to_f64()))?;
        writeln!(f, "  time_l:   {:.4}, time_r: {:.4}", self.time_l, self.time_r)?;
        writeln!(f, "  left:     {}", self.debug_l)?;
        writeln!(f, "  right:    {}", self.debug_r)?;
        writeln!(f, "}}")?;

        Ok(())
    }
}
