use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use connect4_minimax::ai::minimax::{MinimaxBot, MAX_DEPTH};
use connect4_minimax::ai::Bot;
use connect4_minimax::board::{Board, Outcome, Side};
use connect4_minimax::game::{drop_piece, initialise_board};
use connect4_minimax::wdl::{OutcomeWDL, POV};

/// Play connect four against the computer in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Let the computer make the first move of the first game.
    #[arg(long)]
    computer_first: bool,

    /// How many plies the computer searches ahead.
    #[arg(long, default_value_t = MAX_DEPTH)]
    depth: u32,

    /// Log more, repeat for even more output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to set up logging")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut bot = MinimaxBot::new(args.depth);
    let mut human_first = !args.computer_first;

    loop {
        info!("Starting new game, human first: {}", human_first);

        let outcome = match play_game(&mut lines, &mut bot, human_first)? {
            Some(outcome) => outcome,
            None => return Ok(()),
        };

        let message = match outcome.pov(Side::Human) {
            OutcomeWDL::Win => "You win!",
            OutcomeWDL::Draw => "Draw!",
            OutcomeWDL::Loss => "Computer wins!",
        };
        println!("{}", message);

        print!("Play again? [y/N] ");
        io::stdout().flush()?;
        let again = match lines.next() {
            Some(line) => line?.trim().eq_ignore_ascii_case("y"),
            None => false,
        };
        if !again {
            return Ok(());
        }

        // the other side gets to start the next game
        human_first = !human_first;
    }
}

/// Play a single game, returns `None` if the input was closed before the game finished.
fn play_game(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    bot: &mut MinimaxBot,
    human_first: bool,
) -> Result<Option<Outcome>> {
    let mut board = initialise_board();
    let mut side = if human_first { Side::Human } else { Side::Computer };

    loop {
        println!("{}", board);

        let column = match side {
            Side::Human => match read_column(lines, &board)? {
                Some(column) => column,
                None => return Ok(None),
            },
            Side::Computer => {
                let column = bot.select_move(&board)?;
                println!("Computer plays column {}", column);
                column
            }
        };

        let (next, outcome) = drop_piece(&board, column, side)?;
        board = next;

        if let Some(outcome) = outcome {
            println!("{}", board);
            return Ok(Some(outcome));
        }
        side = side.other();
    }
}

/// Ask for a column until an open one is entered, returns `None` if the input was closed.
fn read_column(lines: &mut impl Iterator<Item = io::Result<String>>, board: &Board) -> Result<Option<usize>> {
    loop {
        print!("Your move [0-{}]: ", Board::WIDTH - 1);
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };

        match line.trim().parse::<usize>() {
            Ok(column) if column < Board::WIDTH && !board.is_column_full(column) => return Ok(Some(column)),
            Ok(column) if column < Board::WIDTH => println!("Column {} is full", column),
            _ => println!("Expected a column between 0 and {}", Board::WIDTH - 1),
        }
    }
}
