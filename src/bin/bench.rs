use std::cell::Cell;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use connect4_minimax::ai::minimax::{minimax, MinimaxBot, MAX_DEPTH};
use connect4_minimax::ai::simple::RandomBot;
use connect4_minimax::board::Board;
use connect4_minimax::util::bot_game;
use connect4_minimax::util::tiny::seeded_rng;

/// Time the minimax search and measure its strength against a random opponent.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The deepest search depth to benchmark.
    #[arg(long, default_value_t = MAX_DEPTH)]
    depth: u32,

    /// Number of game pairs to play against the random bot, 0 to skip.
    #[arg(long, default_value_t = 10)]
    games: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .context("failed to set up logging")?;

    let board = Board::new();
    for depth in 0..=args.depth {
        let nodes = minimax(&board, depth).node_count;
        bench(&format!("minimax depth {} ({} nodes)", depth, nodes), || {
            minimax(&board, depth);
        });
    }

    if args.games > 0 {
        let depth = args.depth;
        let seed = Cell::new(0);
        let result = bot_game::run(
            || MinimaxBot::new(depth),
            || {
                seed.set(seed.get() + 1);
                RandomBot::new(seeded_rng(seed.get()))
            },
            args.games,
            |wdl, replay| println!("{:?} after {} moves, running {:?}", replay.outcome, replay.moves.len(), wdl),
        );
        println!("{:?}", result);
    }

    Ok(())
}

const ITERATION_COUNT: usize = 10;
const REMOVED_OUTLIERS_PER_SIDE: usize = 1;

fn bench(name: &str, mut f: impl FnMut()) {
    assert!(ITERATION_COUNT > REMOVED_OUTLIERS_PER_SIDE * 2);
    println!("Running benchmark {}", name);

    let mut timings = vec![];
    for _ in 0..ITERATION_COUNT {
        let start = Instant::now();
        f();
        timings.push(start.elapsed());
    }

    // remove outliers
    for _ in 0..REMOVED_OUTLIERS_PER_SIDE {
        if let Some(i) = timings.iter().position_min() {
            timings.remove(i);
        }
        if let Some(i) = timings.iter().position_max() {
            timings.remove(i);
        }
    }

    let timings = timings.iter().map(|d| d.as_secs_f32() * 1000.0).collect_vec();
    let mean = timings.iter().sum::<f32>() / timings.len() as f32;
    let stddev = (timings.iter().map(|&f| (f - mean).powi(2)).sum::<f32>() / timings.len() as f32).sqrt();

    println!("  {:.2}ms\t +- {:.2}ms", mean, stddev);
}
