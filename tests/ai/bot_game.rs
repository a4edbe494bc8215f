use std::cell::Cell;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use connect4_minimax::ai::minimax::MinimaxBot;
use connect4_minimax::ai::simple::RandomBot;
use connect4_minimax::ai::Bot;
use connect4_minimax::board::{Board, Outcome, Side};
use connect4_minimax::outcome::detect;
use connect4_minimax::util::board_gen::board_with_moves;
use connect4_minimax::util::bot_game;
use connect4_minimax::util::game_stats::average_game_stats;
use connect4_minimax::util::tiny::consistent_rng;

/// A fresh random bot for every game, so the games are not all identical.
fn random_bots() -> impl Fn() -> RandomBot<SmallRng> {
    let seed = Cell::new(0);
    move || {
        seed.set(seed.get() + 1);
        RandomBot::new(SmallRng::seed_from_u64(seed.get()))
    }
}

#[test]
fn minimax_beats_random() {
    let result = bot_game::run(
        || MinimaxBot::new(3),
        random_bots(),
        5,
        |wdl, replay| println!("{:?} {:?}", replay.outcome, wdl),
    );
    println!("{:?}", result);

    assert_eq!(result.game_count, 10);
    assert_eq!(result.replays.len(), 10);
    assert_eq!(result.wdl_l.sum(), 10);
    assert!(result.wdl_l.win >= 7, "minimax should beat random, got {:?}", result.wdl_l);

    for replay in &result.replays {
        check_replay(replay);
    }
}

#[test]
fn minimax_beats_random_from_the_human_seat() {
    let result = bot_game::run(
        random_bots(),
        || MinimaxBot::new(3),
        5,
        |_, _| {},
    );
    println!("{:?}", result);

    assert!(result.wdl_l.loss >= 7, "minimax should beat random, got {:?}", result.wdl_l);
}

#[test]
fn first_mover_alternates() {
    let result = bot_game::run(
        random_bots(),
        random_bots(),
        3,
        |_, _| {},
    );

    let firsts: Vec<Side> = result.replays.iter().map(|r| r.first).collect();
    assert_eq!(
        firsts,
        vec![Side::Computer, Side::Human, Side::Computer, Side::Human, Side::Computer, Side::Human]
    );
    for replay in &result.replays {
        check_replay(replay);
    }
}

#[test]
fn random_bot_plays_open_columns() {
    let mut bot = RandomBot::new(consistent_rng());
    let board = board_with_moves(Side::Human, &[0, 0, 0, 0, 0, 0]);

    for _ in 0..100 {
        let column = bot.select_move(&board).unwrap();
        assert!(!board.is_column_full(column));
    }
}

#[test]
fn game_stats_are_sane() {
    let stats = average_game_stats(Side::Human, RandomBot::new(consistent_rng()), 20);
    println!("{:?}", stats);

    assert!(stats.game_length >= 7.0 && stats.game_length <= Board::TILES as f32);
    assert!(stats.available_moves > 1.0 && stats.available_moves <= Board::WIDTH as f32);
}

/// Replay the moves and check that the game ends exactly on the last move with the recorded outcome.
fn check_replay(replay: &bot_game::Replay) {
    let mut board = Board::new();
    let mut side = replay.first;
    let mut outcome: Option<Outcome> = None;

    for &mv in &replay.moves {
        assert_eq!(outcome, None, "game continued after it was finished");
        board.drop_piece(mv, side).unwrap();
        outcome = detect(&board, mv);
        side = side.other();
    }

    assert_eq!(outcome, Some(replay.outcome));
}
