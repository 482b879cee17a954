use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use board_rules::core::{AlignmentConfig, BoardConfig, Position};
use board_rules::games::{OthelloGame, TicTacToeGame};
use board_rules::rollout::{play_random_game, RolloutConfig};
use board_rules::rules::Game;

/// Forbid the four corners of an `n x n` board.
fn corners(n: usize) -> Vec<Position> {
    vec![
        Position::new(0, 0),
        Position::new(0, n - 1),
        Position::new(n - 1, 0),
        Position::new(n - 1, n - 1),
    ]
}

fn bench_valid_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid_moves");
    for n in [6usize, 8, 10] {
        let config = BoardConfig::new(n).with_forbidden_positions(&corners(n)).unwrap();
        let game = OthelloGame::new(config).unwrap();
        // Mid-game position from a short seeded rollout
        let rollout = play_random_game(&game, &RolloutConfig::new(7).with_max_moves(n * 2));
        let grid = rollout.final_grid;
        let player = rollout.final_player;

        group.bench_with_input(BenchmarkId::new("othello", n), &n, |b, _| {
            b.iter(|| game.valid_moves(black_box(&grid), player))
        });
    }
    group.finish();
}

fn bench_game_ended(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_ended");
    for n in [3usize, 7, 15] {
        let config = AlignmentConfig::new(n).with_winning_amount(n.min(5));
        let game = TicTacToeGame::new(config).unwrap();
        let rollout = play_random_game(&game, &RolloutConfig::new(11).with_max_moves(n));
        let grid = rollout.final_grid;
        let player = rollout.final_player;

        group.bench_with_input(BenchmarkId::new("tictactoe", n), &n, |b, _| {
            b.iter(|| game.game_ended(black_box(&grid), player))
        });
    }
    group.finish();
}

fn bench_symmetries(c: &mut Criterion) {
    let mut group = c.benchmark_group("symmetries");
    for n in [8usize, 12] {
        let game = OthelloGame::open(n).unwrap();
        let grid = game.initial_grid();
        let policy = vec![1.0 / (n * n + 1) as f32; n * n + 1];

        group.bench_with_input(BenchmarkId::new("othello_open", n), &n, |b, _| {
            b.iter(|| game.symmetries(black_box(&grid), black_box(&policy)))
        });
    }
    group.finish();
}

fn bench_rollout(c: &mut Criterion) {
    let game = OthelloGame::open(8).unwrap();
    let mut seed = 0u64;
    c.bench_function("rollout/othello_8", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            play_random_game(&game, &RolloutConfig::new(seed))
        })
    });
}

criterion_group!(
    rules_benches,
    bench_valid_moves,
    bench_game_ended,
    bench_symmetries,
    bench_rollout
);
criterion_main!(rules_benches);
