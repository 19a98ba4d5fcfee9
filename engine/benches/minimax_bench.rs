use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tictactoe_engine::games::tictactoe::{best_move, Board, Side};

fn bench_self_played_game() {
    let mut board = Board::new();
    let mut side = Side::X;

    while let Some(index) = best_move(&board, side).index {
        board = match board.apply_move(index, side) {
            Ok(next) => next,
            Err(_) => break,
        };
        side = side.opponent();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);

    let empty = Board::new();
    group.bench_function("single_move_empty", |b| {
        b.iter(|| best_move(black_box(&empty), Side::X))
    });

    let mid_game: Board = "X../.O./..X".parse().unwrap();
    group.bench_function("single_move_mid_game", |b| {
        b.iter(|| best_move(black_box(&mid_game), Side::O))
    });

    group.bench_function("self_played_game", |b| {
        b.iter(bench_self_played_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
