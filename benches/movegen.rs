//! Benchmarks for move generation and perft.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fianco::{legal_moves, perft, Board, Match, MatchConfig};

fn benchmark_legal_moves(c: &mut Criterion) {
    let start = Board::new();
    let midgame = {
        let mut game = Match::random(MatchConfig::default().with_seed(11).with_max_plies(30));
        match game.play() {
            Ok(summary) => summary.final_board,
            Err(_) => Board::new(),
        }
    };

    let mut group = c.benchmark_group("Legal moves");
    group.bench_function("start", |b| b.iter(|| black_box(legal_moves(black_box(&start)))));
    group.bench_function("midgame", |b| {
        b.iter(|| black_box(legal_moves(black_box(&midgame))))
    });
    group.finish();
}

fn benchmark_perft(c: &mut Criterion) {
    let board = Board::new();
    let mut group = c.benchmark_group("Perft");

    for depth in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("start/depth", depth), &depth, |b, &depth| {
            b.iter(|| black_box(perft(&board, black_box(depth)).ok()));
        });
    }
    group.finish();
}

fn benchmark_random_match(c: &mut Criterion) {
    c.bench_function("random match", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            black_box(Match::random(MatchConfig::default().with_seed(seed)).play())
        });
    });
}

criterion_group!(benches, benchmark_legal_moves, benchmark_perft, benchmark_random_match);
criterion_main!(benches);
