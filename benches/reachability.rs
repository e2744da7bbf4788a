//! Benchmarks for reachability checks.
//!
//! `path_exists` runs twice per fence validation, so it is the hot path of
//! the placement validator.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use quoridor_rules::core::{Fence, FenceRequest, FenceSet, GameState, Player, Position};
use quoridor_rules::rules::{path_exists, validate_fence_placement};

/// Walls across rows 1, 3 and 5, each open only in column 8.
fn maze() -> FenceSet {
    let mut fences = FenceSet::new();
    for row in [1u8, 3, 5] {
        for x in [0u8, 2, 4, 6] {
            fences.insert(Fence::horizontal(x, row));
        }
    }
    fences
}

fn bench_path_exists(c: &mut Criterion) {
    let open = FenceSet::new();
    let maze = maze();

    c.bench_function("path_exists_open", |b| {
        b.iter(|| path_exists(black_box(&open), black_box(Position::new(4, 0)), black_box(8)));
    });

    c.bench_function("path_exists_maze", |b| {
        b.iter(|| path_exists(black_box(&maze), black_box(Position::new(0, 0)), black_box(8)));
    });
}

fn bench_fence_validation(c: &mut Criterion) {
    let mut state = GameState::new();
    state.fences = maze();
    let request = FenceRequest::new(7, 6, "h");

    c.bench_function("validate_fence_placement_maze", |b| {
        b.iter(|| validate_fence_placement(black_box(&state), Player::First, black_box(&request)));
    });
}

criterion_group!(benches, bench_path_exists, bench_fence_validation);
criterion_main!(benches);
