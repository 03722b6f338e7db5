//! Criterion benchmarks for pipeline construction and evaluation.
//! Focus sizes: steps in {1, 4, 16, 64}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p coordxfer

use coordxfer::prelude::*;
use coordxfer::transfer::rand::draw_points;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn steps_of(len: usize, seed: u64) -> Vec<TransferStep> {
    draw_steps(
        StepCfg {
            len,
            ..StepCfg::default()
        },
        ReplayToken::new(seed, 0),
    )
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let points = draw_points(256, 100.0, ReplayToken::new(7, 1));
    for &n in &[1usize, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("build", n), &n, |b, &n| {
            b.iter_batched(
                || steps_of(n, 43),
                |steps| {
                    let _pl = build_pipeline(&steps).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        let pl = build_pipeline(&steps_of(n, 44)).unwrap();
        group.bench_with_input(BenchmarkId::new("forward", n), &n, |b, _| {
            b.iter(|| {
                for p in &points {
                    black_box(pl.forward(*p));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("round_trip", n), &n, |b, _| {
            b.iter(|| black_box(pl.max_round_trip_error(&points)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
