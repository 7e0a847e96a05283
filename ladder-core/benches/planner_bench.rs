//! Criterion benchmarks for planner hot paths.
//!
//! Benchmarks:
//! 1. Fastest route materialization vs. counting only
//! 2. Slowest route materialization
//! 3. Compromise search (dominated by the reachable-range scan)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ladder_core::{battle_count, compromise_route, fastest_route, slowest_route, Rank};

const START_RANKS: [i64; 4] = [13, 100, 1_000, 15_000];

fn ranks() -> impl Iterator<Item = Rank> {
    START_RANKS.iter().map(|&v| Rank::new(v).unwrap())
}

fn bench_fastest(c: &mut Criterion) {
    let mut group = c.benchmark_group("fastest");
    for rank in ranks() {
        group.bench_with_input(BenchmarkId::new("route", rank), &rank, |b, &r| {
            b.iter(|| fastest_route(black_box(r)))
        });
        group.bench_with_input(BenchmarkId::new("count", rank), &rank, |b, &r| {
            b.iter(|| battle_count(black_box(r)))
        });
    }
    group.finish();
}

fn bench_slowest(c: &mut Criterion) {
    let mut group = c.benchmark_group("slowest");
    for rank in ranks() {
        group.bench_with_input(BenchmarkId::from_parameter(rank), &rank, |b, &r| {
            b.iter(|| slowest_route(black_box(r)))
        });
    }
    group.finish();
}

fn bench_compromise(c: &mut Criterion) {
    let mut group = c.benchmark_group("compromise");
    for rank in ranks() {
        group.bench_with_input(BenchmarkId::from_parameter(rank), &rank, |b, &r| {
            b.iter(|| compromise_route(black_box(r)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fastest, bench_slowest, bench_compromise);
criterion_main!(benches);
