//! Criterion micro-benchmarks for the priority-flood solver.

use std::hint::black_box;

use basin_bench::{nested_rings, reference_profile, stress_profile};
use basin_solver::{solve, solve_with, SeedOrder, SolverOptions};
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: solve a 100x100 random terrain.
fn bench_solve_reference(c: &mut Criterion) {
    let grid = reference_profile(42).unwrap();

    c.bench_function("solve_100x100", |b| {
        b.iter(|| black_box(solve(black_box(&grid)).volume));
    });
}

/// Benchmark: solve a 316x316 random terrain.
fn bench_solve_stress(c: &mut Criterion) {
    let grid = stress_profile(42).unwrap();

    let mut group = c.benchmark_group("stress");
    group.sample_size(20);
    group.bench_function("solve_316x316", |b| {
        b.iter(|| black_box(solve(black_box(&grid)).volume));
    });
    group.finish();
}

/// Benchmark: shuffled border seeding on the reference terrain.
fn bench_solve_shuffled(c: &mut Criterion) {
    let grid = reference_profile(42).unwrap();
    let options = SolverOptions {
        seed_order: SeedOrder::Shuffled { seed: 7 },
    };

    c.bench_function("solve_100x100_shuffled", |b| {
        b.iter(|| black_box(solve_with(black_box(&grid), &options).volume));
    });
}

/// Benchmark: concentric basins, many distinct frontier levels.
fn bench_solve_nested_rings(c: &mut Criterion) {
    let grid = nested_rings(301).unwrap();

    c.bench_function("solve_nested_rings_301", |b| {
        b.iter(|| black_box(solve(black_box(&grid)).volume));
    });
}

criterion_group!(
    benches,
    bench_solve_reference,
    bench_solve_stress,
    bench_solve_shuffled,
    bench_solve_nested_rings
);
criterion_main!(benches);
