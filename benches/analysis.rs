//! Benchmarks for the structural analysis pipeline.
//!
//! Measures:
//! - Grid construction (linear in sectors)
//! - Passage flood fill (linear in cells)
//! - Symmetry search (cubic in sectors; the dominant cost)
//! - The full `analyze` pass
//!
//! Both widths are benchmarked: the 256-bit grid has 64 sectors, the
//! 160-bit grid 40, so the symmetry search gap should be roughly 4x.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hashmandala::prelude::*;

/// Fixed inputs per width, derived from text so the bit patterns are
/// realistic rather than degenerate.
fn fixtures() -> Vec<(HashBits, HashInput)> {
    vec![
        (HashBits::B256, HashInput::from_text("bench-256", HashBits::B256)),
        (HashBits::B160, HashInput::from_text("bench-160", HashBits::B160)),
    ]
}

fn bench_grid_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_build");
    for (bits, input) in fixtures() {
        group.bench_function(BenchmarkId::from_parameter(bits), |b| {
            b.iter(|| BitGrid::build(black_box(&input)));
        });
    }
    group.finish();
}

fn bench_passages(c: &mut Criterion) {
    let mut group = c.benchmark_group("passages");
    for (bits, input) in fixtures() {
        let grid = BitGrid::build(&input);
        group.bench_function(BenchmarkId::from_parameter(bits), |b| {
            b.iter(|| hashmandala::passage::count_passages(black_box(&grid)));
        });
    }
    group.finish();
}

fn bench_symmetries(c: &mut Criterion) {
    let mut group = c.benchmark_group("symmetries");
    for (bits, input) in fixtures() {
        let grid = BitGrid::build(&input);
        group.bench_function(BenchmarkId::from_parameter(bits), |b| {
            b.iter(|| hashmandala::symmetry::find_symmetries(black_box(&grid), black_box(&input)));
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for (bits, input) in fixtures() {
        let hex = input.hex().to_owned();
        group.bench_function(BenchmarkId::from_parameter(bits), |b| {
            b.iter(|| analyze(black_box(&hex), bits).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_grid_build,
    bench_passages,
    bench_symmetries,
    bench_analyze
);
criterion_main!(benches);
