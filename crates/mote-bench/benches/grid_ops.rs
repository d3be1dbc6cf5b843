//! Criterion benchmarks for spatial partition build and query.
//!
//! Mirrors the matrix that motivated the design: build and query at
//! 1k/10k/50k/100k particles, cell sizes 0.5/1/2 world units, with the
//! exhaustive baseline at small N for scale.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mote_alloc::FrameArena;
use mote_bench::{bench_world, grid_profile};
use mote_core::Vec2;
use mote_grid::{ArenaGrid, ExhaustivePartition, SpatialPartition, UniformGrid};
use mote_test_utils::scatter_positions;

const SIZES: [usize; 4] = [1_000, 10_000, 50_000, 100_000];

fn positions(n: usize) -> Vec<Vec2> {
    scatter_positions(n, bench_world(), 12345)
}

fn scratch_arena(n: usize) -> FrameArena {
    // Room for an arena-grid block plus padding, scaled to population.
    FrameArena::new(n * std::mem::size_of::<u32>() * 32 + 64 * 1024).unwrap()
}

/// Benchmark: rebuild the index from scratch each frame.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_build");
    for &n in &SIZES {
        let pos = positions(n);
        group.bench_with_input(BenchmarkId::new("uniform", n), &n, |b, &size| {
            let mut grid = UniformGrid::new(grid_profile(1.0)).unwrap();
            let mut arena = scratch_arena(size);
            b.iter(|| {
                arena.reset();
                grid.build(black_box(&pos), &mut arena).unwrap();
            });
        });
    }
    for &n in &[1_000usize, 10_000, 20_000] {
        let pos = positions(n);
        group.bench_with_input(BenchmarkId::new("exhaustive", n), &n, |b, &size| {
            let mut part = ExhaustivePartition::new(false);
            let mut arena = scratch_arena(size);
            b.iter(|| {
                arena.reset();
                part.build(black_box(&pos), &mut arena).unwrap();
            });
        });
    }
    group.finish();
}

/// Benchmark: query every particle once against a built index.
fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_query");

    for cell_size in [0.5f32, 1.0, 2.0] {
        for &n in &SIZES {
            let pos = positions(n);
            let id = format!("uniform/cell{cell_size}");
            group.bench_with_input(BenchmarkId::new(id, n), &n, |b, &n| {
                let mut grid = UniformGrid::new(grid_profile(cell_size)).unwrap();
                let mut arena = scratch_arena(n);
                grid.build(&pos, &mut arena).unwrap();
                b.iter(|| {
                    for i in 0..n as u32 {
                        black_box(grid.query_neighborhood(&pos, &arena, i));
                    }
                });
            });
        }
    }

    // Arena-backed buckets at cell size 2 (dense enough to fill rows).
    for &n in &SIZES {
        let pos = positions(n);
        group.bench_with_input(BenchmarkId::new("arena/cell2", n), &n, |b, &n| {
            let mut grid = ArenaGrid::new(grid_profile(2.0), 64).unwrap();
            let mut arena =
                FrameArena::new(grid.arena_bytes_per_build() + 64 * 1024).unwrap();
            grid.build(&pos, &mut arena).unwrap();
            b.iter(|| {
                for i in 0..n as u32 {
                    black_box(grid.query_neighborhood(&pos, &arena, i));
                }
            });
        });
    }

    for &n in &[1_000usize, 10_000, 20_000] {
        let pos = positions(n);
        group.bench_with_input(BenchmarkId::new("exhaustive", n), &n, |b, &n| {
            let mut part = ExhaustivePartition::new(false);
            let mut arena = scratch_arena(n);
            part.build(&pos, &mut arena).unwrap();
            b.iter(|| {
                for i in 0..n as u32 {
                    black_box(part.query_neighborhood(&pos, &arena, i));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
