//! Benchmark profiles and utilities for the Mote particle simulation.
//!
//! Provides pre-built configurations shared by the criterion benches:
//!
//! - [`bench_world`]: the 1000x1000 world rectangle every grid bench uses
//! - [`grid_profile`]: a [`GridConfig`] over that world at a given cell size
//! - [`seeded_cloud`]: deterministic particle cloud sized for a bench run

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mote_core::Particle;
use mote_grid::{GridConfig, WorldBounds};
use mote_test_utils::particle_cloud;

/// The world rectangle used across partitioning benchmarks.
pub fn bench_world() -> WorldBounds {
    WorldBounds::new(0.0, 0.0, 1000.0, 1000.0)
}

/// Grid configuration over [`bench_world`] at the given cell size.
pub fn grid_profile(cell_size: f32) -> GridConfig {
    GridConfig {
        cell_size,
        world: bench_world(),
        exclude_self: false,
        neighbor_reserve: 64,
    }
}

/// A deterministic cloud of `n` alive particles inside [`bench_world`].
pub fn seeded_cloud(n: usize) -> Vec<Particle> {
    particle_cloud(n, bench_world(), 12345)
}
