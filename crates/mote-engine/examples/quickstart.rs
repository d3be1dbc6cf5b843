//! Mote quickstart — a complete, minimal particle simulation.
//!
//! Demonstrates:
//!   1. Choosing a storage layout (SoA here)
//!   2. Configuring a uniform grid over the world rectangle
//!   3. Seeding particles and stepping the per-frame pipeline
//!   4. Running neighbor queries against the rebuilt index
//!
//! Run with:
//!   cargo run --example quickstart

use mote_core::{Particle, Vec2};
use mote_engine::{ParticleSystem, SystemConfig};
use mote_grid::{GridConfig, UniformGrid, WorldBounds};
use mote_store::SoaStore;

const WORLD: WorldBounds = WorldBounds::new(0.0, 0.0, 200.0, 200.0);
const CELL_SIZE: f32 = 10.0;
const DT: f32 = 1.0 / 60.0;
const FRAMES: usize = 120;

fn main() {
    let grid = UniformGrid::new(GridConfig {
        cell_size: CELL_SIZE,
        world: WORLD,
        exclude_self: true,
        neighbor_reserve: 64,
    })
    .expect("valid grid config");

    let mut system =
        ParticleSystem::new(SoaStore::new(), SystemConfig::default()).expect("valid system config");
    system.set_partition(Box::new(grid));

    // A ring of particles drifting outward under light gravity, with
    // staggered lifetimes so compaction has something to do.
    for i in 0..500 {
        let angle = i as f32 * 0.012566; // 2*pi / 500
        let center = Vec2::new(100.0, 100.0);
        let dir = Vec2::new(angle.cos(), angle.sin());
        system
            .add_particle(Particle::new(
                center + dir * 20.0,
                dir * 8.0,
                Vec2::new(0.0, -2.0),
                1.0 + (i % 10) as f32 * 0.2,
            ))
            .expect("growable layout never exhausts");
    }

    println!("seeded {} particles", system.len());

    for frame in 0..FRAMES {
        let metrics = system.update(DT, true).expect("grid rebuild");

        if frame % 30 == 0 {
            println!(
                "tick {:>3}: {:>3} alive, integrate {:>4}us, build {:>4}us",
                metrics.tick, metrics.live, metrics.integrate_us, metrics.build_us
            );
        }
    }

    // Who is still near the first surviving particle?
    if !system.is_empty() {
        let neighbors = system.query_neighborhood(0);
        println!("particle 0 has {} neighbors left", neighbors.len());
    } else {
        println!("everyone expired");
    }
}
