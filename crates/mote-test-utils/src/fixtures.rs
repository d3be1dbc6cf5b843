//! Particle fixtures: hand-built particles and seeded random clouds.

use mote_core::{Particle, Vec2};
use mote_grid::WorldBounds;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// An alive particle at the origin with the given kinematics.
pub fn drifting_particle(vx: f32, vy: f32, ax: f32, ay: f32, lifetime: f32) -> Particle {
    Particle::new(
        Vec2::ZERO,
        Vec2::new(vx, vy),
        Vec2::new(ax, ay),
        lifetime,
    )
}

/// A particle that is already dead when added.
pub fn dead_particle() -> Particle {
    Particle {
        alive: false,
        ..Particle::default()
    }
}

/// Uniformly scattered positions inside `bounds`, deterministic per seed.
pub fn scatter_positions(n: usize, bounds: WorldBounds, seed: u64) -> Vec<Vec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Vec2::new(
                rng.random_range(bounds.min_x..=bounds.max_x),
                rng.random_range(bounds.min_y..=bounds.max_y),
            )
        })
        .collect()
}

/// A cloud of alive particles scattered inside `bounds` with randomised
/// velocities and lifetimes, deterministic per seed.
pub fn particle_cloud(n: usize, bounds: WorldBounds, seed: u64) -> Vec<Particle> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Particle::new(
                Vec2::new(
                    rng.random_range(bounds.min_x..=bounds.max_x),
                    rng.random_range(bounds.min_y..=bounds.max_y),
                ),
                Vec2::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0)),
                Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
                rng.random_range(0.5..30.0),
            )
        })
        .collect()
}
