//! Struct-of-arrays layout: five parallel sequences, index-aligned.

use mote_core::{Particle, Vec2};

use crate::error::StoreError;
use crate::store::ParticleStore;

/// Struct-of-arrays particle storage.
///
/// One growable sequence per field — position, velocity, acceleration,
/// lifetime, alive — with index `i` across all five denoting one logical
/// particle. The alignment of the five sequences is the central
/// invariant of this layout and holds at every step, including
/// mid-compaction: removal swap-pops all five sequences in lockstep.
///
/// The position sequence is contiguous `Vec2`s, so
/// [`positions`](ParticleStore::positions) borrows it directly with no
/// cache. Dead-particle policy matches [`AosStore`](crate::AosStore):
/// removal only happens on a compacting update.
#[derive(Debug, Default)]
pub struct SoaStore {
    position: Vec<Vec2>,
    velocity: Vec<Vec2>,
    acceleration: Vec<Vec2>,
    lifetime: Vec<f32>,
    alive: Vec<bool>,
}

impl SoaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` particles in each
    /// field sequence before reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            position: Vec::with_capacity(capacity),
            velocity: Vec::with_capacity(capacity),
            acceleration: Vec::with_capacity(capacity),
            lifetime: Vec::with_capacity(capacity),
            alive: Vec::with_capacity(capacity),
        }
    }

    /// Remove index `i` from all five sequences at once.
    fn swap_pop(&mut self, i: usize) {
        self.position.swap_remove(i);
        self.velocity.swap_remove(i);
        self.acceleration.swap_remove(i);
        self.lifetime.swap_remove(i);
        self.alive.swap_remove(i);
    }

    /// Reassemble the particle at index `i` from the field sequences.
    fn particle(&self, i: usize) -> Particle {
        Particle {
            position: self.position[i],
            velocity: self.velocity[i],
            acceleration: self.acceleration[i],
            lifetime: self.lifetime[i],
            alive: self.alive[i],
        }
    }
}

impl ParticleStore for SoaStore {
    fn add(&mut self, particle: Particle) -> Result<usize, StoreError> {
        self.position.push(particle.position);
        self.velocity.push(particle.velocity);
        self.acceleration.push(particle.acceleration);
        self.lifetime.push(particle.lifetime);
        self.alive.push(particle.alive);
        Ok(self.alive.len() - 1)
    }

    fn len(&self) -> usize {
        self.alive.len()
    }

    fn update(&mut self, dt: f32, compact: bool) {
        for i in 0..self.alive.len() {
            if !self.alive[i] {
                continue;
            }

            self.velocity[i] += self.acceleration[i] * dt;
            self.position[i] += self.velocity[i] * dt;

            self.lifetime[i] -= dt;
            if self.lifetime[i] <= 0.0 {
                self.alive[i] = false;
            }
        }

        if compact {
            let mut i = 0;
            while i < self.alive.len() {
                if self.alive[i] {
                    i += 1;
                } else {
                    self.swap_pop(i);
                }
            }
        }
    }

    fn positions(&self) -> &[Vec2] {
        &self.position
    }

    fn snapshot(&self) -> Vec<Particle> {
        (0..self.len()).map(|i| self.particle(i)).collect()
    }
}
