//! Array-of-structs layout: one growable sequence of particle records.

use mote_core::{Particle, Vec2};

use crate::error::StoreError;
use crate::store::ParticleStore;

/// Array-of-structs particle storage.
///
/// Particles live in a single `Vec<Particle>`; insertion order is the
/// iteration order until a compacting update reorders it. A parallel
/// position cache keeps [`positions`](ParticleStore::positions) a cheap
/// contiguous borrow (the records themselves interleave position with
/// the rest of the particle state).
///
/// Dead-particle policy: a non-compacting update leaves dead particles
/// in place — inert, excluded from integration by the alive check, but
/// still present in `positions()`. Callers that care must filter via
/// the alive flag in [`snapshot`](ParticleStore::snapshot). A compacting
/// update removes them via swap-with-last-and-pop, so any particle's
/// index may change across it.
#[derive(Debug, Default)]
pub struct AosStore {
    particles: Vec<Particle>,
    /// Position cache, index-aligned with `particles` after every
    /// mutating call.
    positions: Vec<Vec2>,
}

impl AosStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` particles before
    /// reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
        }
    }
}

impl ParticleStore for AosStore {
    fn add(&mut self, particle: Particle) -> Result<usize, StoreError> {
        self.particles.push(particle);
        self.positions.push(particle.position);
        Ok(self.particles.len() - 1)
    }

    fn len(&self) -> usize {
        self.particles.len()
    }

    fn update(&mut self, dt: f32, compact: bool) {
        // Integrate first; compaction must not double-step a particle
        // swapped in from the tail.
        for (p, pos) in self.particles.iter_mut().zip(self.positions.iter_mut()) {
            p.update(dt);
            *pos = p.position;
        }

        if compact {
            let mut i = 0;
            while i < self.particles.len() {
                if self.particles[i].alive {
                    i += 1;
                } else {
                    self.particles.swap_remove(i);
                    self.positions.swap_remove(i);
                }
            }
        }
    }

    fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    fn snapshot(&self) -> Vec<Particle> {
        self.particles.clone()
    }
}
