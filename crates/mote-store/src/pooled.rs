//! Pool-allocated layout: stable slot indices over a free-list pool.

use mote_alloc::FreeListPool;
use mote_core::{Particle, Vec2};

use crate::error::StoreError;
use crate::store::ParticleStore;

/// Pool-allocated particle storage with stable indices.
///
/// Particles occupy slots of a fixed-capacity [`FreeListPool`]; a
/// separate active-index list drives iteration. The index returned by
/// [`add`](ParticleStore::add) is the pool slot, which stays valid
/// across compaction of the active list — slots are only reused after
/// the particle dies and its slot is deallocated.
///
/// Dead-particle policy: removal is unconditional and implicit. Every
/// update deallocates the slots of particles that died and swap-pops
/// their active-list entries, so this layout never reports dead
/// particles through [`len`](ParticleStore::len) or
/// [`positions`](ParticleStore::positions); the `compact` flag is
/// accepted for contract uniformity and ignored.
///
/// Slots are not contiguous, so a position cache sized to the active
/// count is rebuilt by every mutating call.
pub struct PooledStore {
    pool: FreeListPool<Particle>,
    /// Slot indices of live entries, in iteration order.
    active: Vec<u32>,
    /// Position cache, index-aligned with `active`.
    positions: Vec<Vec2>,
}

impl PooledStore {
    /// Create a store with a fixed capacity of pool slots.
    ///
    /// Rejects zero capacity at construction.
    pub fn new(capacity: usize) -> Result<Self, StoreError> {
        Ok(Self {
            pool: FreeListPool::new(capacity)?,
            active: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
        })
    }

    /// Total slot capacity, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }
}

impl ParticleStore for PooledStore {
    fn add(&mut self, particle: Particle) -> Result<usize, StoreError> {
        let Some(slot) = self.pool.allocate() else {
            return Err(StoreError::CapacityExhausted {
                capacity: self.pool.capacity(),
            });
        };

        *self.pool.get_mut(slot) = particle;
        self.active.push(slot as u32);
        self.positions.push(particle.position);
        Ok(slot)
    }

    fn len(&self) -> usize {
        self.active.len()
    }

    fn update(&mut self, dt: f32, _compact: bool) {
        for &slot in &self.active {
            self.pool.get_mut(slot as usize).update(dt);
        }

        // Unconditional removal: dead slots go back to the pool (LIFO,
        // so they are the first reused by the next add).
        let mut i = 0;
        while i < self.active.len() {
            let slot = self.active[i] as usize;
            if self.pool.get(slot).alive {
                i += 1;
            } else {
                self.pool.deallocate(slot);
                self.active.swap_remove(i);
            }
        }

        self.positions.clear();
        self.positions.extend(
            self.active
                .iter()
                .map(|&slot| self.pool.get(slot as usize).position),
        );
    }

    fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    fn snapshot(&self) -> Vec<Particle> {
        self.active
            .iter()
            .map(|&slot| *self.pool.get(slot as usize))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mote_test_utils::{dead_particle, drifting_particle};

    #[test]
    fn starts_empty() {
        let store = PooledStore::new(10).unwrap();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn zero_capacity_rejected() {
        assert!(matches!(
            PooledStore::new(0),
            Err(StoreError::Alloc(_))
        ));
    }

    #[test]
    fn add_increases_size() {
        let mut store = PooledStore::new(10).unwrap();

        store.add(Particle::default()).unwrap();
        assert_eq!(store.len(), 1);

        store.add(Particle::default()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn capacity_limit_is_reported() {
        let mut store = PooledStore::new(2).unwrap();

        let a = store.add(Particle::default()).unwrap();
        let b = store.add(Particle::default()).unwrap();
        assert_ne!(a, b);

        assert_eq!(
            store.add(Particle::default()),
            Err(StoreError::CapacityExhausted { capacity: 2 })
        );
    }

    #[test]
    fn dead_particles_removed_every_update() {
        let mut store = PooledStore::new(4).unwrap();

        store
            .add(drifting_particle(0.0, 0.0, 0.0, 0.0, 10.0))
            .unwrap();
        store.add(dead_particle()).unwrap();
        store
            .add(drifting_particle(0.0, 0.0, 0.0, 0.0, 10.0))
            .unwrap();
        assert_eq!(store.len(), 3);

        // No compaction requested; removal is implicit for this layout.
        store.update(0.016, false);
        assert_eq!(store.len(), 2);
        assert_eq!(store.positions().len(), 2);
    }

    #[test]
    fn slot_reused_after_death() {
        let mut store = PooledStore::new(2).unwrap();

        let first = store.add(dead_particle()).unwrap();
        store.update(0.016, false);

        let second = store
            .add(drifting_particle(0.0, 0.0, 0.0, 0.0, 1.0))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn euler_integration_through_layout() {
        let mut store = PooledStore::new(4).unwrap();
        store
            .add(drifting_particle(1.0, 0.0, 0.5, 0.0, 1.1))
            .unwrap();

        store.update(1.0, false);

        let p = store.snapshot()[0];
        assert_eq!(p.velocity.x, 1.5);
        assert_eq!(p.position.x, 1.5);
        assert!(p.alive);
    }

    #[test]
    fn positions_cache_matches_active_particles() {
        let mut store = PooledStore::new(8).unwrap();
        store
            .add(drifting_particle(1.0, 0.0, 0.0, 0.0, 0.5))
            .unwrap();
        store
            .add(drifting_particle(0.0, 2.0, 0.0, 0.0, 10.0))
            .unwrap();

        store.update(1.0, false);

        // Only the survivor remains, at its integrated position.
        assert_eq!(store.positions(), &[Vec2::new(0.0, 2.0)]);
    }

    #[test]
    fn freed_capacity_can_be_refilled() {
        let mut store = PooledStore::new(2).unwrap();
        store.add(dead_particle()).unwrap();
        store.add(dead_particle()).unwrap();
        assert!(store.add(Particle::default()).is_err());

        store.update(0.016, false);
        assert_eq!(store.len(), 0);

        assert!(store.add(Particle::default()).is_ok());
        assert!(store.add(Particle::default()).is_ok());
    }
}
