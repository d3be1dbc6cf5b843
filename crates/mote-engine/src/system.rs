//! The particle system: one layout, one optional partition, one arena.

use std::time::Instant;

use mote_alloc::FrameArena;
use mote_core::{Particle, TickId, Vec2};
use mote_grid::SpatialPartition;
use mote_store::ParticleStore;

use crate::config::{SystemConfig, SystemError};
use crate::metrics::StepMetrics;

/// Orchestrates the per-frame pipeline over a storage layout and an
/// optional spatial partition.
///
/// The layout is a static type parameter (each layout is a different
/// simulation configuration, fixed at construction); the partition is a
/// boxed trait object and can be attached, swapped, or detached at any
/// time, taking effect on the next [`update()`](ParticleSystem::update).
///
/// # Frame pipeline
///
/// 1. `store.update(dt, compact)` — integrate every alive particle,
///    apply the layout's dead-particle policy.
/// 2. If a partition is attached: reset the frame arena, then
///    `partition.build()` with the layout's fresh positions view.
///
/// The partition therefore always indexes the post-integration positions
/// of the current frame, and all arena allocations live exactly one
/// frame.
pub struct ParticleSystem<S: ParticleStore> {
    store: S,
    partition: Option<Box<dyn SpatialPartition>>,
    arena: FrameArena,
    tick: TickId,
    metrics: StepMetrics,
}

impl<S: ParticleStore> ParticleSystem<S> {
    /// Create a system over `store` with no partition attached.
    pub fn new(store: S, config: SystemConfig) -> Result<Self, SystemError> {
        Ok(Self {
            store,
            partition: None,
            arena: FrameArena::new(config.arena_bytes)?,
            tick: TickId(0),
            metrics: StepMetrics::default(),
        })
    }

    /// Attach (or replace) the spatial partition.
    ///
    /// Takes effect on the next [`update()`](ParticleSystem::update);
    /// queries before then run against whatever the partition already
    /// contains.
    pub fn set_partition(&mut self, partition: Box<dyn SpatialPartition>) {
        self.partition = Some(partition);
    }

    /// Detach the partition, returning it.
    pub fn take_partition(&mut self) -> Option<Box<dyn SpatialPartition>> {
        self.partition.take()
    }

    /// Add one particle, returning its index in the layout.
    pub fn add_particle(&mut self, particle: Particle) -> Result<usize, SystemError> {
        Ok(self.store.add(particle)?)
    }

    /// Run one frame of the pipeline.
    ///
    /// Returns this frame's metrics. A partition rebuild failure (bucket
    /// overflow, arena exhaustion) aborts the frame after integration;
    /// the layout has already advanced, and the partition must not be
    /// queried until a later `update` succeeds.
    pub fn update(&mut self, dt: f32, compact: bool) -> Result<&StepMetrics, SystemError> {
        let frame_start = Instant::now();

        let integrate_start = Instant::now();
        self.store.update(dt, compact);
        let integrate_us = integrate_start.elapsed().as_micros() as u64;

        let mut build_us = 0;
        let mut rebuilt = false;
        if let Some(partition) = &mut self.partition {
            self.arena.reset();
            let build_start = Instant::now();
            partition.build(self.store.positions(), &mut self.arena)?;
            build_us = build_start.elapsed().as_micros() as u64;
            rebuilt = true;
        }

        self.tick = self.tick.next();
        self.metrics = StepMetrics {
            tick: self.tick,
            total_us: frame_start.elapsed().as_micros() as u64,
            integrate_us,
            build_us,
            live: self.store.len(),
            partition_rebuilt: rebuilt,
            arena_used_bytes: self.arena.used(),
        };
        Ok(&self.metrics)
    }

    /// Indices near particle `id`, per the attached partition.
    ///
    /// Runs against the positions of the last `update`. Returns the
    /// empty slice when no partition is attached. The result aliases
    /// the partition's scratch buffer and is invalidated by the next
    /// query or update.
    pub fn query_neighborhood(&mut self, id: u32) -> &[u32] {
        match &mut self.partition {
            Some(partition) => {
                partition.query_neighborhood(self.store.positions(), &self.arena, id)
            }
            None => &[],
        }
    }

    /// Number of stored particles.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the system holds no particles.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The layout's current positions view.
    pub fn positions(&self) -> &[Vec2] {
        self.store.positions()
    }

    /// Copy out the full particle state (testing and inspection only).
    pub fn snapshot(&self) -> Vec<Particle> {
        self.store.snapshot()
    }

    /// Metrics of the most recent frame.
    pub fn metrics(&self) -> &StepMetrics {
        &self.metrics
    }

    /// Frames run so far.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Borrow the underlying layout.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mote_grid::{ExhaustivePartition, GridConfig, UniformGrid, WorldBounds};
    use mote_store::AosStore;
    use mote_test_utils::drifting_particle;

    fn grid() -> Box<UniformGrid> {
        Box::new(
            UniformGrid::new(GridConfig {
                cell_size: 10.0,
                world: WorldBounds::new(0.0, 0.0, 100.0, 100.0),
                ..GridConfig::default()
            })
            .unwrap(),
        )
    }

    #[test]
    fn add_and_size() {
        let mut system = ParticleSystem::new(AosStore::new(), SystemConfig::default()).unwrap();
        assert_eq!(system.len(), 0);

        system.add_particle(Particle::default()).unwrap();
        system.add_particle(Particle::default()).unwrap();
        assert_eq!(system.len(), 2);
    }

    #[test]
    fn update_without_partition_only_integrates() {
        let mut system = ParticleSystem::new(AosStore::new(), SystemConfig::default()).unwrap();
        system
            .add_particle(drifting_particle(1.0, 0.0, 0.5, 0.0, 1.1))
            .unwrap();

        let metrics = system.update(1.0, true).unwrap();
        assert!(!metrics.partition_rebuilt);
        assert_eq!(metrics.live, 1);
        assert_eq!(metrics.tick, TickId(1));

        let p = system.snapshot()[0];
        assert_eq!(p.position.x, 1.5);
    }

    #[test]
    fn query_without_partition_is_empty() {
        let mut system = ParticleSystem::new(AosStore::new(), SystemConfig::default()).unwrap();
        system.add_particle(Particle::default()).unwrap();
        system.update(0.016, false).unwrap();
        assert!(system.query_neighborhood(0).is_empty());
    }

    #[test]
    fn partition_reflects_post_integration_positions() {
        let mut system = ParticleSystem::new(AosStore::new(), SystemConfig::default()).unwrap();
        system.set_partition(grid());

        // Starts at (5, 5); after dt=1 sits at (15, 5) — one cell over.
        let mut p = drifting_particle(10.0, 0.0, 0.0, 0.0, 100.0);
        p.position = Vec2::new(5.0, 5.0);
        system.add_particle(p).unwrap();

        let mut q = drifting_particle(0.0, 0.0, 0.0, 0.0, 100.0);
        q.position = Vec2::new(25.0, 5.0);
        system.add_particle(q).unwrap();

        let metrics = system.update(1.0, false).unwrap();
        assert!(metrics.partition_rebuilt);

        // At build time particle 0 is in cell (1,0), adjacent to
        // particle 1's cell (2,0): both see each other.
        let n0 = system.query_neighborhood(0).to_vec();
        assert!(n0.contains(&1));
    }

    #[test]
    fn set_partition_takes_effect_on_next_update() {
        let mut system = ParticleSystem::new(AosStore::new(), SystemConfig::default()).unwrap();
        system.add_particle(Particle::default()).unwrap();
        system.update(0.0, false).unwrap();

        system.set_partition(Box::new(ExhaustivePartition::new(false)));
        // Not built yet: the partition has seen no positions.
        assert!(system.query_neighborhood(0).is_empty());

        system.update(0.0, false).unwrap();
        assert_eq!(system.query_neighborhood(0), &[0]);
    }

    #[test]
    fn take_partition_detaches() {
        let mut system = ParticleSystem::new(AosStore::new(), SystemConfig::default()).unwrap();
        system.set_partition(grid());
        system.add_particle(Particle::default()).unwrap();
        system.update(0.0, false).unwrap();

        assert!(system.take_partition().is_some());
        assert!(system.query_neighborhood(0).is_empty());
        assert!(!system.update(0.0, false).unwrap().partition_rebuilt);
    }

    #[test]
    fn zero_arena_capacity_rejected() {
        let config = SystemConfig { arena_bytes: 0 };
        assert!(ParticleSystem::new(AosStore::new(), config).is_err());
    }

    #[test]
    fn tick_advances_every_frame() {
        let mut system = ParticleSystem::new(AosStore::new(), SystemConfig::default()).unwrap();
        for expected in 1..=5u64 {
            system.update(0.016, false).unwrap();
            assert_eq!(system.tick(), TickId(expected));
        }
    }
}
