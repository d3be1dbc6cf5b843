//! Mote: a particle simulation core built around memory layout.
//!
//! Simulates large populations (10³–10⁶) of simple physical particles
//! and answers "who is near particle `i`?" every frame. The interesting
//! surface is not the physics — semi-implicit Euler over position,
//! velocity, and a bounded lifetime — but where the bytes live:
//! pluggable storage layouts, a uniform-grid spatial index, and
//! allocator primitives that keep steady-state frames off the heap.
//!
//! This is the top-level facade crate re-exporting the public API from
//! all Mote sub-crates; adding `mote` as a single dependency is enough
//! for most users.
//!
//! # Quick start
//!
//! ```rust
//! use mote::prelude::*;
//!
//! // A 100x100 world indexed at cell size 10.
//! let grid = UniformGrid::new(GridConfig {
//!     cell_size: 10.0,
//!     world: WorldBounds::new(0.0, 0.0, 100.0, 100.0),
//!     exclude_self: false,
//!     neighbor_reserve: 64,
//! })
//! .unwrap();
//!
//! let mut system = ParticleSystem::new(SoaStore::new(), SystemConfig::default()).unwrap();
//! system.set_partition(Box::new(grid));
//!
//! // Two particles one cell apart.
//! system
//!     .add_particle(Particle::new(Vec2::new(5.0, 5.0), Vec2::ZERO, Vec2::ZERO, 10.0))
//!     .unwrap();
//! system
//!     .add_particle(Particle::new(Vec2::new(15.0, 5.0), Vec2::ZERO, Vec2::ZERO, 10.0))
//!     .unwrap();
//!
//! // One frame: integrate, then rebuild the index.
//! let metrics = system.update(1.0 / 60.0, true).unwrap();
//! assert!(metrics.partition_rebuilt);
//!
//! // Adjacent cells see each other.
//! let neighbors = system.query_neighborhood(0);
//! assert!(neighbors.contains(&1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mote-core` | `Vec2`, `Particle`, `TickId` |
//! | [`alloc`] | `mote-alloc` | `FreeListPool`, `FrameArena`, `ArenaSlice` |
//! | [`store`] | `mote-store` | `ParticleStore` and the AoS/SoA/pooled layouts |
//! | [`grid`] | `mote-grid` | `SpatialPartition` and the grid backends |
//! | [`engine`] | `mote-engine` | `ParticleSystem`, `SystemConfig`, `StepMetrics` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`mote-core`).
pub use mote_core as types;

/// Allocator primitives (`mote-alloc`).
pub use mote_alloc as alloc;

/// Storage layouts (`mote-store`).
pub use mote_store as store;

/// Spatial partitioning (`mote-grid`).
pub use mote_grid as grid;

/// Per-frame orchestration (`mote-engine`).
pub use mote_engine as engine;

/// The most commonly used items, re-exported flat.
pub mod prelude {
    pub use mote_alloc::{ArenaSlice, FrameArena, FreeListPool};
    pub use mote_core::{Particle, TickId, Vec2};
    pub use mote_engine::{ParticleSystem, StepMetrics, SystemConfig, SystemError};
    pub use mote_grid::{
        ArenaGrid, ExhaustivePartition, GridConfig, SpatialPartition, UniformGrid, WorldBounds,
    };
    pub use mote_store::{AosStore, ParticleStore, PooledStore, SoaStore, StoreError};
}
