//! Spatial partitioning for Mote simulations.
//!
//! This crate defines the [`SpatialPartition`] trait — rebuild an index
//! over current particle positions, then answer "who is near particle
//! `i`?" — and three backends:
//!
//! - [`UniformGrid`]: per-cell heap buckets; the general-purpose choice.
//! - [`ArenaGrid`]: fixed-capacity buckets carved from a per-frame
//!   [`FrameArena`](mote_alloc::FrameArena), trading bucket flexibility
//!   for zero per-cell heap allocation.
//! - [`ExhaustivePartition`]: the whole population as everyone's
//!   neighborhood; a baseline for correctness cross-checks, not for
//!   production scale.
//!
//! Positions are handed in per call as borrowed slices — the borrow
//! checker enforces the "view is valid until the next mutating call"
//! rule that the query results also follow.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena_grid;
pub mod cells;
pub mod config;
pub mod error;
pub mod exhaustive;
pub mod partition;
pub mod uniform;

pub use arena_grid::ArenaGrid;
pub use config::{GridConfig, WorldBounds};
pub use error::PartitionError;
pub use exhaustive::ExhaustivePartition;
pub use partition::SpatialPartition;
pub use uniform::UniformGrid;
