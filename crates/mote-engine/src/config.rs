//! System configuration and error types.

use std::error::Error;
use std::fmt;

use mote_alloc::AllocError;
use mote_grid::PartitionError;
use mote_store::StoreError;

/// Configuration for a [`ParticleSystem`](crate::ParticleSystem).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Copy, Debug)]
pub struct SystemConfig {
    /// Capacity of the per-frame arena in bytes.
    ///
    /// Sized once from the expected particle count — an arena-backed
    /// grid needs [`arena_bytes_per_build`] plus query scratch. The
    /// default of 1 MiB covers the heap-bucket grid (which only uses
    /// the arena as a pass-through) and small arena-backed grids.
    ///
    /// [`arena_bytes_per_build`]: mote_grid::ArenaGrid::arena_bytes_per_build
    pub arena_bytes: usize,
}

impl SystemConfig {
    /// Default arena capacity: 1 MiB.
    pub const DEFAULT_ARENA_BYTES: usize = 1024 * 1024;
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            arena_bytes: Self::DEFAULT_ARENA_BYTES,
        }
    }
}

/// Errors surfaced by the orchestrator.
#[derive(Clone, Debug, PartialEq)]
pub enum SystemError {
    /// The frame arena rejected its configuration.
    Alloc(AllocError),
    /// The storage layout reported a failure (capacity exhaustion).
    Store(StoreError),
    /// The partition failed to rebuild this frame.
    Partition(PartitionError),
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc(e) => write!(f, "alloc: {e}"),
            Self::Store(e) => write!(f, "store: {e}"),
            Self::Partition(e) => write!(f, "partition: {e}"),
        }
    }
}

impl Error for SystemError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::Partition(e) => Some(e),
        }
    }
}

impl From<AllocError> for SystemError {
    fn from(e: AllocError) -> Self {
        Self::Alloc(e)
    }
}

impl From<StoreError> for SystemError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<PartitionError> for SystemError {
    fn from(e: PartitionError) -> Self {
        Self::Partition(e)
    }
}
