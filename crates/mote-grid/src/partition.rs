//! The spatial partition trait.

use mote_alloc::FrameArena;
use mote_core::Vec2;

use crate::error::PartitionError;

/// A rebuilt-per-frame index over particle positions answering
/// bounded-radius neighbor queries.
///
/// The orchestrator drives one cycle per frame: reset the frame arena,
/// [`build`](SpatialPartition::build) with the layout's fresh positions
/// view, then any number of
/// [`query_neighborhood`](SpatialPartition::query_neighborhood) calls
/// against the same positions. Positions are borrowed per call — the
/// caller guarantees the same slice (same frame) is used for the build
/// and its queries.
///
/// Query results alias an internal scratch buffer: at most one result
/// is valid at a time, and the next query or
/// [`clear`](SpatialPartition::clear) invalidates it. The `&mut self`
/// receiver makes that rule a compile-time property.
pub trait SpatialPartition {
    /// Rebuild the index wholesale from `positions`.
    ///
    /// Backends that keep per-frame state in the arena allocate it
    /// here; heap-backed backends ignore the arena. Errors are hard
    /// failures for this frame — the index must not be queried until a
    /// subsequent `build` succeeds.
    fn build(
        &mut self,
        positions: &[Vec2],
        arena: &mut FrameArena,
    ) -> Result<(), PartitionError>;

    /// Indices of the particles in the neighborhood of `id`.
    ///
    /// `positions` and `arena` must be the ones the last successful
    /// [`build`](SpatialPartition::build) ran against; `id` must be a
    /// valid index into `positions` (violations are debug assertions).
    /// Result order is unspecified; when the partition is configured
    /// with self-exclusion, `id` itself is absent.
    fn query_neighborhood(
        &mut self,
        positions: &[Vec2],
        arena: &FrameArena,
        id: u32,
    ) -> &[u32];

    /// Drop all indexed contents, retaining allocated storage for the
    /// next build.
    fn clear(&mut self);
}
