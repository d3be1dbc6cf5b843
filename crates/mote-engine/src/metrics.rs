//! Per-frame performance metrics.

use mote_core::TickId;

/// Timing and occupancy data for a single frame.
///
/// All durations are in microseconds. The system populates a fresh
/// value on every [`update()`](crate::ParticleSystem::update); consumers
/// read it from the returned reference or from
/// [`metrics()`](crate::ParticleSystem::metrics) afterwards.
#[derive(Clone, Debug, Default)]
pub struct StepMetrics {
    /// The frame these metrics describe.
    pub tick: TickId,
    /// Wall-clock time for the whole frame, in microseconds.
    pub total_us: u64,
    /// Time spent integrating (and compacting) the layout, in microseconds.
    pub integrate_us: u64,
    /// Time spent rebuilding the spatial partition, in microseconds.
    /// Zero when no partition is attached.
    pub build_us: u64,
    /// Particles stored after the frame.
    pub live: usize,
    /// Whether a partition rebuild ran this frame.
    pub partition_rebuilt: bool,
    /// Frame-arena bytes in use after the rebuild.
    pub arena_used_bytes: usize,
}
