//! The uniform contract shared by every particle storage layout.

use mote_core::{Particle, Vec2};

use crate::error::StoreError;

/// Uniform capability set over the storage layouts.
///
/// A store owns the particle data for a whole system. Implementations
/// differ in physical arrangement and dead-particle policy but agree on
/// this contract:
///
/// - [`add`](ParticleStore::add) appends one particle and returns its
///   index. Growable layouts always succeed; fixed-capacity layouts
///   return [`StoreError::CapacityExhausted`] when full — a condition
///   the caller must check, not a fatal error.
/// - [`update`](ParticleStore::update) integrates every alive particle
///   exactly once. Whether dead particles are removed depends on the
///   layout and the `compact` flag; removal always reorders via
///   swap-with-last, so logical indices are only stable where the
///   layout documents them to be.
/// - [`positions`](ParticleStore::positions) is a borrowed view,
///   index-aligned with [`len`](ParticleStore::len) and valid until the
///   next mutating call (the borrow checker enforces this).
pub trait ParticleStore {
    /// Add one particle, returning its index in this layout.
    fn add(&mut self, particle: Particle) -> Result<usize, StoreError>;

    /// Number of stored particles (including inert dead ones for
    /// layouts that keep them).
    fn len(&self) -> usize;

    /// Whether the store holds no particles.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Integrate every alive particle by `dt`, then apply the layout's
    /// dead-particle policy (see the layout docs for what `compact`
    /// means there).
    fn update(&mut self, dt: f32, compact: bool);

    /// Read-only view of current positions, index-aligned with `len()`.
    fn positions(&self) -> &[Vec2];

    /// Copy out the full particle state, for testing and inspection
    /// only — never part of steady-state control flow.
    fn snapshot(&self) -> Vec<Particle>;
}
