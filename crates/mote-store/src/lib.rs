//! Particle storage layouts for Mote simulations.
//!
//! This crate defines the [`ParticleStore`] trait — the uniform contract
//! every layout satisfies — and three physically different arrangements
//! of the same particle data:
//!
//! - [`AosStore`]: one growable sequence of [`Particle`] records.
//! - [`SoaStore`]: five parallel sequences, index-aligned.
//! - [`PooledStore`]: fixed-capacity free-list pool with stable slot
//!   indices plus an active-index list.
//!
//! All three produce numerically identical simulation results for the
//! same inputs; they differ only in memory layout, dead-particle policy,
//! and index stability. See each type's docs for its compaction rules.
//!
//! [`Particle`]: mote_core::Particle

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aos;
pub mod error;
pub mod pooled;
pub mod soa;
pub mod store;

pub use aos::AosStore;
pub use error::StoreError;
pub use pooled::PooledStore;
pub use soa::SoaStore;
pub use store::ParticleStore;
