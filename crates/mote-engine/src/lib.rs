//! Per-frame simulation orchestrator for Mote particle systems.
//!
//! [`ParticleSystem`] owns one storage layout, optionally one spatial
//! partition, and the frame arena that backs the partition's per-frame
//! scratch. Each [`update()`](ParticleSystem::update) call runs the
//! frame pipeline in a fixed order: integrate (and optionally compact)
//! the layout, then reset the arena and rebuild the partition from the
//! layout's fresh positions — so the spatial index always reflects the
//! post-integration positions of the same frame.
//!
//! The system is stateless between frames beyond what the layout and
//! partition retain; there is no internal scheduling and every call
//! runs to completion on the calling thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod system;

pub use config::{SystemConfig, SystemError};
pub use metrics::StepMetrics;
pub use system::ParticleSystem;
