//! Test utilities and fixtures for Mote development.
//!
//! Deterministic particle constructors and seeded random clouds shared
//! by unit tests, scenario tests, and benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{dead_particle, drifting_particle, particle_cloud, scatter_positions};
