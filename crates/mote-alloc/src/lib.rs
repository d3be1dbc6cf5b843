//! Allocator primitives for Mote simulations.
//!
//! Two independent allocators back the particle storage layouts and the
//! spatial partition's scratch buffers, keeping steady-state frames free
//! of heap traffic:
//!
//! - [`FreeListPool`]: fixed-capacity slot allocator with stable indices
//!   and LIFO reuse. Backs the pool-allocated particle layout.
//! - [`FrameArena`]: fixed-capacity bump allocator, reset once per frame
//!   in O(1). Hands out generation-checked [`ArenaSlice`] handles instead
//!   of references, so many allocations can be live at once and stale use
//!   after a reset is detectable.
//!
//! Neither allocator depends on particle types; both are plain data
//! structures over `Vec` storage with no `unsafe`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod error;
pub mod pool;

pub use arena::{ArenaSlice, FrameArena};
pub use error::AllocError;
pub use pool::FreeListPool;
