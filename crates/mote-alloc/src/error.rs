//! Allocator-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during allocator construction or allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// An allocator was constructed with zero capacity.
    ZeroCapacity {
        /// Which allocator rejected the configuration.
        allocator: &'static str,
    },
    /// An arena capacity does not fit the handle encoding.
    CapacityTooLarge {
        /// The requested capacity in bytes.
        requested: usize,
        /// The largest supported capacity in bytes.
        max: usize,
    },
    /// A frame arena allocation would exceed the remaining capacity.
    ArenaExhausted {
        /// Number of bytes requested (including alignment padding).
        requested: usize,
        /// Total arena capacity in bytes.
        capacity: usize,
        /// Bytes already allocated this frame.
        used: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity { allocator } => {
                write!(f, "{allocator} requires a non-zero capacity")
            }
            Self::CapacityTooLarge { requested, max } => {
                write!(
                    f,
                    "arena capacity {requested} bytes exceeds the maximum of {max} bytes"
                )
            }
            Self::ArenaExhausted {
                requested,
                capacity,
                used,
            } => {
                write!(
                    f,
                    "arena exhausted: requested {requested} bytes, {used} of {capacity} in use"
                )
            }
        }
    }
}

impl Error for AllocError {}
