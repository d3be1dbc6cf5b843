//! Storage-layout error types.

use std::error::Error;
use std::fmt;

use mote_alloc::AllocError;

/// Errors that can occur during storage operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A fixed-capacity layout has no free slot left.
    ///
    /// Recoverable: the caller may retry after the next update frees
    /// slots, or construct a larger store.
    CapacityExhausted {
        /// Total slot capacity of the layout.
        capacity: usize,
    },
    /// The backing allocator rejected its configuration.
    Alloc(AllocError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExhausted { capacity } => {
                write!(f, "store capacity exhausted: all {capacity} slots in use")
            }
            Self::Alloc(e) => write!(f, "allocator: {e}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocError> for StoreError {
    fn from(e: AllocError) -> Self {
        Self::Alloc(e)
    }
}
