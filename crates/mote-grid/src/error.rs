//! Partition error types.

use std::error::Error;
use std::fmt;

use mote_alloc::AllocError;

/// Errors arising from partition construction or per-frame rebuilds.
#[derive(Clone, Debug, PartialEq)]
pub enum PartitionError {
    /// Cell size must be finite and strictly positive.
    InvalidCellSize {
        /// The rejected value.
        value: f32,
    },
    /// World bounds are inverted or non-finite.
    InvalidBounds {
        /// What was wrong with them.
        reason: String,
    },
    /// Arena-backed buckets need room for at least one entry.
    ZeroBucketCapacity,
    /// A fixed-capacity bucket overflowed during a rebuild.
    ///
    /// Hard failure for this frame: the index is not usable until the
    /// next successful `build()`. Recover by raising the bucket
    /// capacity or the cell size.
    BucketOverflow {
        /// Flat index of the overflowing cell.
        cell: usize,
        /// The configured per-bucket capacity.
        capacity: usize,
    },
    /// The frame arena could not satisfy a scratch allocation.
    Alloc(AllocError),
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize { value } => {
                write!(f, "cell size must be finite and positive, got {value}")
            }
            Self::InvalidBounds { reason } => {
                write!(f, "invalid world bounds: {reason}")
            }
            Self::ZeroBucketCapacity => {
                write!(f, "bucket capacity must be at least 1")
            }
            Self::BucketOverflow { cell, capacity } => {
                write!(
                    f,
                    "bucket for cell {cell} overflowed its capacity of {capacity}"
                )
            }
            Self::Alloc(e) => write!(f, "arena: {e}"),
        }
    }
}

impl Error for PartitionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocError> for PartitionError {
    fn from(e: AllocError) -> Self {
        Self::Alloc(e)
    }
}
