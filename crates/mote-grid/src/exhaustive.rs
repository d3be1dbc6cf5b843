//! Trivial partition: everyone neighbors everyone.

use mote_alloc::FrameArena;
use mote_core::Vec2;

use crate::error::PartitionError;
use crate::partition::SpatialPartition;

/// The no-partition baseline.
///
/// Every particle's neighborhood is the entire population, minus itself
/// when `exclude_self` is set. Exists for correctness cross-checks
/// against the real grids and as the O(n²) reference in benchmarks —
/// not for production use at scale.
pub struct ExhaustivePartition {
    exclude_self: bool,
    count: usize,
    scratch: Vec<u32>,
}

impl ExhaustivePartition {
    /// Create the baseline partition.
    pub fn new(exclude_self: bool) -> Self {
        Self {
            exclude_self,
            count: 0,
            scratch: Vec::new(),
        }
    }
}

impl SpatialPartition for ExhaustivePartition {
    fn build(
        &mut self,
        positions: &[Vec2],
        _arena: &mut FrameArena,
    ) -> Result<(), PartitionError> {
        self.count = positions.len();
        Ok(())
    }

    fn query_neighborhood(
        &mut self,
        positions: &[Vec2],
        _arena: &FrameArena,
        id: u32,
    ) -> &[u32] {
        debug_assert!(
            (id as usize) < positions.len(),
            "query id {id} out of range"
        );

        self.scratch.clear();
        for i in 0..self.count as u32 {
            if self.exclude_self && i == id {
                continue;
            }
            self.scratch.push(i);
        }
        &self.scratch
    }

    fn clear(&mut self) {
        self.count = 0;
        self.scratch.clear();
    }
}
