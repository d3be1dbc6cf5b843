//! Uniform grid with arena-backed fixed-capacity buckets.

use mote_alloc::{ArenaSlice, FrameArena};
use mote_core::Vec2;

use crate::cells::{block_around, cell_of, flat_index, GridDims};
use crate::config::GridConfig;
use crate::error::PartitionError;
use crate::partition::SpatialPartition;

/// Uniform grid whose buckets live in the per-frame arena.
///
/// Instead of per-cell heap vectors, every `build` carves one block of
/// `cell_count * bucket_capacity` index slots out of the frame arena
/// and fills fixed-capacity rows in it, tracking per-cell lengths in a
/// reused table. A bucket that would overflow its row is a hard failure
/// for the frame ([`PartitionError::BucketOverflow`]) — the trade for
/// never touching the heap per cell.
///
/// Because the arena is reset every frame, the index must be rebuilt
/// fully each frame; the block handle from a previous generation is
/// unusable by construction.
#[derive(Debug)]
pub struct ArenaGrid {
    config: GridConfig,
    dims: GridDims,
    bucket_capacity: usize,
    /// Per-cell fill counts, reused across frames.
    lens: Vec<u32>,
    /// This frame's bucket block, `None` until a successful build.
    block: Option<ArenaSlice<u32>>,
    scratch: Vec<u32>,
}

impl ArenaGrid {
    /// Create a grid whose every cell holds at most `bucket_capacity`
    /// particle indices per frame.
    pub fn new(config: GridConfig, bucket_capacity: usize) -> Result<Self, PartitionError> {
        config.validate()?;
        if bucket_capacity == 0 {
            return Err(PartitionError::ZeroBucketCapacity);
        }

        let dims = GridDims::from_config(&config);
        Ok(Self {
            config,
            dims,
            bucket_capacity,
            lens: vec![0; dims.cell_count()],
            block: None,
            scratch: Vec::with_capacity(config.neighbor_reserve),
        })
    }

    /// Flat cell index a position bins into (clamped at the borders).
    pub fn cell_index(&self, x: f32, y: f32) -> usize {
        let (cx, cy) = cell_of(&self.config.world, self.config.cell_size, self.dims, x, y);
        flat_index(self.dims, cx, cy)
    }

    /// The configured per-cell bucket capacity.
    pub fn bucket_capacity(&self) -> usize {
        self.bucket_capacity
    }

    /// Arena bytes one build of this grid requires.
    ///
    /// Useful for sizing the frame arena up front.
    pub fn arena_bytes_per_build(&self) -> usize {
        self.dims.cell_count() * self.bucket_capacity * std::mem::size_of::<u32>()
    }
}

impl SpatialPartition for ArenaGrid {
    fn build(
        &mut self,
        positions: &[Vec2],
        arena: &mut FrameArena,
    ) -> Result<(), PartitionError> {
        let cells = self.dims.cell_count();
        self.lens.clear();
        self.lens.resize(cells, 0);
        self.block = None;

        let block = arena.alloc_slice::<u32>(cells * self.bucket_capacity)?;
        let rows = arena.slice_mut(block);

        for (i, p) in positions.iter().enumerate() {
            let (cx, cy) = cell_of(&self.config.world, self.config.cell_size, self.dims, p.x, p.y);
            let cell = flat_index(self.dims, cx, cy);

            let len = self.lens[cell] as usize;
            if len == self.bucket_capacity {
                return Err(PartitionError::BucketOverflow {
                    cell,
                    capacity: self.bucket_capacity,
                });
            }
            rows[cell * self.bucket_capacity + len] = i as u32;
            self.lens[cell] = len as u32 + 1;
        }

        self.block = Some(block);
        Ok(())
    }

    fn query_neighborhood(
        &mut self,
        positions: &[Vec2],
        arena: &FrameArena,
        id: u32,
    ) -> &[u32] {
        debug_assert!(
            (id as usize) < positions.len(),
            "query id {id} out of range"
        );

        self.scratch.clear();
        let Some(block) = self.block else {
            debug_assert!(false, "query_neighborhood before a successful build");
            return &self.scratch;
        };
        let rows = arena.slice(block);

        let p = positions[id as usize];
        let (cx, cy) = cell_of(&self.config.world, self.config.cell_size, self.dims, p.x, p.y);

        for cell in block_around(self.dims, cx, cy) {
            let start = cell * self.bucket_capacity;
            let len = self.lens[cell] as usize;
            self.scratch.extend_from_slice(&rows[start..start + len]);
        }

        if self.config.exclude_self {
            if let Some(pos) = self.scratch.iter().position(|&n| n == id) {
                self.scratch.swap_remove(pos);
            }
        }

        &self.scratch
    }

    fn clear(&mut self) {
        self.lens.clear();
        self.lens.resize(self.dims.cell_count(), 0);
        self.block = None;
        self.scratch.clear();
    }
}
