//! Uniform grid with per-cell heap buckets.

use mote_alloc::FrameArena;
use mote_core::Vec2;

use crate::cells::{block_around, cell_of, flat_index, GridDims};
use crate::config::{GridConfig, WorldBounds};
use crate::error::PartitionError;
use crate::partition::SpatialPartition;

/// Uniform spatial grid over heap-allocated buckets.
///
/// The world rectangle is divided into `cell_size`-sized cells; each
/// cell owns a growable bucket of particle indices. `build` rebins the
/// whole population every call, reusing bucket capacity from previous
/// frames, so steady-state frames allocate nothing.
///
/// Queries gather the 3×3 block of cells around the queried particle.
/// With `exclude_self` set, the particle's own index is swap-removed
/// from the result, so result order is not stable.
pub struct UniformGrid {
    config: GridConfig,
    dims: GridDims,
    buckets: Vec<Vec<u32>>,
    scratch: Vec<u32>,
}

impl UniformGrid {
    /// Create a grid from a validated configuration.
    pub fn new(config: GridConfig) -> Result<Self, PartitionError> {
        config.validate()?;
        let dims = GridDims::from_config(&config);
        Ok(Self {
            config,
            dims,
            buckets: vec![Vec::new(); dims.cell_count()],
            scratch: Vec::with_capacity(config.neighbor_reserve),
        })
    }

    /// Rebuild the grid dimensions for a new cell size and world
    /// rectangle, dropping current bucket contents.
    pub fn resize_grid(
        &mut self,
        cell_size: f32,
        world: WorldBounds,
    ) -> Result<(), PartitionError> {
        let config = GridConfig {
            cell_size,
            world,
            ..self.config
        };
        config.validate()?;

        self.config = config;
        self.dims = GridDims::from_config(&self.config);
        self.buckets.clear();
        self.buckets.resize(self.dims.cell_count(), Vec::new());
        Ok(())
    }

    /// Flat cell index a position bins into (clamped at the borders).
    pub fn cell_index(&self, x: f32, y: f32) -> usize {
        let (cx, cy) = cell_of(&self.config.world, self.config.cell_size, self.dims, x, y);
        flat_index(self.dims, cx, cy)
    }

    /// Grid width in cells.
    pub fn grid_width(&self) -> usize {
        self.dims.width
    }

    /// Grid height in cells.
    pub fn grid_height(&self) -> usize {
        self.dims.height
    }

    /// The active configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }
}

impl SpatialPartition for UniformGrid {
    fn build(
        &mut self,
        positions: &[Vec2],
        _arena: &mut FrameArena,
    ) -> Result<(), PartitionError> {
        for bucket in &mut self.buckets {
            bucket.clear();
        }

        for (i, p) in positions.iter().enumerate() {
            let cell = self.cell_index(p.x, p.y);
            self.buckets[cell].push(i as u32);
        }
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

        let p = positions[id as usize];
        let (cx, cy) = cell_of(&self.config.world, self.config.cell_size, self.dims, p.x, p.y);

        self.scratch.clear();
        for cell in block_around(self.dims, cx, cy) {
            self.scratch.extend_from_slice(&self.buckets[cell]);
        }

        if self.config.exclude_self {
            // Buckets are small; a linear scan beats bookkeeping.
            if let Some(pos) = self.scratch.iter().position(|&n| n == id) {
                self.scratch.swap_remove(pos);
            }
        }

        &self.scratch
    }

    fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.scratch.clear();
    }
}
