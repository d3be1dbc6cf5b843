//! Shared cell-index math for the grid backends.

use smallvec::SmallVec;

use crate::config::{GridConfig, WorldBounds};

/// Grid dimensions derived from bounds and cell size.
///
/// `width = max(1, ceil(world_width / cell_size))`, same for height, so
/// even a degenerate world maps every position to a valid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDims {
    /// Number of cell columns.
    pub width: usize,
    /// Number of cell rows.
    pub height: usize,
}

impl GridDims {
    /// Derive dimensions from a validated config.
    pub fn from_config(config: &GridConfig) -> Self {
        let width = (config.world.width() / config.cell_size).ceil().max(1.0) as usize;
        let height = (config.world.height() / config.cell_size).ceil().max(1.0) as usize;
        Self { width, height }
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// Map a world position to its clamped cell coordinate.
///
/// `cell_x = floor((x - min_x) / cell_size)` clamped into
/// `[0, width - 1]`, analogous for y. Out-of-bounds positions land in
/// the border cells rather than being rejected, so stray particles
/// still participate in queries at the boundary.
pub fn cell_of(world: &WorldBounds, cell_size: f32, dims: GridDims, x: f32, y: f32) -> (usize, usize) {
    let cx = ((x - world.min_x) / cell_size).floor();
    let cy = ((y - world.min_y) / cell_size).floor();
    let cx = (cx.max(0.0) as usize).min(dims.width - 1);
    let cy = (cy.max(0.0) as usize).min(dims.height - 1);
    (cx, cy)
}

/// Flat index of a cell coordinate, row-major.
pub fn flat_index(dims: GridDims, cx: usize, cy: usize) -> usize {
    cy * dims.width + cx
}

/// Flat indices of the 3×3 block of cells centered on `(cx, cy)`.
///
/// Rows and columns that fall outside the grid are skipped — the block
/// never wraps. Row-major, deterministic order.
pub fn block_around(dims: GridDims, cx: usize, cy: usize) -> SmallVec<[usize; 9]> {
    let mut block = SmallVec::new();
    for dy in -1i64..=1 {
        let ny = cy as i64 + dy;
        if ny < 0 || ny >= dims.height as i64 {
            continue;
        }
        for dx in -1i64..=1 {
            let nx = cx as i64 + dx;
            if nx < 0 || nx >= dims.width as i64 {
                continue;
            }
            block.push(flat_index(dims, nx as usize, ny as usize));
        }
    }
    block
}
