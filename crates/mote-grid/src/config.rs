//! Grid configuration: world bounds, cell size, query policy.

use crate::error::PartitionError;

/// Axis-aligned rectangle the grid is defined over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    /// Left edge.
    pub min_x: f32,
    /// Bottom edge.
    pub min_y: f32,
    /// Right edge.
    pub max_x: f32,
    /// Top edge.
    pub max_y: f32,
}

impl WorldBounds {
    /// Create bounds from the two corners.
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub(crate) fn validate(&self) -> Result<(), PartitionError> {
        let coords = [self.min_x, self.min_y, self.max_x, self.max_y];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(PartitionError::InvalidBounds {
                reason: format!("bounds must be finite, got {self:?}"),
            });
        }
        if self.max_x < self.min_x || self.max_y < self.min_y {
            return Err(PartitionError::InvalidBounds {
                reason: format!("max corner below min corner: {self:?}"),
            });
        }
        Ok(())
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(0.0, 0.0, 100.0, 100.0)
    }
}

/// Configuration shared by the grid partitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// World units per grid cell. Must be finite and positive.
    pub cell_size: f32,
    /// The rectangle particles are binned over. Positions outside it
    /// clamp into the border cells.
    pub world: WorldBounds,
    /// Remove the queried particle's own index from its neighborhood.
    pub exclude_self: bool,
    /// Capacity hint for the neighbor scratch buffer.
    pub neighbor_reserve: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            world: WorldBounds::default(),
            exclude_self: false,
            neighbor_reserve: 64,
        }
    }
}

impl GridConfig {
    pub(crate) fn validate(&self) -> Result<(), PartitionError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(PartitionError::InvalidCellSize {
                value: self.cell_size,
            });
        }
        self.world.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_cell_size_rejected() {
        let cfg = GridConfig {
            cell_size: 0.0,
            ..GridConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(PartitionError::InvalidCellSize { value: 0.0 })
        );
    }

    #[test]
    fn negative_cell_size_rejected() {
        let cfg = GridConfig {
            cell_size: -2.0,
            ..GridConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn nan_cell_size_rejected() {
        let cfg = GridConfig {
            cell_size: f32::NAN,
            ..GridConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_bounds_rejected() {
        let cfg = GridConfig {
            world: WorldBounds::new(10.0, 0.0, 0.0, 10.0),
            ..GridConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PartitionError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn extents() {
        let w = WorldBounds::new(-10.0, 0.0, 30.0, 50.0);
        assert_eq!(w.width(), 40.0);
        assert_eq!(w.height(), 50.0);
    }
}
