use anyhow::{Result, bail};

use crate::domain::grid::Grid;

/// A zone grid and the elevation grid it was derived from.
/// Both grids are guaranteed to share the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapPair {
    zones: Grid,
    elevation: Grid,
}

impl MapPair {
    pub fn new(zones: Grid, elevation: Grid) -> Result<Self> {
        if !zones.same_shape(&elevation) {
            bail!(
                "Shape mismatch: zone grid is {}x{} but elevation grid is {}x{}",
                zones.rows(),
                zones.cols(),
                elevation.rows(),
                elevation.cols()
            );
        }
        Ok(Self { zones, elevation })
    }

    pub fn zones(&self) -> &Grid {
        &self.zones
    }

    pub fn elevation(&self) -> &Grid {
        &self.elevation
    }

    pub fn shape(&self) -> (usize, usize) {
        self.zones.shape()
    }
}
