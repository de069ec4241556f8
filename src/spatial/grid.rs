//! Grid partitioning of an image into tile-sized cells
//!
//! Cells are visited row band by row band, left to right. The last band in
//! each direction may be narrower than a tile when the image size is not an
//! exact multiple; region clipping handles that without special cases.

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Anchor, RegionSize};

/// Tile-sized partition of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGrid {
    dimensions: (usize, usize),
    cell: RegionSize,
}

impl CellGrid {
    /// Create a grid over an image of `dimensions` (rows, cols)
    ///
    /// # Errors
    ///
    /// Returns an error if the image or the cell has a zero dimension
    pub fn new(dimensions: (usize, usize), cell: RegionSize) -> Result<Self> {
        if dimensions.0 == 0 || dimensions.1 == 0 {
            return Err(invalid_parameter(
                "image",
                &format!("{}x{}", dimensions.0, dimensions.1),
                &"image must have at least one row and one column",
            ));
        }
        if cell.height == 0 || cell.width == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &format!("{}x{}", cell.height, cell.width),
                &"tiles must have at least one row and one column",
            ));
        }

        Ok(Self { dimensions, cell })
    }

    /// Number of row bands and column bands
    pub const fn bands(&self) -> (usize, usize) {
        (
            self.dimensions.0.div_ceil(self.cell.height),
            self.dimensions.1.div_ceil(self.cell.width),
        )
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        let (row_bands, col_bands) = self.bands();
        row_bands * col_bands
    }

    /// Top-left corners of every cell in walk order
    pub fn anchors(&self) -> impl Iterator<Item = Anchor> + '_ {
        (0..self.dimensions.0)
            .step_by(self.cell.height)
            .flat_map(move |row| {
                (0..self.dimensions.1)
                    .step_by(self.cell.width)
                    .map(move |col| Anchor::new(row, col))
            })
    }

    /// Actual, clipped size of the cell starting at `anchor`
    pub fn cell_size_at(&self, anchor: Anchor) -> RegionSize {
        RegionSize::new(
            self.cell
                .height
                .min(self.dimensions.0.saturating_sub(anchor.row)),
            self.cell
                .width
                .min(self.dimensions.1.saturating_sub(anchor.col)),
        )
    }
}
