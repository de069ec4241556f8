//! Mean color of images and regions
//!
//! Tile averages are computed once per run and stay positionally aligned
//! with the tile list they were computed from.

use crate::color::{AverageColor, Pixel};
use crate::io::error::{MosaicError, Result};
use crate::spatial::Tile;
use ndarray::ArrayView2;

/// Arithmetic mean of each channel over every cell of the region
///
/// # Errors
///
/// Returns [`MosaicError::EmptyRegion`] if the region has no cells
pub fn average_color(region: ArrayView2<'_, Pixel>) -> Result<AverageColor> {
    let cell_count = region.len();
    if cell_count == 0 {
        return Err(MosaicError::EmptyRegion);
    }

    // Integer accumulation keeps the result independent of iteration order
    let mut sums = [0u64; 3];
    for pixel in region {
        for (sum, &channel) in sums.iter_mut().zip(pixel.iter()) {
            *sum += u64::from(channel);
        }
    }

    let count = cell_count as f64;
    Ok(sums.map(|sum| sum as f64 / count))
}

/// Average colors of a tile set, index-aligned with the tiles
#[derive(Debug, Clone, PartialEq)]
pub struct TileAverages {
    averages: Vec<AverageColor>,
}

impl TileAverages {
    /// Wrap already computed averages
    pub const fn from_averages(averages: Vec<AverageColor>) -> Self {
        Self { averages }
    }

    /// Number of tiles covered
    pub const fn len(&self) -> usize {
        self.averages.len()
    }

    /// Whether no tile is covered
    pub const fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }

    /// Average color of the tile at `index`
    pub fn get(&self, index: usize) -> Option<AverageColor> {
        self.averages.get(index).copied()
    }

    /// All averages in tile order
    pub fn as_slice(&self) -> &[AverageColor] {
        &self.averages
    }
}

/// Compute the average color of every tile once
///
/// # Errors
///
/// Returns [`MosaicError::EmptyRegion`] if any tile has no cells
pub fn precompute_tile_averages(tiles: &[Tile]) -> Result<TileAverages> {
    let averages = tiles
        .iter()
        .map(|tile| average_color(tile.view()))
        .collect::<Result<Vec<_>>>()?;

    Ok(TileAverages::from_averages(averages))
}
