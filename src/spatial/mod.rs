//! Image matrices and the rectangular regions cut from them
//!
//! This module contains spatial-related functionality including:
//! - Region extraction and placement with border clipping
//! - The grid walk that partitions an image into tile-sized cells

/// Grid partitioning of an image into tile-sized cells
pub mod grid;
/// Clipped extraction and placement of rectangular regions
pub mod region;

use crate::color::Pixel;
use ndarray::Array2;

/// Row-major pixel matrix indexed by `(row, col)`
pub type Image = Array2<Pixel>;

/// A fixed-size image drawn from the tile set
pub type Tile = Image;

/// Top-left corner of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Anchor {
    /// Create an anchor at the given row and column
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Height and width of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionSize {
    /// Number of rows
    pub height: usize,
    /// Number of columns
    pub width: usize,
}

impl RegionSize {
    /// Create a size from height and width
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Size of an existing matrix
    pub fn of<T>(matrix: &ndarray::ArrayView2<'_, T>) -> Self {
        let (height, width) = matrix.dim();
        Self { height, width }
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.height * self.width
    }
}

pub use grid::CellGrid;
pub use region::{extract, place};
