//! Photo mosaic composition from a fixed set of uniform tiles
//!
//! The target image is cut into tile-sized cells. For each cell the tile set
//! is first narrowed by average-color distance, then the exact best tile is
//! chosen by full pixel comparison and written into a copy of the image.

/// Candidate selection, exact matching and mosaic composition
pub mod algorithm;
/// Pixel types, color distance and average colors
pub mod color;
/// Input/output collaborators, configuration and error handling
pub mod io;
/// Image matrices, regions and the cell grid
pub mod spatial;

pub use algorithm::composer::{ComposerConfig, MosaicComposer, compose};
pub use io::error::{MosaicError, Result};
pub use spatial::{Image, Tile};
