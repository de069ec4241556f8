//! Error types for mosaic composition and its file collaborators

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to load or decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or save the composed mosaic
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Composition was requested with no tiles at all
    EmptyTileSet,

    /// A tile differs in size from the first tile of the set
    NonUniformTiles {
        /// Position of the offending tile in the tile list
        index: usize,
        /// Dimensions of the first tile (rows, cols)
        expected: (usize, usize),
        /// Dimensions of the offending tile (rows, cols)
        found: (usize, usize),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Precomputed tile averages are not aligned with the tile list
    TileAverageMismatch {
        /// Number of tiles
        tiles: usize,
        /// Number of averages supplied
        averages: usize,
    },

    /// Region anchor lies outside the image
    RegionOutOfBounds {
        /// Requested top-left corner (row, col)
        anchor: (usize, usize),
        /// Image dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// A region with no cells cannot be averaged
    EmptyRegion,

    /// Tile directory contained no decodable images
    NoUsableTiles {
        /// Directory that was scanned
        directory: PathBuf,
    },

    /// Composition was stopped by its observer between two cells
    Cancelled {
        /// Cells finished before the stop
        completed: usize,
        /// Cells in the whole grid
        total: usize,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image from '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::EmptyTileSet => write!(f, "Tile set is empty"),
            Self::NonUniformTiles {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile {index} is {}x{} but the tile set is {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::TileAverageMismatch { tiles, averages } => {
                write!(f, "Got {averages} tile averages for {tiles} tiles")
            }
            Self::RegionOutOfBounds { anchor, dimensions } => {
                write!(
                    f,
                    "Region anchor ({}, {}) is outside a {}x{} image",
                    anchor.0, anchor.1, dimensions.0, dimensions.1
                )
            }
            Self::EmptyRegion => write!(f, "Cannot average a region with no cells"),
            Self::NoUsableTiles { directory } => {
                write!(
                    f,
                    "No usable tile images found in '{}'",
                    directory.display()
                )
            }
            Self::Cancelled { completed, total } => {
                write!(f, "Composition cancelled after {completed} of {total} cells")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl MosaicError {
    /// Whether the error is a caller configuration problem rather than I/O
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::EmptyTileSet
                | Self::NonUniformTiles { .. }
                | Self::InvalidParameter { .. }
                | Self::TileAverageMismatch { .. }
        )
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for the given path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MosaicError {
    MosaicError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
