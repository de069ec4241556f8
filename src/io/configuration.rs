//! Runtime constants and defaults

use image::imageops::FilterType;

// Tile base construction
/// Tile width divided by tile height; tiles are square
pub const TILE_ASPECT_RATIO: f64 = 1.0;
/// Filter used when shrinking candidate images to tile size
pub const TILE_RESIZE_FILTER: FilterType = FilterType::Triangle;
/// File extensions accepted as tile images (compared case-insensitively)
pub const TILE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp",
];

// Output settings
/// Extension appended to output names that have none
pub const DEFAULT_OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
