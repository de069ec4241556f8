//! Color values and the statistics computed over them
//!
//! Pixels are plain RGB byte triples. Averages keep full floating-point
//! precision and are never clamped back into the byte range.

/// Mean color of images and regions, plus the per-tile precomputation
pub mod average;
/// Absolute-difference color metric
pub mod metric;

/// One RGB color sample, channels in `[0, 255]`
pub type Pixel = [u8; 3];

/// Per-channel floating-point mean over an image or region
pub type AverageColor = [f64; 3];

pub use average::{TileAverages, average_color, precompute_tile_averages};
pub use metric::{average_distance, channel_distance, pixel_distance};
