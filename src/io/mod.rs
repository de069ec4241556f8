//! Input/output collaborators around the composition core

/// Command-line interface and run orchestration
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types for all mosaic operations
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Progress display for tile loading and composition
pub mod progress;
/// Tile set construction from a directory of images
pub mod tiles;
