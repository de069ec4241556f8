/// Mosaic composition over the cell grid
pub mod composer;
/// Exact pixelwise matching among candidates
pub mod matching;
/// Coarse candidate selection by average color
pub mod selection;
