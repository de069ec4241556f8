//! Tile set construction from a directory of images
//!
//! Every usable image is centre-cropped to the tile aspect ratio and resized
//! to one shared tile size, so the resulting set is uniform by construction.

use crate::io::configuration::{TILE_ASPECT_RATIO, TILE_EXTENSIONS, TILE_RESIZE_FILTER};
use crate::io::error::{MosaicError, Result, file_system_error, invalid_parameter};
use crate::io::image::image_from_rgb;
use crate::spatial::{RegionSize, Tile};
use image::RgbImage;
use image::imageops;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Tile width that goes with a requested tile height
pub fn tile_width_for(tile_height: usize) -> usize {
    ((tile_height as f64) * TILE_ASPECT_RATIO).round().max(1.0) as usize
}

/// Whether the path has an accepted image extension
pub fn is_tile_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TILE_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
}

/// List candidate tile files in `directory`, sorted by path
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read
pub fn collect_tile_paths(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(directory)
        .map_err(|e| file_system_error(directory, "read tile directory", e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_system_error(directory, "read tile directory entry", e))?
            .path();
        if path.is_file() && is_tile_candidate(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    Ok(paths)
}

/// Centre-crop `source` to the widest rectangle of the given aspect ratio
pub fn crop_to_aspect(source: &RgbImage, aspect: f64) -> RgbImage {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return source.clone();
    }

    let width_for_height = (f64::from(height) * aspect).round() as u32;
    let (crop_width, crop_height) = if width_for_height <= width {
        (width_for_height.max(1), height)
    } else {
        (width, ((f64::from(width) / aspect).round() as u32).clamp(1, height))
    };

    let x = (width - crop_width) / 2;
    let y = (height - crop_height) / 2;
    imageops::crop_imm(source, x, y, crop_width, crop_height).to_image()
}

/// Crop and resize a decoded image into a tile of `size`
///
/// # Errors
///
/// Returns an error if a dimension of `size` is zero or does not fit in `u32`
pub fn make_tile(source: &RgbImage, size: RegionSize) -> Result<Tile> {
    if size.area() == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &format!("{}x{}", size.height, size.width),
            &"tiles must have at least one row and one column",
        ));
    }
    let height = u32::try_from(size.height)
        .map_err(|e| invalid_parameter("tile_height", &size.height, &e))?;
    let width =
        u32::try_from(size.width).map_err(|e| invalid_parameter("tile_width", &size.width, &e))?;

    let cropped = crop_to_aspect(source, width as f64 / height as f64);
    let resized = imageops::resize(&cropped, width, height, TILE_RESIZE_FILTER);

    Ok(image_from_rgb(&resized))
}

/// Decode one tile file and bring it to `size`
///
/// # Errors
///
/// Returns an error if the file cannot be decoded
pub fn load_tile(path: &Path, size: RegionSize) -> Result<Tile> {
    let decoded = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    make_tile(&decoded.to_rgb8(), size)
}

/// Build a uniform tile set from every usable image in `directory`
///
/// # Errors
///
/// Returns an error if:
/// - `tile_height` is zero
/// - The directory cannot be read
/// - No file in the directory decodes as an image
pub fn build_tile_base(directory: &Path, tile_height: usize) -> Result<Vec<Tile>> {
    build_tile_base_with_progress(directory, tile_height, |_, _| {})
}

/// Build a tile set, calling `on_file(processed, total)` after each file
///
/// # Errors
///
/// Same as [`build_tile_base`]
pub fn build_tile_base_with_progress<F>(
    directory: &Path,
    tile_height: usize,
    mut on_file: F,
) -> Result<Vec<Tile>>
where
    F: FnMut(usize, usize),
{
    if tile_height == 0 {
        return Err(invalid_parameter(
            "tile_height",
            &tile_height,
            &"must be a positive number of pixels",
        ));
    }
    let size = RegionSize::new(tile_height, tile_width_for(tile_height));

    let paths = collect_tile_paths(directory)?;
    let total = paths.len();
    let mut tiles = Vec::with_capacity(total);

    for (processed, path) in paths.iter().enumerate() {
        match load_tile(path, size) {
            Ok(tile) => tiles.push(tile),
            Err(error) => warn!("Skipping tile candidate: {error}"),
        }
        on_file(processed + 1, total);
    }

    if tiles.is_empty() {
        return Err(MosaicError::NoUsableTiles {
            directory: directory.to_path_buf(),
        });
    }

    info!(
        "Loaded {} of {} files from '{}' as {}x{} tiles",
        tiles.len(),
        total,
        directory.display(),
        size.height,
        size.width
    );
    Ok(tiles)
}
