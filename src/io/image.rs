//! Conversion between decoded images and pixel matrices, plus file I/O

use crate::color::Pixel;
use crate::io::configuration::DEFAULT_OUTPUT_EXTENSION;
use crate::io::error::{MosaicError, Result, file_system_error, invalid_parameter};
use crate::spatial::Image;
use image::{Rgb, RgbImage};
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// Copy an RGB buffer into a `(row, col)` pixel matrix
pub fn image_from_rgb(rgb: &RgbImage) -> Image {
    let (width, height) = rgb.dimensions();
    let mut image: Image = Array2::from_elem((height as usize, width as usize), [0; 3]);

    for (x, y, pixel) in rgb.enumerate_pixels() {
        if let Some(cell) = image.get_mut((y as usize, x as usize)) {
            *cell = pixel.0;
        }
    }

    image
}

/// Copy a pixel matrix into an RGB buffer
///
/// # Errors
///
/// Returns an error if a dimension does not fit the encoder's `u32` range
pub fn image_to_rgb(image: &Image) -> Result<RgbImage> {
    let (rows, cols) = image.dim();
    let height = u32::try_from(rows)
        .map_err(|e| invalid_parameter("image", &format!("{rows} rows"), &e))?;
    let width = u32::try_from(cols)
        .map_err(|e| invalid_parameter("image", &format!("{cols} columns"), &e))?;

    Ok(RgbImage::from_fn(width, height, |x, y| {
        let pixel: Pixel = image
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or([0; 3]);
        Rgb(pixel)
    }))
}

/// Load and decode an image file as RGB pixels
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a supported image format
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Image> {
    let path_buf = path.as_ref().to_path_buf();
    let decoded = image::open(&path_buf).map_err(|e| MosaicError::ImageLoad {
        path: path_buf,
        source: e,
    })?;

    Ok(image_from_rgb(&decoded.to_rgb8()))
}

/// Output path with the default extension added when none is given
pub fn output_path<P: AsRef<Path>>(name: P) -> PathBuf {
    let path = name.as_ref();
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_OUTPUT_EXTENSION)
    }
}

/// Encode `image` to `name`, format chosen by extension
///
/// Returns the path actually written.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The extension names no supported format
/// - The file cannot be written
pub fn save_image<P: AsRef<Path>>(image: &Image, name: P) -> Result<PathBuf> {
    let path = output_path(name);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create output directory", e))?;
        }
    }

    image_to_rgb(image)?
        .save(&path)
        .map_err(|e| MosaicError::ImageExport {
            path: path.clone(),
            source: e,
        })?;

    Ok(path)
}
