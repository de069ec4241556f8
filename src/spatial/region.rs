//! Rectangular region extraction and placement
//!
//! Both directions share one clipping rule: the rectangle starting at the
//! anchor is cut down to whatever of it lies inside the image. Extracting a
//! region and placing it back at the same anchor is therefore lossless.

use crate::color::Pixel;
use crate::io::error::{MosaicError, Result};
use crate::spatial::{Anchor, Image, RegionSize};
use ndarray::{ArrayView2, s};

/// Clip a requested rectangle to the image's remaining extent from `anchor`
///
/// # Errors
///
/// Returns [`MosaicError::RegionOutOfBounds`] if the anchor is not inside the image
pub fn clipped_size(
    dimensions: (usize, usize),
    anchor: Anchor,
    requested: RegionSize,
) -> Result<RegionSize> {
    let (rows, cols) = dimensions;
    if anchor.row >= rows || anchor.col >= cols {
        return Err(MosaicError::RegionOutOfBounds {
            anchor: (anchor.row, anchor.col),
            dimensions,
        });
    }

    Ok(RegionSize::new(
        requested.height.min(rows - anchor.row),
        requested.width.min(cols - anchor.col),
    ))
}

/// Borrow the clipped sub-matrix of `image` starting at `anchor`
///
/// # Errors
///
/// Returns [`MosaicError::RegionOutOfBounds`] if the anchor is not inside the image
pub fn extract(image: &Image, anchor: Anchor, size: RegionSize) -> Result<ArrayView2<'_, Pixel>> {
    let actual = clipped_size(image.dim(), anchor, size)?;

    Ok(image.slice(s![
        anchor.row..anchor.row + actual.height,
        anchor.col..anchor.col + actual.width
    ]))
}

/// Overwrite the clipped rectangle of `image` at `anchor` with `region`
///
/// Parts of `region` that would fall outside the image are dropped; the
/// image never grows.
///
/// # Errors
///
/// Returns [`MosaicError::RegionOutOfBounds`] if the anchor is not inside the image
pub fn place(image: &mut Image, anchor: Anchor, region: ArrayView2<'_, Pixel>) -> Result<()> {
    let actual = clipped_size(image.dim(), anchor, RegionSize::of(&region))?;

    image
        .slice_mut(s![
            anchor.row..anchor.row + actual.height,
            anchor.col..anchor.col + actual.width
        ])
        .assign(&region.slice(s![..actual.height, ..actual.width]));

    Ok(())
}
