//! Mosaic composition over the cell grid
//!
//! For every cell: extract the piece, narrow the tile set by average color,
//! pick the exact best tile among the candidates and write it into a private
//! copy of the image. Cells are disjoint, so the per-cell work can also run
//! in parallel and be written back afterwards.

use crate::algorithm::matching::{Match, best_match};
use crate::algorithm::selection::{check_candidate_count, select_candidates};
use crate::color::{Pixel, TileAverages, average_color, precompute_tile_averages};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::spatial::{Anchor, CellGrid, Image, RegionSize, Tile, extract, place};
use log::{debug, info};
use ndarray::ArrayView2;
use rayon::prelude::*;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Runtime parameters of a composition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComposerConfig {
    /// Size of the coarse candidate set per cell
    pub num_candidates: usize,
    /// Compute cells on the rayon thread pool
    pub parallel: bool,
}

impl ComposerConfig {
    /// Sequential composition with the given candidate count
    pub const fn new(num_candidates: usize) -> Self {
        Self {
            num_candidates,
            parallel: false,
        }
    }

    /// Enable or disable parallel cell computation
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Report handed to the progress observer after each cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellProgress {
    /// Cells finished so far, including this one
    pub completed: usize,
    /// Cells in the whole grid
    pub total: usize,
    /// Top-left corner of the finished cell
    pub anchor: Anchor,
    /// Index of the tile placed there
    pub tile_index: usize,
}

/// Check that the tile set is non-empty and uniformly sized
///
/// Returns the shared tile size.
///
/// # Errors
///
/// Returns an error if:
/// - `tiles` is empty
/// - any tile has a zero dimension
/// - any tile differs in size from the first
pub fn validate_tiles(tiles: &[Tile]) -> Result<RegionSize> {
    let first = tiles.first().ok_or(MosaicError::EmptyTileSet)?;
    let expected = first.dim();

    if expected.0 == 0 || expected.1 == 0 {
        return Err(invalid_parameter(
            "tiles",
            &format!("{}x{}", expected.0, expected.1),
            &"tiles must have at least one row and one column",
        ));
    }

    for (index, tile) in tiles.iter().enumerate().skip(1) {
        let found = tile.dim();
        if found != expected {
            return Err(MosaicError::NonUniformTiles {
                index,
                expected,
                found,
            });
        }
    }

    Ok(RegionSize::new(expected.0, expected.1))
}

/// Validated tile set with its precomputed averages
pub struct MosaicComposer<'t> {
    tiles: &'t [Tile],
    tile_averages: TileAverages,
    tile_size: RegionSize,
    config: ComposerConfig,
}

impl<'t> MosaicComposer<'t> {
    /// Validate the configuration and precompute tile averages
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the tile set is empty or not uniform,
    /// or if the candidate count is zero or larger than the tile set
    pub fn new(tiles: &'t [Tile], config: ComposerConfig) -> Result<Self> {
        let tile_size = validate_tiles(tiles)?;
        check_candidate_count(config.num_candidates, tiles.len())?;

        let tile_averages = precompute_tile_averages(tiles)?;
        info!(
            "Prepared {} tiles of {}x{}",
            tiles.len(),
            tile_size.height,
            tile_size.width
        );

        Ok(Self {
            tiles,
            tile_averages,
            tile_size,
            config,
        })
    }

    /// Grid of cells this composer walks over an image of `dimensions`
    ///
    /// # Errors
    ///
    /// Returns an error if the image has a zero dimension
    pub fn grid(&self, dimensions: (usize, usize)) -> Result<CellGrid> {
        CellGrid::new(dimensions, self.tile_size)
    }

    /// Choose the tile that replaces `piece`
    ///
    /// # Errors
    ///
    /// Returns an error if `piece` is empty
    pub fn choose_tile(&self, piece: ArrayView2<'_, Pixel>) -> Result<Match<'t>> {
        let target = average_color(piece)?;
        let candidates = select_candidates(
            target,
            self.tiles,
            &self.tile_averages,
            self.config.num_candidates,
        )?;

        best_match(piece, &candidates).ok_or(MosaicError::EmptyTileSet)
    }

    /// Compose the mosaic for `image`
    ///
    /// The input is left untouched; the result has the same dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the image has a zero dimension
    pub fn compose(&self, image: &Image) -> Result<Image> {
        if self.config.parallel {
            self.compose_parallel(image, |_| {})
        } else {
            self.compose_with_progress(image, |_| ControlFlow::Continue(()))
        }
    }

    /// Compose sequentially, reporting to `observer` after every cell
    ///
    /// Returning [`ControlFlow::Break`] from the observer stops the walk
    /// before the next cell and discards the partial output. A break after
    /// the last cell has nothing left to stop, so the mosaic is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the image has a zero dimension, or
    /// [`MosaicError::Cancelled`] if the observer stops the walk
    pub fn compose_with_progress<F>(&self, image: &Image, mut observer: F) -> Result<Image>
    where
        F: FnMut(CellProgress) -> ControlFlow<()>,
    {
        let start = Instant::now();
        let grid = self.grid(image.dim())?;
        let total = grid.cell_count();
        let mut output = image.clone();

        for (position, anchor) in grid.anchors().enumerate() {
            let winner = {
                let piece = extract(&output, anchor, self.tile_size)?;
                self.choose_tile(piece)?
            };
            debug!(
                "Cell ({}, {}) -> tile {} (distance {})",
                anchor.row, anchor.col, winner.candidate.index, winner.distance
            );
            place(&mut output, anchor, winner.candidate.tile.view())?;

            let progress = CellProgress {
                completed: position + 1,
                total,
                anchor,
                tile_index: winner.candidate.index,
            };
            if observer(progress).is_break() && progress.completed < total {
                return Err(MosaicError::Cancelled {
                    completed: position + 1,
                    total,
                });
            }
        }

        info!("Composed {total} cells in {:.2?}", start.elapsed());
        Ok(output)
    }

    /// Compose on the rayon thread pool, reporting every finished cell
    ///
    /// Reports arrive in completion order, which is not the walk order;
    /// `completed` still counts up by one per report. The walk cannot be
    /// cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the image has a zero dimension
    pub fn compose_parallel<F>(&self, image: &Image, observer: F) -> Result<Image>
    where
        F: Fn(CellProgress) + Sync,
    {
        let start = Instant::now();
        let grid = self.grid(image.dim())?;
        let total = grid.cell_count();
        let anchors: Vec<Anchor> = grid.anchors().collect();
        let completed = AtomicUsize::new(0);

        // Each cell reads only its own rectangle of the untouched input
        let winners = anchors
            .par_iter()
            .map(|&anchor| {
                let piece = extract(image, anchor, self.tile_size)?;
                let winner = self.choose_tile(piece)?;
                observer(CellProgress {
                    completed: completed.fetch_add(1, Ordering::Relaxed) + 1,
                    total,
                    anchor,
                    tile_index: winner.candidate.index,
                });
                Ok((anchor, winner))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut output = image.clone();
        for (anchor, winner) in winners {
            place(&mut output, anchor, winner.candidate.tile.view())?;
        }

        info!("Composed {total} cells in parallel in {:.2?}", start.elapsed());
        Ok(output)
    }
}

/// Compose a mosaic of `image` from `tiles`
///
/// # Errors
///
/// Returns a configuration error before any cell is processed if the tile
/// set is empty or non-uniform, or `num_candidates` is out of range
pub fn compose(image: &Image, tiles: &[Tile], num_candidates: usize) -> Result<Image> {
    MosaicComposer::new(tiles, ComposerConfig::new(num_candidates))?.compose(image)
}
