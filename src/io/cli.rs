//! Command-line interface and run orchestration
//!
//! Takes exactly five positional arguments. Any other count, or a
//! non-positive numeric argument, is reported by clap as a usage error before
//! anything is loaded or written.

use crate::algorithm::composer::{ComposerConfig, MosaicComposer};
use crate::io::error::Result;
use crate::io::image::{load_image, save_image};
use crate::io::progress::ProgressManager;
use crate::io::tiles::build_tile_base_with_progress;
use clap::Parser;
use log::{LevelFilter, SetLoggerError, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::num::NonZeroUsize;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tilemosaic")]
#[command(
    author,
    version,
    about = "Rebuild an image as a mosaic of tile images"
)]
/// Command-line arguments for mosaic composition
pub struct Cli {
    /// Image to rebuild as a mosaic
    #[arg(value_name = "IMAGE_SOURCE")]
    pub image_source: PathBuf,

    /// Directory of images to build the tiles from
    #[arg(value_name = "IMAGES_DIR")]
    pub images_dir: PathBuf,

    /// Output file; `.png` is added when no extension is given
    #[arg(value_name = "OUTPUT_NAME")]
    pub output_name: PathBuf,

    /// Height of every tile in pixels
    #[arg(value_name = "TILE_HEIGHT")]
    pub tile_height: NonZeroUsize,

    /// Tiles kept by the average-color filter for exact matching
    #[arg(value_name = "NUM_CANDIDATES")]
    pub num_candidates: NonZeroUsize,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every placed cell
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Compute cells on all cores
    #[arg(short, long)]
    pub parallel: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Composer configuration selected by the arguments
    pub const fn composer_config(&self) -> ComposerConfig {
        ComposerConfig::new(self.num_candidates.get()).with_parallel(self.parallel)
    }
}

/// Install the terminal logger on stderr
///
/// # Errors
///
/// Returns an error if a global logger is already installed
pub fn init_logging(level: LevelFilter) -> std::result::Result<(), SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

/// Runs one mosaic composition from parsed arguments
pub struct MosaicProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load inputs, compose the mosaic and write it out
    ///
    /// Returns the path of the written mosaic.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source image cannot be loaded
    /// - The tile directory yields no usable tiles
    /// - The candidate count exceeds the number of tiles
    /// - The mosaic cannot be written
    pub fn process(&mut self) -> Result<PathBuf> {
        let start_time = Instant::now();

        let image = load_image(&self.cli.image_source)?;
        info!(
            "Loaded '{}' ({}x{})",
            self.cli.image_source.display(),
            image.nrows(),
            image.ncols()
        );

        let mut tiles_started = false;
        let progress_manager = &mut self.progress_manager;
        let tiles = build_tile_base_with_progress(
            &self.cli.images_dir,
            self.cli.tile_height.get(),
            |processed, total| {
                if let Some(pm) = progress_manager.as_mut() {
                    if !tiles_started {
                        pm.start_tiles(total);
                        tiles_started = true;
                    }
                    pm.update_tiles(processed);
                }
            },
        )?;
        if let Some(ref pm) = self.progress_manager {
            pm.finish_tiles(tiles.len());
        }

        let composer = MosaicComposer::new(&tiles, self.cli.composer_config())?;
        let grid = composer.grid(image.dim())?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_cells(grid.cell_count());
        }

        let progress_manager = &self.progress_manager;
        let mosaic = if self.cli.parallel {
            composer.compose_parallel(&image, |_| {
                if let Some(pm) = progress_manager {
                    pm.advance_cells();
                }
            })?
        } else {
            composer.compose_with_progress(&image, |progress| {
                if let Some(pm) = progress_manager {
                    pm.update_cells(progress.completed);
                }
                ControlFlow::Continue(())
            })?
        };

        if let Some(ref pm) = self.progress_manager {
            pm.finish_cells();
            pm.finish();
        }

        let written = save_image(&mosaic, &self.cli.output_name)?;
        info!(
            "Wrote '{}' in {:.2?}",
            written.display(),
            start_time.elapsed()
        );

        Ok(written)
    }
}
