//! CLI entry point for mosaic composition

use clap::Parser;
use log::warn;
use tilemosaic::io::cli::{Cli, MosaicProcessor, init_logging};

fn main() -> tilemosaic::Result<()> {
    let cli = Cli::parse();
    if let Err(error) = init_logging(cli.log_level()) {
        warn!("Keeping the already installed logger: {error}");
    }

    let mut processor = MosaicProcessor::new(cli);
    processor.process().map(|_| ())
}
