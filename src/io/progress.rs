//! Progress display for tile loading and cell composition

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates the two progress bars of a run
///
/// The tile bar counts scanned files, the cell bar counts composed cells.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    tiles_bar: Option<ProgressBar>,
    cells_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>6}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            tiles_bar: None,
            cells_bar: None,
        }
    }

    fn add_bar(&self, prefix: &'static str, total: usize) -> ProgressBar {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(prefix);
        self.multi_progress.add(bar)
    }

    /// Show a bar for scanning `total` tile files
    pub fn start_tiles(&mut self, total: usize) {
        self.tiles_bar = Some(self.add_bar("tiles", total));
    }

    /// Report how many tile files have been processed
    pub fn update_tiles(&self, processed: usize) {
        if let Some(ref bar) = self.tiles_bar {
            bar.set_position(processed as u64);
        }
    }

    /// Mark tile loading as complete with the number of usable tiles
    pub fn finish_tiles(&self, usable: usize) {
        if let Some(ref bar) = self.tiles_bar {
            bar.finish_with_message(format!("{usable} usable"));
        }
    }

    /// Show a bar for composing `total` cells
    pub fn start_cells(&mut self, total: usize) {
        self.cells_bar = Some(self.add_bar("cells", total));
    }

    /// Report how many cells have been composed
    pub fn update_cells(&self, completed: usize) {
        if let Some(ref bar) = self.cells_bar {
            bar.set_position(completed as u64);
        }
    }

    /// Count one more composed cell, from any thread
    pub fn advance_cells(&self) {
        if let Some(ref bar) = self.cells_bar {
            bar.inc(1);
        }
    }

    /// Current position of the cell bar, if it has been started
    pub fn cells_position(&self) -> Option<u64> {
        self.cells_bar.as_ref().map(ProgressBar::position)
    }

    /// Mark composition as complete
    pub fn finish_cells(&self) {
        if let Some(ref bar) = self.cells_bar {
            bar.finish();
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }

    /// Number of bars created so far
    pub fn bar_count(&self) -> usize {
        usize::from(self.tiles_bar.is_some()) + usize::from(self.cells_bar.is_some())
    }
}
