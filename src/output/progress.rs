use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

const ANALYZE_TEMPLATE: &str =
    "{spinner:.green} Analyzing [{bar:40.cyan/blue}] {pos}/{len} files ({elapsed})";

/// Counts source files as the aggregator finishes them.
///
/// The bar is drawn on stderr only for interactive, non-quiet runs; the
/// counter is kept either way. Clones share one counter, so every rayon worker
/// can hold a copy.
#[derive(Clone)]
pub struct ScanProgress {
    bar: ProgressBar,
    analyzed: Arc<AtomicU64>,
}

impl ScanProgress {
    /// Bar for a `check` run. The file total is unknown until selection has
    /// finished, see [`ScanProgress::set_total`].
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self::with_visibility(quiet, std::io::stderr().is_terminal())
    }

    fn with_visibility(quiet: bool, is_tty: bool) -> Self {
        let bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(0);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template(ANALYZE_TEMPLATE)
                    .expect("valid template")
                    .progress_chars("█▓░"),
            );
            bar
        };

        Self {
            bar,
            analyzed: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of selected files the run will read.
    pub fn set_total(&self, files: usize) {
        self.bar.set_length(files as u64);
    }

    /// Record one analyzed or skipped file.
    pub fn inc(&self) {
        let done = self.analyzed.fetch_add(1, Ordering::Relaxed) + 1;
        self.bar.set_position(done);
    }

    #[must_use]
    pub fn analyzed(&self) -> u64 {
        self.analyzed.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
