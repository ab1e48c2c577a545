use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::analyzer::SourceFile;
use crate::checker::Checker;
use crate::error::Result;
use crate::output::ScanProgress;
use crate::scanner::FileSelector;

use super::{ComplianceReport, FileReader, Tally};

pub const DEFAULT_WORST_FILES: usize = 10;

/// Runs a [`Checker`] over a list of files and folds the results into a
/// [`ComplianceReport`].
///
/// Files are analyzed independently. In parallel mode each file becomes a
/// [`Tally`] on the rayon pool; tallies are merged in input order so the report
/// is identical to a sequential run.
pub struct ComplianceAggregator<C: Checker, R: FileReader> {
    checker: C,
    reader: R,
    parallel: bool,
    worst_files_limit: usize,
    cancel: Option<Arc<AtomicBool>>,
    time_budget: Option<Duration>,
    progress: Option<ScanProgress>,
}

impl<C: Checker, R: FileReader> ComplianceAggregator<C, R> {
    #[must_use]
    pub const fn new(checker: C, reader: R) -> Self {
        Self {
            checker,
            reader,
            parallel: true,
            worst_files_limit: DEFAULT_WORST_FILES,
            cancel: None,
            time_budget: None,
            progress: None,
        }
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn with_worst_files_limit(mut self, limit: usize) -> Self {
        self.worst_files_limit = limit;
        self
    }

    /// Stop reading new files once `flag` is set.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Stop reading new files once `budget` has elapsed. Files already being
    /// analyzed finish normally.
    #[must_use]
    pub const fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ScanProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Enumerate files with `selector`, then aggregate them.
    ///
    /// # Errors
    /// Returns the selector's error unchanged; a failed enumeration never
    /// produces a partial report.
    pub fn analyze_selected<S: FileSelector + ?Sized>(
        &self,
        selector: &S,
    ) -> Result<ComplianceReport> {
        let paths = selector.select()?;
        Ok(self.aggregate(&paths))
    }

    /// Aggregate an already-selected list of paths.
    #[must_use]
    pub fn aggregate(&self, paths: &[PathBuf]) -> ComplianceReport {
        let started = Instant::now();
        if let Some(progress) = &self.progress {
            progress.set_total(paths.len());
        }

        let tally = if self.parallel {
            paths
                .par_iter()
                .map(|path| self.analyze_path(path, started))
                .collect::<Vec<_>>()
                .into_iter()
                .fold(Tally::default(), Tally::merge)
        } else {
            paths
                .iter()
                .map(|path| self.analyze_path(path, started))
                .fold(Tally::default(), Tally::merge)
        };

        if let Some(progress) = &self.progress {
            progress.finish();
        }

        tally.finish(self.worst_files_limit)
    }

    fn analyze_path(&self, path: &Path, started: Instant) -> Tally {
        if self.should_stop(started) {
            return Tally::interrupted();
        }

        let tally = match self.reader.read(path) {
            Ok(content) => {
                let file = SourceFile::new(path, content);
                let violations = self.checker.check(&file);
                Tally::from_file(&file, violations)
            }
            Err(_) => Tally::unreadable(path.to_path_buf()),
        };

        if let Some(progress) = &self.progress {
            progress.inc();
        }
        tally
    }

    fn should_stop(&self, started: Instant) -> bool {
        let cancelled = self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed));
        let over_budget = self
            .time_budget
            .is_some_and(|budget| started.elapsed() >= budget);
        cancelled || over_budget
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
