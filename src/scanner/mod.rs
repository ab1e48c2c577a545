//! Candidate file selection: git-tracked files or a directory walk, narrowed
//! by extension and exclude globs.

mod directory;
mod filter;
mod tracked;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};
pub use tracked::TrackedFileSelector;

use std::path::{Path, PathBuf};

use crate::config::{FileSource, ScannerConfig};
use crate::error::Result;

/// Produces the ordered list of files to analyze.
pub trait FileSelector: Sync {
    /// # Errors
    /// Fails when the file list cannot be produced at all. Callers must not
    /// fall back to an empty list.
    fn select(&self) -> Result<Vec<PathBuf>>;
}

/// Build the selector configured by `[scanner]` for `roots`.
///
/// # Errors
/// Returns an error if an exclude pattern is invalid.
pub fn selector_for(config: &ScannerConfig, roots: Vec<PathBuf>) -> Result<Box<dyn FileSelector>> {
    let filter = GlobFilter::new(config.extensions.clone(), &config.exclude)?;
    Ok(match config.source {
        FileSource::Tracked => Box::new(TrackedFileSelector::new(roots, filter)),
        FileSource::Walk => {
            Box::new(DirectoryScanner::new(roots, filter).with_gitignore(config.gitignore))
        }
    })
}

/// Path of `relative` as reported to the user: `./` is left off.
pub(crate) fn join_root(root: &Path, relative: &Path) -> PathBuf {
    if root == Path::new(".") {
        relative.to_path_buf()
    } else {
        root.join(relative)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
