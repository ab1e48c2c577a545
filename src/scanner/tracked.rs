use std::path::{Path, PathBuf};

use super::{FileFilter, FileSelector, join_root};
use crate::error::{ComplianceError, Result};

/// Selects the files recorded in the git index under each root.
///
/// Untracked files are never returned, whether or not they are ignored. An
/// empty or missing index yields no files; a root outside any repository is an
/// error.
pub struct TrackedFileSelector<F: FileFilter> {
    roots: Vec<PathBuf>,
    filter: F,
}

impl<F: FileFilter> TrackedFileSelector<F> {
    #[must_use]
    pub const fn new(roots: Vec<PathBuf>, filter: F) -> Self {
        Self { roots, filter }
    }

    fn select_root(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let repo = gix::discover(root).map_err(|e| {
            ComplianceError::GitRepoNotFound(format!("{}: {e}", root.display()))
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| ComplianceError::Git("Repository has no working directory".into()))?;

        let root_abs = dunce::canonicalize(root)?;
        let workdir_abs = dunce::canonicalize(workdir)?;
        let prefix = root_abs.strip_prefix(&workdir_abs).map_err(|_| {
            ComplianceError::PathEnumeration(format!(
                "{} is not within git workdir {}",
                root_abs.display(),
                workdir_abs.display()
            ))
        })?;

        let index = repo
            .index_or_empty()
            .map_err(|e| ComplianceError::Git(format!("Failed to read git index: {e}")))?;

        let mut files = Vec::new();
        for entry in index.entries() {
            let tracked = gix::path::from_bstr(entry.path(&index));
            let Ok(relative) = tracked.strip_prefix(prefix) else {
                continue;
            };
            if relative.as_os_str().is_empty() {
                // The root itself is a tracked file
                if self.filter.should_include(root) {
                    files.push(root.to_path_buf());
                }
                continue;
            }
            if self.filter.should_include(relative) {
                files.push(join_root(root, relative));
            }
        }
        Ok(files)
    }
}

impl<F: FileFilter> FileSelector for TrackedFileSelector<F> {
    fn select(&self) -> Result<Vec<PathBuf>> {
        let mut selected = Vec::new();
        for root in &self.roots {
            selected.extend(self.select_root(root)?);
        }
        Ok(selected)
    }
}

#[cfg(test)]
#[path = "tracked_tests.rs"]
mod tests;
