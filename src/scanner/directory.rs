use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileFilter, FileSelector, join_root};
use crate::error::{ComplianceError, Result};

/// Selects files by walking the filesystem under each root.
///
/// With gitignore support on, `ignore`'s walker honours `.gitignore`, the global
/// excludes file and `.git/info/exclude`; otherwise every file is visited.
pub struct DirectoryScanner<F: FileFilter> {
    roots: Vec<PathBuf>,
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(roots: Vec<PathBuf>, filter: F) -> Self {
        Self {
            roots,
            filter,
            use_gitignore: true,
        }
    }

    #[must_use]
    pub const fn with_gitignore(mut self, enabled: bool) -> Self {
        self.use_gitignore = enabled;
        self
    }

    fn scan_root(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if root.is_file() {
            return Ok(self.single_file(root));
        }
        if !root.is_dir() {
            return Err(ComplianceError::PathEnumeration(format!(
                "{} does not exist",
                root.display()
            )));
        }

        let mut files = if self.use_gitignore {
            Self::walk_with_gitignore(root)
        } else {
            Self::walk_all(root)
        };
        files.retain(|relative| self.filter.should_include(relative));
        files.sort();
        Ok(files.into_iter().map(|rel| join_root(root, &rel)).collect())
    }

    fn single_file(&self, path: &Path) -> Vec<PathBuf> {
        if self.filter.should_include(path) {
            vec![path.to_path_buf()]
        } else {
            Vec::new()
        }
    }

    fn walk_all(root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| relative_to(root, e.path()))
            .collect()
    }

    fn walk_with_gitignore(root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .filter_entry(|e| e.file_name() != ".git")
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter_map(|e| relative_to(root, e.path()))
            .collect()
    }
}

impl<F: FileFilter> FileSelector for DirectoryScanner<F> {
    fn select(&self) -> Result<Vec<PathBuf>> {
        let mut selected = Vec::new();
        for root in &self.roots {
            selected.extend(self.scan_root(root)?);
        }
        Ok(selected)
    }
}

fn relative_to(root: &Path, path: &Path) -> Option<PathBuf> {
    path.strip_prefix(root).ok().map(Path::to_path_buf)
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
