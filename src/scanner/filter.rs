use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{ComplianceError, Result};

/// Decides which enumerated paths are JS/TS sources worth analyzing.
pub trait FileFilter: Send + Sync {
    /// `path` is relative to the scanned root.
    fn should_include(&self, path: &Path) -> bool;
}

/// Keeps files with a source extension that match no exclude glob.
///
/// Extensions are compared without a leading dot and ignoring ASCII case, so
/// `.TS` in a config matches `app.ts`. Exclude globs such as
/// `**/node_modules/**` keep vendored and generated bundles out of the report.
pub struct GlobFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Build a filter from the `[scanner]` extension list and exclude globs.
    /// An empty extension list accepts every file.
    ///
    /// # Errors
    /// Returns `InvalidPattern` naming the first glob that does not parse.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| ComplianceError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| ComplianceError::InvalidPattern {
                pattern: exclude_patterns.join(", "),
                source: e,
            })?;

        let extensions = extensions
            .into_iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        Ok(Self {
            extensions,
            exclude_patterns,
        })
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_source_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
