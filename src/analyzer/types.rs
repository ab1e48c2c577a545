use std::path::{Path, PathBuf};

use serde::Serialize;

/// A source file loaded for one analysis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
    line_count: usize,
}

impl SourceFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        let line_count = content.lines().count();
        Self {
            path: path.into(),
            content,
            line_count,
        }
    }

    /// Repository-relative path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line_count
    }
}

/// A heuristically detected function-like construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSpan {
    /// Function name
    pub name: String,
    /// Starting line (1-indexed)
    pub start_line: usize,
    /// Ending line (1-indexed, never before `start_line`)
    pub end_line: usize,
    /// Number of top-level parameters
    pub param_count: usize,
    /// Signature line through closing brace
    #[serde(skip)]
    pub body_text: String,
}

impl FunctionSpan {
    #[must_use]
    pub fn new(
        name: String,
        start_line: usize,
        end_line: usize,
        param_count: usize,
        body_text: String,
    ) -> Self {
        Self {
            name,
            start_line,
            end_line: end_line.max(start_line),
            param_count,
            body_text,
        }
    }

    /// Number of physical lines covered by the span.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}
