use std::path::{Path, PathBuf};

use serde::Serialize;

use super::RuleKind;

/// A single rule violation. Lines are 1-indexed and lie within the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    file_path: PathBuf,
    rule: RuleKind,
    line: usize,
    message: String,
}

impl Violation {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>, rule: RuleKind, line: usize, message: String) -> Self {
        Self {
            file_path: file_path.into(),
            rule,
            line: line.max(1),
            message,
        }
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    #[must_use]
    pub const fn rule(&self) -> RuleKind {
        self.rule
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
