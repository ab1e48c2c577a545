mod file;
mod rule;
mod violation;

pub use file::FileAnalyzer;
pub use rule::RuleKind;
pub use violation::Violation;

use crate::analyzer::SourceFile;

pub trait Checker: Sync {
    /// Check one file against the configured rules.
    fn check(&self, file: &SourceFile) -> Vec<Violation>;
}
