use std::collections::BTreeMap;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::analyzer::SourceFile;
use crate::checker::{RuleKind, Violation};

/// A file ranked by how many violations it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorstFile {
    pub path: PathBuf,
    pub count: usize,
}

/// Repo-wide compliance summary.
///
/// Every percentage lies in `0..=100`; `worst_files` is sorted by count,
/// highest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    pub files_analyzed: usize,
    pub total_lines: usize,
    pub violations: Vec<Violation>,
    pub compliance_by_rule: BTreeMap<RuleKind, u8>,
    pub overall_compliance: u8,
    pub worst_files: Vec<WorstFile>,
    /// Paths that could not be read as UTF-8 text.
    pub skipped_files: Vec<PathBuf>,
    /// Set when cancellation or the time budget stopped the run early.
    pub truncated: bool,
}

impl ComplianceReport {
    #[must_use]
    pub fn compliance(&self, rule: RuleKind) -> u8 {
        self.compliance_by_rule.get(&rule).copied().unwrap_or(100)
    }

    #[must_use]
    pub fn violations_for(&self, rule: RuleKind) -> usize {
        self.violations.iter().filter(|v| v.rule() == rule).count()
    }
}

/// Partial aggregation state for a run of files.
///
/// Tallies combine with [`Tally::merge`], which is associative, so files can be
/// analyzed in any grouping as long as merge order follows input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub files: usize,
    pub lines: usize,
    pub rule_counts: BTreeMap<RuleKind, usize>,
    /// Violation count per file, in input order.
    pub file_counts: IndexMap<PathBuf, usize>,
    pub violations: Vec<Violation>,
    pub skipped: Vec<PathBuf>,
    pub truncated: bool,
}

impl Tally {
    /// Tally for one analyzed file.
    #[must_use]
    pub fn from_file(file: &SourceFile, violations: Vec<Violation>) -> Self {
        let mut rule_counts = BTreeMap::new();
        for violation in &violations {
            *rule_counts.entry(violation.rule()).or_insert(0) += 1;
        }

        let mut file_counts = IndexMap::new();
        if !violations.is_empty() {
            file_counts.insert(file.path().to_path_buf(), violations.len());
        }

        Self {
            files: 1,
            lines: file.line_count(),
            rule_counts,
            file_counts,
            violations,
            skipped: Vec::new(),
            truncated: false,
        }
    }

    /// Tally for a file that could not be read.
    #[must_use]
    pub fn unreadable(path: PathBuf) -> Self {
        Self {
            skipped: vec![path],
            ..Self::default()
        }
    }

    /// Tally for a file that was never read because the run stopped.
    #[must_use]
    pub fn interrupted() -> Self {
        Self {
            truncated: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.files += other.files;
        self.lines += other.lines;
        for (rule, count) in other.rule_counts {
            *self.rule_counts.entry(rule).or_insert(0) += count;
        }
        for (path, count) in other.file_counts {
            *self.file_counts.entry(path).or_insert(0) += count;
        }
        self.violations.extend(other.violations);
        self.skipped.extend(other.skipped);
        self.truncated |= other.truncated;
        self
    }

    #[must_use]
    pub fn count(&self, rule: RuleKind) -> usize {
        self.rule_counts.get(&rule).copied().unwrap_or(0)
    }

    /// Compute percentages and rank files. Runs once, after all merging.
    #[must_use]
    pub fn finish(self, worst_files_limit: usize) -> ComplianceReport {
        let compliance_by_rule: BTreeMap<RuleKind, u8> = RuleKind::ALL
            .into_iter()
            .map(|rule| {
                let violations = self.count(rule);
                let score = if rule == RuleKind::FileLength {
                    file_length_compliance(self.files, violations)
                } else {
                    scaled_compliance(self.files, violations)
                };
                (rule, score)
            })
            .collect();

        let overall_compliance = mean_percent(compliance_by_rule.values().copied());
        let worst_files = rank_worst_files(self.file_counts, worst_files_limit);

        ComplianceReport {
            files_analyzed: self.files,
            total_lines: self.lines,
            violations: self.violations,
            compliance_by_rule,
            overall_compliance,
            worst_files,
            skipped_files: self.skipped,
            truncated: self.truncated,
        }
    }
}

/// Share of files within the length limit, as a rounded percentage.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn file_length_compliance(files: usize, violations: usize) -> u8 {
    if files == 0 {
        return 100;
    }
    let passing = files.saturating_sub(violations);
    to_percent(passing as f64 / files as f64 * 100.0)
}

/// Score for rules counted per function or per literal.
///
/// Up to `max(1, files / 5)` violations scale linearly from 100 down to 50; any
/// more stay at 50. This keeps report parity with earlier output and is the
/// one place to change if a different scoring model is wanted.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn scaled_compliance(files: usize, violations: usize) -> u8 {
    if files == 0 {
        return 100;
    }
    let expected_max = (files / 5).max(1);
    let ratio = (violations as f64 / expected_max as f64).min(1.0);
    to_percent((1.0 - ratio * 0.5) * 100.0)
}

#[allow(clippy::cast_precision_loss)]
fn mean_percent(values: impl Iterator<Item = u8>) -> u8 {
    let (sum, count) = values.fold((0u32, 0u32), |(sum, count), v| {
        (sum + u32::from(v), count + 1)
    });
    if count == 0 {
        return 100;
    }
    to_percent(f64::from(sum) / f64::from(count))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn rank_worst_files(file_counts: IndexMap<PathBuf, usize>, limit: usize) -> Vec<WorstFile> {
    let mut ranked: Vec<WorstFile> = file_counts
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(path, count)| WorstFile { path, count })
        .collect();
    // Stable: ties keep input order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
