use serde::{Deserialize, Serialize};

use crate::analyzer::DEFAULT_ALLOWED_NUMBERS;
use crate::checker::RuleKind;

/// Per-rule limits. A value is exceeded when the measured quantity is
/// strictly greater than it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Thresholds {
    /// Maximum lines per file.
    #[serde(default = "default_max_file_lines")]
    pub max_file_lines: usize,

    /// Maximum lines per function, signature through closing brace.
    #[serde(default = "default_max_function_lines")]
    pub max_function_lines: usize,

    /// Maximum top-level parameters per function.
    #[serde(default = "default_max_params")]
    pub max_params: usize,

    /// Maximum cyclomatic complexity per function.
    #[serde(default = "default_max_complexity")]
    pub max_complexity: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_file_lines: default_max_file_lines(),
            max_function_lines: default_max_function_lines(),
            max_params: default_max_params(),
            max_complexity: default_max_complexity(),
        }
    }
}

/// Which rules produce violations [rules].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    #[serde(default = "default_enabled_rules")]
    pub enabled: Vec<RuleKind>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled_rules(),
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn is_enabled(&self, rule: RuleKind) -> bool {
        self.enabled.contains(&rule)
    }
}

/// Magic-number detection settings [magic_numbers].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MagicNumberConfig {
    /// Literal values that are never reported.
    #[serde(default = "default_allowed_numbers")]
    pub allowed: Vec<f64>,
}

impl Default for MagicNumberConfig {
    fn default() -> Self {
        Self {
            allowed: default_allowed_numbers(),
        }
    }
}

/// Where candidate file paths come from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileSource {
    /// Files in the git index.
    #[default]
    Tracked,
    /// Files found by walking the directory tree.
    Walk,
}

/// Scanner configuration for file selection [scanner].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    #[serde(default)]
    pub source: FileSource,

    /// Respect .gitignore rules when walking (default: true).
    #[serde(default = "default_true")]
    pub gitignore: bool,

    /// Source file extensions to analyze.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for vendored, generated and declaration files.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            source: FileSource::default(),
            gitignore: true,
            extensions: default_extensions(),
            exclude: default_exclude(),
        }
    }
}

/// Report and gating settings [report].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Overall compliance (0-100) below which `check` exits with 1.
    #[serde(default)]
    pub min_compliance: u8,

    /// Number of worst files to list.
    #[serde(default = "default_worst_files")]
    pub worst_files: usize,

    /// Analyze files on all cores.
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            min_compliance: 0,
            worst_files: default_worst_files(),
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub magic_numbers: MagicNumberConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

const fn default_true() -> bool {
    true
}

const fn default_max_file_lines() -> usize {
    300
}

const fn default_max_function_lines() -> usize {
    30
}

const fn default_max_params() -> usize {
    3
}

const fn default_max_complexity() -> usize {
    10
}

const fn default_worst_files() -> usize {
    10
}

fn default_enabled_rules() -> Vec<RuleKind> {
    RuleKind::ALL.to_vec()
}

fn default_allowed_numbers() -> Vec<f64> {
    DEFAULT_ALLOWED_NUMBERS.to_vec()
}

fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx", "mjs", "cjs"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_exclude() -> Vec<String> {
    [
        "**/node_modules/**",
        "**/dist/**",
        "**/build/**",
        "**/vendor/**",
        "**/coverage/**",
        "**/*.min.js",
        "**/*.d.ts",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
