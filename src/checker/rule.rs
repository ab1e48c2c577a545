use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The structural rules evaluated for every file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    FileLength,
    FunctionLength,
    MaxParams,
    CyclomaticComplexity,
    MagicNumber,
}

impl RuleKind {
    /// All rules in report order.
    pub const ALL: [Self; 5] = [
        Self::FileLength,
        Self::FunctionLength,
        Self::MaxParams,
        Self::CyclomaticComplexity,
        Self::MagicNumber,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileLength => "file-length",
            Self::FunctionLength => "function-length",
            Self::MaxParams => "max-params",
            Self::CyclomaticComplexity => "cyclomatic-complexity",
            Self::MagicNumber => "magic-number",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown rule: {s}"))
    }
}
