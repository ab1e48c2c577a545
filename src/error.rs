use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComplianceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to enumerate source files: {0}")]
    PathEnumeration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Not a git repository: {0}")]
    GitRepoNotFound(String),
}

impl ComplianceError {
    /// Short category label used when printing errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::TomlSerialize(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::InvalidPattern { .. } => "Pattern",
            Self::PathEnumeration(_) => "Scan",
            Self::JsonSerialize(_) => "Output",
            Self::Git(_) | Self::GitRepoNotFound(_) => "Git",
        }
    }

    /// Whether the error stops a whole run rather than a single file.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::FileRead { .. })
    }
}

pub type Result<T> = std::result::Result<T, ComplianceError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
