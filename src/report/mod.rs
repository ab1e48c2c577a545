//! Repo-wide aggregation of per-file violations into compliance scores.

mod aggregate;
mod model;
mod reader;

pub use aggregate::{ComplianceAggregator, DEFAULT_WORST_FILES};
pub use model::{
    ComplianceReport, Tally, WorstFile, file_length_compliance, scaled_compliance,
};
pub use reader::{FileReader, FsReader};
