use crate::error::Result;
use crate::report::ComplianceReport;

use super::OutputFormatter;

/// Pretty-printed JSON of the whole report.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ComplianceReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
