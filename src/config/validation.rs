use globset::Glob;

use crate::error::{ComplianceError, Result};

use super::Config;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a threshold is zero, `min_compliance` exceeds 100,
/// `worst_files` is zero, or an exclude pattern is not a valid glob.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_thresholds(config)?;
    validate_report_section(config)?;
    validate_glob_patterns(config)?;
    Ok(())
}

fn validate_thresholds(config: &Config) -> Result<()> {
    let thresholds = &config.thresholds;
    let checks = [
        ("max_file_lines", thresholds.max_file_lines),
        ("max_function_lines", thresholds.max_function_lines),
        ("max_params", thresholds.max_params),
        ("max_complexity", thresholds.max_complexity),
    ];

    for (name, value) in checks {
        if value == 0 {
            return Err(ComplianceError::Config(format!(
                "thresholds.{name} must be greater than 0"
            )));
        }
    }
    Ok(())
}

fn validate_report_section(config: &Config) -> Result<()> {
    if config.report.min_compliance > 100 {
        return Err(ComplianceError::Config(format!(
            "report.min_compliance must be between 0 and 100, got {}",
            config.report.min_compliance
        )));
    }
    if config.report.worst_files == 0 {
        return Err(ComplianceError::Config(
            "report.worst_files must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_glob_patterns(config: &Config) -> Result<()> {
    for pattern in &config.scanner.exclude {
        Glob::new(pattern).map_err(|e| ComplianceError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}
