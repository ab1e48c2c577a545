use std::time::Duration;

use crate::checker::FileAnalyzer;
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, validate_config_semantics};
use crate::error::ComplianceError;
use crate::output::{
    Diagnostics, JsonFormatter, OutputFormat, OutputFormatter, ScanProgress, TextFormatter,
};
use crate::report::{ComplianceAggregator, ComplianceReport, FsReader};
use crate::scanner::{FileSelector, selector_for};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_THRESHOLD_EXCEEDED};

use super::context::{color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    let diag = Diagnostics::new(cli.verbose, cli.quiet);

    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    // 2. Select and analyze; a failed enumeration aborts the run
    let selector = selector_for(&config.scanner, args.paths.clone())?;
    let report = analyze(&config, args, selector.as_ref(), &diag)?;
    diag.info(&format!(
        "Analyzed {} source files ({} skipped)",
        report.files_analyzed,
        report.skipped_files.len()
    ));
    for skipped in &report.skipped_files {
        diag.debug(&format!("Skipped unreadable file: {}", skipped.display()));
    }
    if report.truncated {
        diag.warn("time budget exhausted before all files were analyzed; report is partial");
    }

    // 3. Render
    let output = format_report(&report, args, cli)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code_for(
        report.overall_compliance,
        config.report.min_compliance,
    ))
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    let thresholds = &mut config.thresholds;
    if let Some(max) = args.max_file_lines {
        thresholds.max_file_lines = max;
    }
    if let Some(max) = args.max_function_lines {
        thresholds.max_function_lines = max;
    }
    if let Some(max) = args.max_params {
        thresholds.max_params = max;
    }
    if let Some(max) = args.max_complexity {
        thresholds.max_complexity = max;
    }

    if let Some(source) = args.source {
        config.scanner.source = source.into();
    }
    if let Some(ref extensions) = args.ext {
        config.scanner.extensions.clone_from(extensions);
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    if args.no_gitignore {
        config.scanner.gitignore = false;
    }

    if let Some(min) = args.min_compliance {
        config.report.min_compliance = min;
    }
    if let Some(limit) = args.worst_files {
        config.report.worst_files = limit;
    }
    if args.jobs == Some(1) {
        config.report.parallel = false;
    }
}

fn analyze(
    config: &Config,
    args: &CheckArgs,
    selector: &dyn FileSelector,
    diag: &Diagnostics,
) -> crate::Result<ComplianceReport> {
    let mut aggregator =
        ComplianceAggregator::new(FileAnalyzer::from_config(config), FsReader)
            .with_parallel(config.report.parallel)
            .with_worst_files_limit(config.report.worst_files)
            .with_progress(ScanProgress::new(diag.is_quiet()));
    if let Some(seconds) = args.time_budget {
        aggregator = aggregator.with_time_budget(Duration::from_secs(seconds));
    }

    match args.jobs {
        Some(jobs) if jobs > 1 && config.report.parallel => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .map_err(|e| ComplianceError::Config(format!("Cannot start {jobs} workers: {e}")))?;
            pool.install(|| aggregator.analyze_selected(selector))
        }
        _ => aggregator.analyze_selected(selector),
    }
}

fn format_report(report: &ComplianceReport, args: &CheckArgs, cli: &Cli) -> crate::Result<String> {
    match args.format {
        OutputFormat::Text => TextFormatter::new(color_choice_to_mode(cli.color))
            .with_violations(args.show_violations || cli.verbose >= 1)
            .format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

pub(crate) const fn exit_code_for(overall_compliance: u8, min_compliance: u8) -> i32 {
    if overall_compliance < min_compliance {
        EXIT_THRESHOLD_EXCEEDED
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
