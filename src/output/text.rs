use std::fmt::Write;

use crate::checker::RuleKind;
use crate::error::Result;
use crate::report::ComplianceReport;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

const GOOD_COMPLIANCE: u8 = 80;
const FAIR_COMPLIANCE: u8 = 50;

/// Human-readable summary table.
///
/// Percentages are colored green from 80, yellow from 50 and red below.
/// Individual violations are listed only when asked for.
pub struct TextFormatter {
    use_colors: bool,
    show_violations: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            show_violations: false,
        }
    }

    #[must_use]
    pub const fn with_violations(mut self, show: bool) -> Self {
        self.show_violations = show;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn band_color(percent: u8) -> &'static str {
        if percent >= GOOD_COMPLIANCE {
            ansi::GREEN
        } else if percent >= FAIR_COMPLIANCE {
            ansi::YELLOW
        } else {
            ansi::RED
        }
    }

    fn colorize_with_color(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn percent(&self, value: u8) -> String {
        // Pad before coloring so escape codes do not break alignment
        self.colorize_with_color(&format!("{value:>3}%"), Self::band_color(value))
    }

    fn format_rules(&self, report: &ComplianceReport, output: &mut String) {
        writeln!(output, "{:<24}{:>12}{:>12}", "Rule", "Compliance", "Violations").ok();
        for rule in RuleKind::ALL {
            writeln!(
                output,
                "{:<24}        {}{:>12}",
                rule.as_str(),
                self.percent(report.compliance(rule)),
                report.violations_for(rule)
            )
            .ok();
        }
    }

    fn format_worst_files(report: &ComplianceReport, output: &mut String) {
        if report.worst_files.is_empty() {
            return;
        }
        writeln!(output).ok();
        writeln!(output, "Worst files:").ok();
        for worst in &report.worst_files {
            writeln!(output, "  {:>4}  {}", worst.count, worst.path.display()).ok();
        }
    }

    fn format_violations(&self, report: &ComplianceReport, output: &mut String) {
        if !self.show_violations || report.violations.is_empty() {
            return;
        }
        writeln!(output).ok();
        writeln!(output, "Violations:").ok();
        for violation in &report.violations {
            writeln!(
                output,
                "  {}:{}  {}  {}",
                violation.file_path().display(),
                violation.line(),
                self.colorize_with_color(violation.rule().as_str(), ansi::YELLOW),
                violation.message()
            )
            .ok();
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ComplianceReport) -> Result<String> {
        let mut output = String::new();

        writeln!(
            output,
            "{}",
            self.colorize_with_color("Compliance report", ansi::BOLD)
        )
        .ok();
        writeln!(output, "  Files analyzed: {}", report.files_analyzed).ok();
        writeln!(output, "  Total lines:    {}", report.total_lines).ok();
        if !report.skipped_files.is_empty() {
            writeln!(output, "  Skipped:        {}", report.skipped_files.len()).ok();
        }
        writeln!(output).ok();

        self.format_rules(report, &mut output);
        writeln!(output).ok();
        writeln!(
            output,
            "Overall compliance: {}",
            self.percent(report.overall_compliance).trim_start()
        )
        .ok();

        Self::format_worst_files(report, &mut output);
        self.format_violations(report, &mut output);

        if report.truncated {
            writeln!(output).ok();
            writeln!(
                output,
                "{}",
                self.colorize_with_color(
                    "Analysis stopped early; results cover only the files read so far.",
                    ansi::YELLOW
                )
            )
            .ok();
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
