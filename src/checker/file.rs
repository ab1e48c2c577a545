use crate::analyzer::{
    ComplexityCounter, FunctionParser, FunctionSpan, HeuristicParser, MagicNumberDetector,
    SourceFile,
};
use crate::config::{Config, RulesConfig, Thresholds};

use super::{Checker, RuleKind, Violation};

/// Evaluates every rule against one file.
///
/// Pure function of file content: the same text always yields the same
/// violations, in the order file-length, per-function rules, magic numbers.
pub struct FileAnalyzer<P: FunctionParser = HeuristicParser> {
    thresholds: Thresholds,
    rules: RulesConfig,
    parser: P,
    complexity: ComplexityCounter,
    magic: MagicNumberDetector,
}

impl FileAnalyzer<HeuristicParser> {
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self::with_parser(thresholds, HeuristicParser::new())
    }

    /// Build an analyzer from thresholds, enabled rules and the magic-number
    /// allow list of `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.thresholds)
            .with_rules(config.rules.clone())
            .with_magic_detector(MagicNumberDetector::new(
                config.magic_numbers.allowed.clone(),
            ))
    }
}

impl<P: FunctionParser> FileAnalyzer<P> {
    #[must_use]
    pub fn with_parser(thresholds: Thresholds, parser: P) -> Self {
        Self {
            thresholds,
            rules: RulesConfig::default(),
            parser,
            complexity: ComplexityCounter::new(),
            magic: MagicNumberDetector::default(),
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_magic_detector(mut self, magic: MagicNumberDetector) -> Self {
        self.magic = magic;
        self
    }

    #[must_use]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// All violations for `file`.
    #[must_use]
    pub fn analyze(&self, file: &SourceFile) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.rules.is_enabled(RuleKind::FileLength)
            && file.line_count() > self.thresholds.max_file_lines
        {
            violations.push(Violation::new(
                file.path(),
                RuleKind::FileLength,
                1,
                format!(
                    "File has {} lines (max {})",
                    file.line_count(),
                    self.thresholds.max_file_lines
                ),
            ));
        }

        for span in self.parser.parse(file.content()) {
            self.check_function(file, &span, &mut violations);
        }

        if self.rules.is_enabled(RuleKind::MagicNumber) {
            violations.extend(self.magic.detect(file.content()).into_iter().map(|m| {
                Violation::new(
                    file.path(),
                    RuleKind::MagicNumber,
                    m.line,
                    format!("Magic number {} should be a named constant", m.literal),
                )
            }));
        }

        violations
    }

    fn check_function(
        &self,
        file: &SourceFile,
        span: &FunctionSpan,
        violations: &mut Vec<Violation>,
    ) {
        let mut push = |rule: RuleKind, message: String| {
            if self.rules.is_enabled(rule) {
                violations.push(Violation::new(file.path(), rule, span.start_line, message));
            }
        };

        let length = span.line_count();
        if length > self.thresholds.max_function_lines {
            push(
                RuleKind::FunctionLength,
                format!(
                    "Function '{}' is {length} lines (max {})",
                    span.name, self.thresholds.max_function_lines
                ),
            );
        }

        if span.param_count > self.thresholds.max_params {
            push(
                RuleKind::MaxParams,
                format!(
                    "Function '{}' has {} parameters (max {})",
                    span.name, span.param_count, self.thresholds.max_params
                ),
            );
        }

        if self.rules.is_enabled(RuleKind::CyclomaticComplexity) {
            let complexity = self.complexity.score(&span.body_text);
            if complexity > self.thresholds.max_complexity {
                push(
                    RuleKind::CyclomaticComplexity,
                    format!(
                        "Function '{}' has cyclomatic complexity {complexity} (max {})",
                        span.name, self.thresholds.max_complexity
                    ),
                );
            }
        }
    }
}

impl<P: FunctionParser> Checker for FileAnalyzer<P> {
    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        self.analyze(file)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
