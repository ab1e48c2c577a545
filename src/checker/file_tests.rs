use std::fmt::Write;

use super::*;

fn rules_of(violations: &[Violation]) -> Vec<RuleKind> {
    violations.iter().map(Violation::rule).collect()
}

fn long_file(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        let _ = writeln!(content, "log(value{i});");
    }
    content
}

fn long_function(body_lines: usize) -> String {
    let mut content = String::from("function long(a) {\n");
    for i in 0..body_lines {
        let _ = writeln!(content, "    step{i}(a);");
    }
    content.push_str("}\n");
    content
}

#[test]
fn clean_file_has_no_violations() {
    let analyzer = FileAnalyzer::new(Thresholds::default());
    let file = SourceFile::new("src/ok.ts", "function ok(a) {\n    return a;\n}\n".to_string());
    assert!(analyzer.analyze(&file).is_empty());
}

#[test]
fn file_length_violation_is_reported_once_at_line_one() {
    let analyzer = FileAnalyzer::new(Thresholds::default());
    let file = SourceFile::new("src/big.ts", long_file(301));
    let violations = analyzer.analyze(&file);

    assert_eq!(rules_of(&violations), vec![RuleKind::FileLength]);
    assert_eq!(violations[0].line(), 1);
    assert_eq!(violations[0].file_path(), std::path::Path::new("src/big.ts"));
    assert!(violations[0].message().contains("301"));
}

#[test]
fn file_at_limit_passes() {
    let analyzer = FileAnalyzer::new(Thresholds::default());
    let file = SourceFile::new("src/edge.ts", long_file(300));
    assert!(analyzer.analyze(&file).is_empty());
}

#[test]
fn function_length_counts_signature_and_closing_brace() {
    let analyzer = FileAnalyzer::new(Thresholds::default());

    // 1 + 28 + 1 = 30 lines: at the limit
    let at_limit = SourceFile::new("a.js", long_function(28));
    assert!(analyzer.analyze(&at_limit).is_empty());

    let over = SourceFile::new("b.js", long_function(29));
    let violations = analyzer.analyze(&over);
    assert_eq!(rules_of(&violations), vec![RuleKind::FunctionLength]);
    assert!(violations[0].message().contains("'long'"));
    assert!(violations[0].message().contains("31 lines"));
}

#[test]
fn max_params_violation() {
    let analyzer = FileAnalyzer::new(Thresholds::default());
    let file = SourceFile::new(
        "src/api.ts",
        "\nexport function create(a, b, c, d) {\n    return [a, b, c, d];\n}\n".to_string(),
    );
    let violations = analyzer.analyze(&file);

    assert_eq!(rules_of(&violations), vec![RuleKind::MaxParams]);
    assert_eq!(violations[0].line(), 2);
    assert!(violations[0].message().contains("4 parameters"));
}

#[test]
fn complexity_violation() {
    let analyzer = FileAnalyzer::new(Thresholds::default());
    let mut content = String::from("function route(k) {\n");
    for i in 0..10 {
        let _ = writeln!(content, "    if (k === 'k{i}') {{ go('k{i}'); }}");
    }
    content.push_str("}\n");
    let violations = analyzer.analyze(&SourceFile::new("r.js", content));

    assert_eq!(rules_of(&violations), vec![RuleKind::CyclomaticComplexity]);
    assert!(violations[0].message().contains("complexity 11"));
}

#[test]
fn magic_numbers_follow_function_rules() {
    let analyzer = FileAnalyzer::new(Thresholds::default());
    let content = "function f(a, b, c, d) {\n    return a * 42;\n}\n";
    let violations = analyzer.analyze(&SourceFile::new("m.js", content.to_string()));

    assert_eq!(
        rules_of(&violations),
        vec![RuleKind::MaxParams, RuleKind::MagicNumber]
    );
    assert_eq!(violations[1].line(), 2);
    assert!(violations[1].message().contains("42"));
}

#[test]
fn custom_thresholds_apply() {
    let thresholds = Thresholds {
        max_params: 1,
        ..Thresholds::default()
    };
    let analyzer = FileAnalyzer::new(thresholds);
    let file = SourceFile::new("p.js", "function pair(a, b) {\n}\n".to_string());
    assert_eq!(rules_of(&analyzer.analyze(&file)), vec![RuleKind::MaxParams]);
}

#[test]
fn disabled_rules_produce_no_violations() {
    let analyzer = FileAnalyzer::new(Thresholds::default()).with_rules(RulesConfig {
        enabled: vec![RuleKind::FileLength],
    });
    let content = "function f(a, b, c, d) {\n    return a * 42;\n}\n";
    assert!(
        analyzer
            .analyze(&SourceFile::new("m.js", content.to_string()))
            .is_empty()
    );
}

#[test]
fn from_config_uses_allowed_numbers() {
    let mut config = Config::default();
    config.magic_numbers.allowed.push(42.0);
    let analyzer = FileAnalyzer::from_config(&config);
    let file = SourceFile::new("m.js", "total = a * 42;\n".to_string());
    assert!(analyzer.analyze(&file).is_empty());
}

#[test]
fn custom_parser_can_be_injected() {
    struct OneSpan;
    impl FunctionParser for OneSpan {
        fn parse(&self, _content: &str) -> Vec<FunctionSpan> {
            vec![FunctionSpan::new(
                "synthetic".to_string(),
                1,
                1,
                9,
                String::new(),
            )]
        }
    }

    let analyzer = FileAnalyzer::with_parser(Thresholds::default(), OneSpan);
    let violations = analyzer.analyze(&SourceFile::new("x.js", "x;\n".to_string()));
    assert_eq!(rules_of(&violations), vec![RuleKind::MaxParams]);
    assert!(violations[0].message().contains("'synthetic'"));
}
