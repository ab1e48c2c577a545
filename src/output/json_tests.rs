use super::*;
use crate::analyzer::SourceFile;
use crate::checker::{RuleKind, Violation};
use crate::report::Tally;

fn sample_report() -> ComplianceReport {
    let file = SourceFile::new("src/app.ts", "total = price * 42;\n".to_string());
    let violations = vec![Violation::new(
        "src/app.ts",
        RuleKind::MagicNumber,
        1,
        "Magic number 42 should be a named constant".to_string(),
    )];
    Tally::from_file(&file, violations).finish(10)
}

#[test]
fn json_contains_summary_fields() {
    let output = JsonFormatter.format(&sample_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["files_analyzed"], 1);
    assert_eq!(value["total_lines"], 1);
    assert_eq!(value["overall_compliance"], 90);
    assert_eq!(value["truncated"], false);
    assert_eq!(value["compliance_by_rule"]["magic-number"], 50);
}

#[test]
fn json_lists_violations_and_worst_files() {
    let output = JsonFormatter.format(&sample_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    let violation = &value["violations"][0];
    assert_eq!(violation["file_path"], "src/app.ts");
    assert_eq!(violation["rule"], "magic-number");
    assert_eq!(violation["line"], 1);

    assert_eq!(value["worst_files"][0]["path"], "src/app.ts");
    assert_eq!(value["worst_files"][0]["count"], 1);
}

#[test]
fn empty_report_is_valid_json() {
    let report = Tally::default().finish(10);
    let output = JsonFormatter.format(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["overall_compliance"], 100);
    assert!(value["violations"].as_array().unwrap().is_empty());
    assert_eq!(value["skipped_files"], serde_json::json!([]));
}
