use std::path::Path;

use super::*;

fn js_filter(exclude: &[&str]) -> GlobFilter {
    let exclude: Vec<String> = exclude.iter().map(|s| (*s).to_string()).collect();
    GlobFilter::new(vec!["ts".to_string(), "js".to_string()], &exclude).unwrap()
}

#[test]
fn filter_by_extension() {
    let filter = js_filter(&[]);

    assert!(filter.should_include(Path::new("src/app.ts")));
    assert!(filter.should_include(Path::new("src/app.js")));
    assert!(!filter.should_include(Path::new("src/app.py")));
    assert!(!filter.should_include(Path::new("Makefile")));
}

#[test]
fn extension_match_ignores_case() {
    let filter = js_filter(&[]);
    assert!(filter.should_include(Path::new("legacy/OLD.JS")));
}

#[test]
fn configured_extensions_may_carry_a_dot() {
    let filter = GlobFilter::new(vec![".TSX".to_string(), " mjs ".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("ui/App.tsx")));
    assert!(filter.should_include(Path::new("bin/cli.mjs")));
    assert!(!filter.should_include(Path::new("ui/App.jsx")));
}

#[test]
fn filter_empty_extensions_accepts_all() {
    let filter = GlobFilter::new(vec![], &[]).unwrap();

    assert!(filter.should_include(Path::new("main.rs")));
    assert!(filter.should_include(Path::new("readme.txt")));
}

#[test]
fn vendored_and_build_directories_are_excluded() {
    let filter = js_filter(&["**/node_modules/**", "**/dist/**"]);

    assert!(filter.should_include(Path::new("src/index.ts")));
    assert!(!filter.should_include(Path::new("node_modules/left-pad/index.js")));
    assert!(!filter.should_include(Path::new("packages/ui/dist/bundle.js")));
}

#[test]
fn minified_and_declaration_files_are_excluded() {
    let filter = js_filter(&["**/*.min.js", "**/*.d.ts"]);

    assert!(!filter.should_include(Path::new("public/jquery.min.js")));
    assert!(!filter.should_include(Path::new("types/global.d.ts")));
    assert!(filter.should_include(Path::new("src/types.ts")));
}

#[test]
fn filter_invalid_pattern_returns_error() {
    let result = GlobFilter::new(vec![], &["[invalid".to_string()]);
    assert!(matches!(
        result,
        Err(ComplianceError::InvalidPattern { pattern, .. }) if pattern == "[invalid"
    ));
}
