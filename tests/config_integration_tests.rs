//! Integration tests for `config validate` and `config show`.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn config_validate_valid_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[thresholds]\nmax_params = 4\n");

    compliance_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success();
}

#[test]
fn config_validate_custom_path() {
    let fixture = TestFixture::new();
    fixture.create_file("ci/strict.toml", "[report]\nmin_compliance = 85\n");

    compliance_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate", "-c", "ci/strict.toml"])
        .assert()
        .success();
}

#[test]
fn config_validate_invalid_toml_syntax() {
    let fixture = TestFixture::new();
    fixture.create_config("[thresholds\n");

    compliance_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn config_validate_missing_file() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_validate_invalid_exclude_glob() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nexclude = [\"[oops\"]\n");

    compliance_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Pattern error"));
}

#[test]
fn config_show_reflects_local_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[thresholds]\nmax_function_lines = 45\n");

    compliance_guard!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_function_lines = 45"));
}

#[test]
fn config_show_json() {
    let fixture = TestFixture::new();

    let output = compliance_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "config", "show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["thresholds"]["max_params"], 3);
    assert_eq!(json["report"]["worst_files"], 10);
}
