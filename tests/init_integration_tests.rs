//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content =
        std::fs::read_to_string(fixture.path().join(".compliance-guard.toml")).unwrap();
    assert!(content.contains("[thresholds]"));
    assert!(content.contains("max_complexity = 10"));
}

#[test]
fn init_custom_output_path() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .current_dir(fixture.path())
        .args(["init", "-o", "custom.toml"])
        .assert()
        .success();

    assert!(fixture.path().join("custom.toml").exists());
}

#[test]
fn init_refuses_existing_file() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing\n");

    compliance_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites_and_backs_up() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing\n");

    compliance_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backed up"));

    let backup =
        std::fs::read_to_string(fixture.path().join(".compliance-guard.toml.bak")).unwrap();
    assert_eq!(backup, "# existing\n");
}

#[test]
fn generated_config_validates() {
    let fixture = TestFixture::new();

    compliance_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    compliance_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}
