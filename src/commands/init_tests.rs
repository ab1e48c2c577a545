use std::fs;

use tempfile::TempDir;

use super::*;
use crate::cli::InitArgs;
use crate::config::Config;

#[test]
fn template_parses_to_default_config() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn init_creates_config_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(".compliance-guard.toml");
    let args = InitArgs {
        output: output.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), generate_config_template());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("config.toml");
    fs::write(&output, "# mine\n").unwrap();
    let args = InitArgs {
        output: output.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "# mine\n");
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
}

#[test]
fn init_force_keeps_backup() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("config.toml");
    fs::write(&output, "# mine\n").unwrap();
    let args = InitArgs {
        output: output.clone(),
        force: true,
    };

    run_init_impl(&args).unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("config.toml.bak")).unwrap(),
        "# mine\n"
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), generate_config_template());
}

#[test]
fn backup_path_appends_suffix() {
    assert_eq!(
        backup_path(Path::new("cfg/.compliance-guard.toml")),
        PathBuf::from("cfg/.compliance-guard.toml.bak")
    );
}
