use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = ComplianceError::Config("invalid threshold".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid threshold");
}

#[test]
fn error_display_file_read() {
    let err = ComplianceError::FileRead {
        path: PathBuf::from("src/app.ts"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("src/app.ts"));
}

#[test]
fn error_display_path_enumeration() {
    let err = ComplianceError::PathEnumeration("index unreadable".to_string());
    assert_eq!(
        err.to_string(),
        "Failed to enumerate source files: index unreadable"
    );
}

#[test]
fn error_display_git_repo_not_found() {
    let err = ComplianceError::GitRepoNotFound("not a git repository".to_string());
    assert_eq!(
        err.to_string(),
        "Not a git repository: not a git repository"
    );
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        ComplianceError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        ComplianceError::PathEnumeration("test".to_string()).error_type(),
        "Scan"
    );
    assert_eq!(ComplianceError::Git("test".to_string()).error_type(), "Git");
    assert_eq!(
        ComplianceError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn only_file_read_is_recoverable() {
    let read = ComplianceError::FileRead {
        path: PathBuf::from("a.js"),
        source: std::io::Error::other("denied"),
    };
    assert!(!read.is_fatal());
    assert!(ComplianceError::PathEnumeration("boom".to_string()).is_fatal());
    assert!(ComplianceError::Config("bad".to_string()).is_fatal());
}

#[test]
fn io_error_converts_via_from() {
    fn fails() -> Result<()> {
        Err(std::io::Error::other("disk"))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, ComplianceError::Io(_)));
}

#[test]
fn toml_error_converts_via_from() {
    let parsed: std::result::Result<toml::Value, _> = toml::from_str("[unterminated");
    let err: ComplianceError = parsed.unwrap_err().into();
    assert!(err.to_string().starts_with("TOML parse error"));
}
