#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the compliance-guard binary.
#[macro_export]
macro_rules! compliance_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("compliance-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".compliance-guard.toml", content);
    }

    /// A file of `lines` plain statements with no functions or literals.
    pub fn create_long_file(&self, relative_path: &str, lines: usize) {
        let mut content = String::new();
        for i in 0..lines {
            let _ = writeln!(content, "emit(item{i});");
        }
        self.create_file(relative_path, &content);
    }

    /// One 35-line function with four parameters and complexity 11.
    pub fn create_tangled_function(&self, relative_path: &str) {
        let mut content = String::from("export function handle(req, res, next, ctx) {\n");
        for i in 0..10 {
            let _ = writeln!(content, "    if (req.kind === 'k{i}') {{ next(); }}");
        }
        for i in 0..23 {
            let _ = writeln!(content, "    res.write(ctx.part{i});");
        }
        content.push_str("}\n");
        self.create_file(relative_path, &content);
    }

    /// Turn the fixture into a git repository and stage every file.
    pub fn git_init_and_add(&self) {
        for args in [
            &["init"][..],
            &["config", "user.email", "test@test.com"][..],
            &["config", "user.name", "Test User"][..],
            &["add", "."][..],
        ] {
            Command::new("git")
                .args(args)
                .current_dir(self.path())
                .output()
                .expect("Failed to run git");
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk the directory instead of reading a git index.
pub const WALK_CONFIG: &str = r#"
[scanner]
source = "walk"
gitignore = false
"#;

/// Tight limits so small fixtures produce violations.
pub const STRICT_CONFIG: &str = r#"
[thresholds]
max_file_lines = 5
max_function_lines = 3
max_params = 1
max_complexity = 2

[scanner]
source = "walk"
gitignore = false

[report]
min_compliance = 90
"#;
