use std::fs;
use std::path::{Path, PathBuf};

use crate::{ComplianceError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// With `--force` an existing file is copied to `<path>.bak` first.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() {
        if !args.force {
            return Err(ComplianceError::Config(format!(
                "Configuration file already exists: {}. Use --force to overwrite.",
                output_path.display()
            )));
        }
        let backup = backup_path(output_path);
        fs::copy(output_path, &backup)?;
        println!("Backed up existing configuration to {}", backup.display());
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# compliance-guard configuration file

[thresholds]
# Maximum lines per file (default: 300)
max_file_lines = 300

# Maximum lines per function, signature to closing brace (default: 30)
max_function_lines = 30

# Maximum parameters per function (default: 3)
max_params = 3

# Maximum cyclomatic complexity per function (default: 10)
max_complexity = 10

[rules]
# Rules to evaluate. Disabled rules always score 100%.
enabled = [
    "file-length",
    "function-length",
    "max-params",
    "cyclomatic-complexity",
    "magic-number",
]

[magic_numbers]
# Literals that are never reported
allowed = [0.0, 1.0, -1.0, 2.0, 100.0, 1000.0, 0.5, 0.1]

[scanner]
# "tracked" uses the git index; "walk" visits every file under the given paths
source = "tracked"

# Respect .gitignore when walking (default: true)
gitignore = true

extensions = ["ts", "tsx", "js", "jsx", "mjs", "cjs"]

# Exclude patterns (glob syntax)
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/vendor/**",
    "**/coverage/**",
    "**/*.min.js",
    "**/*.d.ts",
]

[report]
# Exit with code 1 when overall compliance is below this percentage (0-100)
min_compliance = 0

# Number of files listed under "Worst files"
worst_files = 10

# Analyze files on all cores (default: true)
parallel = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
