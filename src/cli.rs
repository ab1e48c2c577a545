use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{FileSource, LOCAL_CONFIG_NAME};
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Where `check` gets its file list from
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SourceChoice {
    /// Files in the git index
    Tracked,
    /// Every file under the given paths
    Walk,
}

impl From<SourceChoice> for FileSource {
    fn from(choice: SourceChoice) -> Self {
        match choice {
            SourceChoice::Tracked => Self::Tracked,
            SourceChoice::Walk => Self::Walk,
        }
    }
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "compliance-guard")]
#[command(
    author,
    version,
    about = "Heuristic code-structure compliance report for JavaScript and TypeScript"
)]
#[command(long_about = "Scores a repository against structural rules: file length, \
    function length, parameter count, cyclomatic complexity and magic numbers.\n\n\
    Exit codes:\n  \
    0 - Compliance at or above the required minimum\n  \
    1 - Overall compliance below the required minimum\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze files and report compliance per rule
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to analyze (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail (exit 1) when overall compliance is below this percentage
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_compliance: Option<u8>,

    /// File list source (overrides config)
    #[arg(long, value_enum)]
    pub source: Option<SourceChoice>,

    /// File extensions to analyze (comma-separated, e.g., ts,tsx,js)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Ignore .gitignore rules when walking directories
    #[arg(long)]
    pub no_gitignore: bool,

    /// Maximum lines per file (overrides config)
    #[arg(long)]
    pub max_file_lines: Option<usize>,

    /// Maximum lines per function (overrides config)
    #[arg(long)]
    pub max_function_lines: Option<usize>,

    /// Maximum parameters per function (overrides config)
    #[arg(long)]
    pub max_params: Option<usize>,

    /// Maximum cyclomatic complexity per function (overrides config)
    #[arg(long)]
    pub max_complexity: Option<usize>,

    /// Number of worst files to list (overrides config)
    #[arg(long)]
    pub worst_files: Option<usize>,

    /// Worker threads; 1 analyzes files sequentially
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Stop reading new files after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub time_budget: Option<u64>,

    /// List every violation in text output
    #[arg(long)]
    pub show_violations: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration (the old file is kept as .bak)
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
