mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{
    Config, FileSource, MagicNumberConfig, ReportConfig, RulesConfig, ScannerConfig, Thresholds,
};
pub use validation::validate_config_semantics;
