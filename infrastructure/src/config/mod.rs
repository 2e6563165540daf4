//! Configuration file loading for sarcasm-council
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SARCASM_*` environment variables (`SARCASM_BATCH__WORKERS=4`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./sarcasm.toml` or `./.sarcasm.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/sarcasm-council/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    FileAgentsConfig, FileAnalysisConfig, FileBatchConfig, FileConfig, FileOutputConfig,
    FileProviderConfig, FileRetryConfig, FileWebSearchConfig,
};
pub use loader::ConfigLoader;
