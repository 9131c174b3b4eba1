//! Configuration module for slnmerge
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SLNMERGE_*)
//! 3. Directory config (./.slnmerge.toml)
//! 4. User config (<config_dir>/slnmerge/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    user_config_path, ConfigWarning, CONFIG_HOME_VAR, PROJECT_CONFIG_FILE, PRUNE_COPIED_VAR,
    VERBOSITY_VAR, WARNINGS_FILE_VAR,
};
pub use types::{ColorMode, Config, ConsolidateConfig, OutputConfig, ReportConfig, Verbosity};
