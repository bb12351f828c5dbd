//! Grove configuration system.
//!
//! TOML configuration for search sessions, with validation. All config
//! sections use defaults so partial configs work out of the box.
//!
//! ```rust,no_run
//! use grove_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GroveConfig, LoggingConfig, SearchConfig, ViewConfig, CONFIG_SCHEMA_VERSION};

use grove_common::ConfigError;
use std::path::Path;

/// Load and validate config from the platform default path, creating a
/// commented default file if none exists.
pub fn load_config() -> Result<GroveConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<GroveConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GroveConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
