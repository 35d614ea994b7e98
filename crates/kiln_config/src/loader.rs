//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::LoaderConfig;
use std::path::Path;

/// Name of the configuration file looked up in a directory.
pub const CONFIG_FILE_NAME: &str = "kiln.toml";

/// Loads and validates `kiln.toml` from `dir`.
///
/// A missing file is not an error and yields the default configuration.
pub fn load_config(dir: &Path) -> Result<LoaderConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    match std::fs::read_to_string(&config_path) {
        Ok(content) => load_config_from_str(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(LoaderConfig::default()),
        Err(e) => Err(e.into()),
    }
}

/// Parses and validates a `kiln.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<LoaderConfig, ConfigError> {
    let config: LoaderConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &LoaderConfig) -> Result<(), ConfigError> {
    let ext = &config.emit.binary_extension;
    let reason = if ext.is_empty() {
        Some("must not be empty")
    } else if ext.starts_with('.') {
        Some("must not start with '.'")
    } else if ext.contains(['/', '\\']) {
        Some("must not contain path separators")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ConfigError::ValidationError {
            field: "emit.binary_extension".to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
