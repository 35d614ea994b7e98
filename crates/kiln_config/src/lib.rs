//! Parsing and validation of `kiln.toml` loader configuration.
//!
//! Every section is optional; a missing file or an empty file yields
//! [`LoaderConfig::default`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
