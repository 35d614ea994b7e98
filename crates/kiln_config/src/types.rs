//! Configuration types deserialized from `kiln.toml`.

use serde::Deserialize;

/// The top-level loader configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderConfig {
    /// Emission settings.
    #[serde(default)]
    pub emit: EmitConfig,
    /// Diagnostic policy and formatting.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Settings for the emit step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmitConfig {
    /// File extension given to embedded shared-reference images, without the dot.
    #[serde(default = "default_binary_extension")]
    pub binary_extension: String,
    /// Request a debug-symbol stream on platforms that support one.
    #[serde(default = "default_true")]
    pub debug_symbols: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            binary_extension: default_binary_extension(),
            debug_symbols: true,
        }
    }
}

fn default_binary_extension() -> String {
    "dll".to_string()
}

fn default_true() -> bool {
    true
}

/// How diagnostics gate and describe a failed build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Treat every warning as build-failing.
    #[serde(default)]
    pub warnings_as_errors: bool,
    /// Output format of failure messages.
    #[serde(default)]
    pub format: MessageFormat,
}

/// Output format of formatted diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// `severity[CODE]: message` with an optional location line (default).
    #[default]
    Plain,
    /// One JSON object per diagnostic.
    Json,
}
