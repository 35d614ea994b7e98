//! Target-platform descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Describes the platform a project is compiled and loaded for.
///
/// Detection of the running platform is the host's job; this type only
/// carries the moniker and the capabilities emission cares about.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TargetPlatform {
    /// Framework moniker, e.g. `net451` or `dnxcore50`.
    pub moniker: String,
    /// Whether the platform's loader accepts a debug-symbol stream.
    #[serde(default = "default_true")]
    pub debug_symbols: bool,
}

fn default_true() -> bool {
    true
}

impl TargetPlatform {
    /// Creates a platform that supports debug symbols.
    pub fn new(moniker: impl Into<String>) -> Self {
        Self {
            moniker: moniker.into(),
            debug_symbols: true,
        }
    }

    /// Creates a platform whose loader cannot consume debug symbols.
    pub fn without_debug_symbols(moniker: impl Into<String>) -> Self {
        Self {
            moniker: moniker.into(),
            debug_symbols: false,
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.moniker)
    }
}
