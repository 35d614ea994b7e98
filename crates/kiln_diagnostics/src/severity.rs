//! Diagnostic severities as reported by the compiler backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity a compiler backend attaches to a diagnostic.
///
/// Serialized in lowercase, the same spelling backends use in their own
/// machine-readable output.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suppressed by the backend; never fails a build.
    Hidden,
    /// Informational.
    Info,
    /// Fails a build only when escalated or when warnings are treated as errors.
    Warning,
    /// Always fails a build.
    Error,
}

impl Severity {
    /// Returns `true` if a diagnostic of this severity fails the build on its
    /// own, with every warning escalated when `warnings_as_errors` is set.
    pub fn fails_build(self, warnings_as_errors: bool) -> bool {
        match self {
            Severity::Error => true,
            Severity::Warning => warnings_as_errors,
            Severity::Info | Severity::Hidden => false,
        }
    }

    /// The label a failure message carries. An escalated warning reads as an
    /// error since that is how the build treated it.
    pub fn label(self, escalated: bool) -> &'static str {
        match self {
            Severity::Warning if escalated => "error",
            Severity::Hidden => "hidden",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(false))
    }
}
