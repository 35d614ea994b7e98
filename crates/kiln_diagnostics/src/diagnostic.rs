//! Compiler diagnostics as reported by the backend.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A source position attached to a diagnostic.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Location {
    /// The source file.
    pub path: PathBuf,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path.display(), self.line, self.column)
    }
}

/// A message produced by the compiler backend.
///
/// Diagnostics are immutable once created. Whether one fails a build is
/// decided by [`FailurePolicy`](crate::FailurePolicy), which looks at the
/// severity and at [`warning_as_error`](Self::warning_as_error).
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The reported severity.
    pub severity: Severity,
    /// The backend's identifier for this kind of diagnostic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<DiagnosticCode>,
    /// The message text.
    pub message: String,
    /// Where the problem was found, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Set when the backend escalated a warning to an error.
    #[serde(default)]
    pub warning_as_error: bool,
}

impl Diagnostic {
    fn with_severity(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            location: None,
            warning_as_error: false,
        }
    }

    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, message)
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, message)
    }

    /// Creates an informational diagnostic.
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Info, message)
    }

    /// Sets the diagnostic code.
    pub fn with_code(mut self, code: impl Into<DiagnosticCode>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the source location.
    pub fn at(mut self, path: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        self.location = Some(Location {
            path: path.into(),
            line,
            column,
        });
        self
    }

    /// Marks this diagnostic as a warning escalated to an error.
    pub fn escalated(mut self) -> Self {
        self.warning_as_error = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_error() {
        let diag = Diagnostic::error("name 'x' does not exist").with_code("CS0103");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.code.unwrap().as_str(), "CS0103");
        assert!(!diag.warning_as_error);
    }

    #[test]
    fn escalated_warning() {
        let diag = Diagnostic::warning("unused variable").escalated();
        assert_eq!(diag.severity, Severity::Warning);
        assert!(diag.warning_as_error);
    }

    #[test]
    fn location_display() {
        let diag = Diagnostic::info("note").at("src/Program.cs", 12, 5);
        assert_eq!(diag.location.unwrap().to_string(), "src/Program.cs:12:5");
    }

    #[test]
    fn serde_roundtrip() {
        let diag = Diagnostic::warning("obsolete member")
            .with_code("CS0618")
            .at("a.cs", 1, 1)
            .escalated();
        let json = serde_json::to_string(&diag).unwrap();
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(diag, back);
    }

    #[test]
    fn optional_fields_omitted() {
        let json = serde_json::to_string(&Diagnostic::error("boom")).unwrap();
        assert!(!json.contains("code"));
        assert!(!json.contains("location"));
    }
}
