//! Rendering diagnostics into the messages carried by a failed load.

use crate::diagnostic::Diagnostic;

/// Turns a diagnostic into a single human- or machine-readable message.
pub trait DiagnosticFormatter: Send + Sync {
    /// Formats one diagnostic.
    fn format(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-like plain text form.
///
/// ```text
/// error[CS0103]: the name 'x' does not exist in the current context
///   --> src/Program.cs:12:9
/// ```
///
/// Escalated warnings are rendered with the `error` label since that is how
/// they were treated.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainFormatter;

impl DiagnosticFormatter for PlainFormatter {
    fn format(&self, diag: &Diagnostic) -> String {
        let label = diag.severity.label(diag.warning_as_error);
        let mut out = match &diag.code {
            Some(code) => format!("{label}[{code}]: {}", diag.message),
            None => format!("{label}: {}", diag.message),
        };
        if let Some(location) = &diag.location {
            out.push_str(&format!("\n  --> {location}"));
        }
        out
    }
}

/// Renders each diagnostic as a single-line JSON object.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormatter;

impl DiagnosticFormatter for JsonFormatter {
    fn format(&self, diag: &Diagnostic) -> String {
        // Diagnostic contains only strings, integers and bools.
        serde_json::to_string(diag).unwrap_or_else(|_| diag.message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_with_code_and_location() {
        let diag = Diagnostic::error("the name 'x' does not exist")
            .with_code("CS0103")
            .at("src/Program.cs", 12, 9);
        assert_eq!(
            PlainFormatter.format(&diag),
            "error[CS0103]: the name 'x' does not exist\n  --> src/Program.cs:12:9"
        );
    }

    #[test]
    fn plain_without_code() {
        let diag = Diagnostic::warning("metadata file could not be found");
        assert_eq!(
            PlainFormatter.format(&diag),
            "warning: metadata file could not be found"
        );
    }

    #[test]
    fn plain_escalated_warning_reads_as_error() {
        let diag = Diagnostic::warning("unused variable 'y'")
            .with_code("CS0168")
            .escalated();
        assert!(PlainFormatter.format(&diag).starts_with("error[CS0168]"));
    }

    #[test]
    fn json_is_single_line_and_parses() {
        let diag = Diagnostic::error("bad\nthing").with_code("CS1002");
        let out = JsonFormatter.format(&diag);
        assert!(!out.contains('\n'));
        let back: Diagnostic = serde_json::from_str(&out).unwrap();
        assert_eq!(back, diag);
    }

    #[test]
    fn formatter_is_object_safe() {
        let formatters: Vec<Box<dyn DiagnosticFormatter>> =
            vec![Box::new(PlainFormatter), Box::new(JsonFormatter)];
        let diag = Diagnostic::error("x");
        for f in &formatters {
            assert!(f.format(&diag).contains('x'));
        }
    }
}
