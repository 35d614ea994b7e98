//! Which diagnostics fail a build.

use crate::diagnostic::Diagnostic;

/// Decides whether a diagnostic is build-failing.
///
/// A diagnostic fails the build if it is an error or a warning the backend
/// escalated to an error. With `warnings_as_errors` set, every warning fails
/// the build as well.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FailurePolicy {
    /// Treat every warning as build-failing.
    pub warnings_as_errors: bool,
}

impl FailurePolicy {
    /// Creates a policy.
    pub fn new(warnings_as_errors: bool) -> Self {
        Self { warnings_as_errors }
    }

    /// Returns `true` if `diag` fails the build under this policy.
    pub fn is_failing(&self, diag: &Diagnostic) -> bool {
        diag.warning_as_error || diag.severity.fails_build(self.warnings_as_errors)
    }

    /// Returns the failing diagnostics, preserving their order.
    pub fn failing<'a>(&self, diags: &'a [Diagnostic]) -> Vec<&'a Diagnostic> {
        diags.iter().filter(|d| self.is_failing(d)).collect()
    }
}
