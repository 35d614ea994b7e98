//! Compiler diagnostics, the build-failure policy, and message formatting.
//!
//! The compiler backend produces [`Diagnostic`]s; the emission pipeline uses a
//! [`FailurePolicy`] to decide which ones fail a build, and a
//! [`DiagnosticFormatter`] turns the failing ones into the messages carried by
//! a failed load.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod formatter;
pub mod policy;
pub mod severity;

pub use code::DiagnosticCode;
pub use diagnostic::{Diagnostic, Location};
pub use formatter::{DiagnosticFormatter, JsonFormatter, PlainFormatter};
pub use policy::FailurePolicy;
pub use severity::Severity;
