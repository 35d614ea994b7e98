//! The compiler backend contract.

use std::sync::Arc;

use kiln_common::{ProjectInfo, ProjectName, TargetPlatform};
use kiln_diagnostics::Diagnostic;

use crate::unit::{Compilation, SharedReference};

/// What the backend hands back for a single project.
///
/// Dependencies are listed by name; the cache compiles and links them.
pub struct CompiledProject {
    /// The resolved project description.
    pub project: ProjectInfo,
    /// The compilation handle.
    pub compilation: Arc<dyn Compilation>,
    /// Diagnostics raised before emission, e.g. semantic errors.
    pub diagnostics: Vec<Diagnostic>,
    /// Platform-neutral outputs produced while building this project.
    pub shared_references: Vec<SharedReference>,
    /// Direct project dependencies, in declaration order.
    pub dependencies: Vec<ProjectName>,
}

/// Parses, analyzes and compiles projects.
pub trait CompilerBackend: Send + Sync {
    /// Compiles `name` for `platform`.
    ///
    /// Returns `None` when no such project exists; compile errors are reported
    /// through [`CompiledProject::diagnostics`] instead.
    fn compile(&self, name: &ProjectName, platform: &TargetPlatform) -> Option<CompiledProject>;
}
