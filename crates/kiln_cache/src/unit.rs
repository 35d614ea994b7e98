//! Compiled units and the compilation capability the backend provides.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use kiln_common::{LazyBytes, ProjectIdentity, ProjectInfo, ProjectName, ResourceEntry};
use kiln_diagnostics::Diagnostic;

use crate::reference::Reference;

/// Where an emission writes its output.
pub struct EmitRequest<'a> {
    /// Receives the binary image.
    pub code: &'a mut dyn Write,
    /// Receives debug symbols; `None` when the platform cannot load them.
    pub symbols: Option<&'a mut dyn Write>,
    /// Manifest resources to embed in the image.
    pub resources: &'a [ResourceEntry],
}

/// What an emission reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitOutcome {
    /// Whether the backend produced a usable image.
    pub success: bool,
    /// Diagnostics raised while emitting.
    pub diagnostics: Vec<Diagnostic>,
}

impl EmitOutcome {
    /// A successful emission with the given diagnostics.
    pub fn succeeded(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            success: true,
            diagnostics,
        }
    }

    /// A failed emission with the given diagnostics.
    pub fn failed(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            success: false,
            diagnostics,
        }
    }
}

/// An opaque compilation owned by the compiler backend.
///
/// The pipeline only ever emits it or turns it into a reference for other
/// compilations.
pub trait Compilation: Send + Sync {
    /// Writes the binary image (and symbols, if requested) into the request's streams.
    fn emit(&self, request: EmitRequest<'_>) -> EmitOutcome;

    /// Returns a reference that lets other compilations build against this one in memory.
    fn as_reference(&self) -> Reference;

    /// Returns the references this compilation was built against, in order.
    fn references(&self) -> Vec<Reference>;
}

/// A platform-neutral build output to be embedded into a dependent's image.
#[derive(Clone, Debug)]
pub struct SharedReference {
    /// The module name, without extension.
    pub name: String,
    /// The module's image bytes.
    pub image: LazyBytes,
}

impl SharedReference {
    /// Creates a shared reference.
    pub fn new(name: impl Into<String>, image: impl Into<LazyBytes>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

/// One compiled project, linked to the units of its direct dependencies.
///
/// Units are shared: every dependent of a project holds the same
/// `Arc<CompiledUnit>`, so its diagnostics and outputs are computed once.
pub struct CompiledUnit {
    pub(crate) identity: ProjectIdentity,
    pub(crate) project: ProjectInfo,
    pub(crate) compilation: Arc<dyn Compilation>,
    pub(crate) diagnostics: Vec<Diagnostic>,
    pub(crate) shared_references: Vec<SharedReference>,
    pub(crate) dependencies: Vec<Arc<CompiledUnit>>,
}

impl CompiledUnit {
    /// The project name.
    pub fn name(&self) -> &ProjectName {
        &self.identity.name
    }

    /// The identity (name and platform) this unit was compiled for.
    pub fn identity(&self) -> &ProjectIdentity {
        &self.identity
    }

    /// The resolved project description.
    pub fn project(&self) -> &ProjectInfo {
        &self.project
    }

    /// The compilation handle.
    pub fn compilation(&self) -> &Arc<dyn Compilation> {
        &self.compilation
    }

    /// Diagnostics known before emission, in backend order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Platform-neutral outputs to embed into this unit's image.
    pub fn shared_references(&self) -> &[SharedReference] {
        &self.shared_references
    }

    /// Units of the direct project dependencies, in declaration order.
    pub fn dependencies(&self) -> &[Arc<CompiledUnit>] {
        &self.dependencies
    }
}

impl fmt::Debug for CompiledUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledUnit")
            .field("identity", &self.identity)
            .field("diagnostics", &self.diagnostics.len())
            .field("shared_references", &self.shared_references.len())
            .field(
                "dependencies",
                &self
                    .dependencies
                    .iter()
                    .map(|d| d.name().as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
