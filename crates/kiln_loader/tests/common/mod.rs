//! In-memory stand-ins for the compiler backend and the module loader.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use kiln_cache::{
    Compilation, CompiledProject, CompilerBackend, EmitOutcome, EmitRequest, Reference,
    SharedReference,
};
use kiln_common::{ProjectInfo, ProjectName, TargetPlatform};
use kiln_diagnostics::Diagnostic;
use kiln_loader::{EngineError, ModuleLoader};

/// How a fake project behaves when compiled and emitted.
#[derive(Clone, Default)]
pub struct FakeProject {
    pub dependencies: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    pub emit_diagnostics: Vec<Diagnostic>,
    pub emit_fails: bool,
    pub shared: Vec<(String, Vec<u8>)>,
    pub framework: Vec<(String, Vec<u8>)>,
    pub directory: PathBuf,
    pub embedded_files: Vec<PathBuf>,
}

impl FakeProject {
    pub fn depending_on(deps: &[&str]) -> Self {
        Self {
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_diagnostic(mut self, diag: Diagnostic) -> Self {
        self.diagnostics.push(diag);
        self
    }

    pub fn with_emit_diagnostic(mut self, diag: Diagnostic) -> Self {
        self.emit_diagnostics.push(diag);
        self
    }

    pub fn failing_emit(mut self) -> Self {
        self.emit_fails = true;
        self
    }

    pub fn with_shared(mut self, name: &str, bytes: &[u8]) -> Self {
        self.shared.push((name.to_string(), bytes.to_vec()));
        self
    }

    /// Adds an in-memory framework image the compilation was built against.
    pub fn with_framework_image(mut self, name: &str, bytes: &[u8]) -> Self {
        self.framework.push((name.to_string(), bytes.to_vec()));
        self
    }
}

/// What one call to `emit` received.
#[derive(Clone, Debug)]
pub struct EmitRecord {
    pub project: String,
    pub resources: Vec<(String, Vec<u8>, bool)>,
    pub with_symbols: bool,
}

#[derive(Clone)]
pub struct FakeCompilation {
    name: String,
    project: FakeProject,
    references: Vec<Reference>,
    emits: Arc<Mutex<Vec<EmitRecord>>>,
}

impl Compilation for FakeCompilation {
    fn emit(&self, request: EmitRequest<'_>) -> EmitOutcome {
        let resources = request
            .resources
            .iter()
            .map(|r| (r.name.clone(), r.data.read().unwrap_or_default(), r.is_public()))
            .collect();
        self.emits.lock().unwrap().push(EmitRecord {
            project: self.name.clone(),
            resources,
            with_symbols: request.symbols.is_some(),
        });

        if self.project.emit_fails {
            return EmitOutcome::failed(self.project.emit_diagnostics.clone());
        }
        write!(request.code, "IMAGE:{}", self.name).unwrap();
        if let Some(symbols) = request.symbols {
            write!(symbols, "PDB:{}", self.name).unwrap();
        }
        EmitOutcome::succeeded(self.project.emit_diagnostics.clone())
    }

    fn as_reference(&self) -> Reference {
        Reference::compilation(self.name.as_str(), Arc::new(self.clone()))
    }

    fn references(&self) -> Vec<Reference> {
        self.references.clone()
    }
}

/// A backend over a fixed set of fake projects.
#[derive(Clone, Default)]
pub struct FakeBackend {
    projects: HashMap<String, FakeProject>,
    compiles: Arc<Mutex<Vec<String>>>,
    emits: Arc<Mutex<Vec<EmitRecord>>>,
}

impl FakeBackend {
    pub fn with(mut self, name: &str, project: FakeProject) -> Self {
        self.projects.insert(name.to_string(), project);
        self
    }

    pub fn compile_count(&self, name: &str) -> usize {
        self.compiles.lock().unwrap().iter().filter(|n| *n == name).count()
    }

    pub fn emits(&self) -> Vec<EmitRecord> {
        self.emits.lock().unwrap().clone()
    }

    /// Transitive project dependencies of `name` in depth-first pre-order,
    /// each listed once, as file references, followed by `name`'s own
    /// framework images.
    fn references_of(&self, name: &str) -> Vec<Reference> {
        let mut seen: Vec<String> = Vec::new();
        let mut stack: Vec<String> = self.projects[name]
            .dependencies
            .iter()
            .rev()
            .cloned()
            .collect();
        while let Some(next) = stack.pop() {
            if seen.contains(&next) {
                continue;
            }
            if let Some(project) = self.projects.get(&next) {
                stack.extend(project.dependencies.iter().rev().cloned());
            }
            seen.push(next);
        }
        let files = seen.into_iter().map(|n| Reference::File {
            path: PathBuf::from(format!("{n}.dll")),
            name: n,
        });
        let images = self.projects[name]
            .framework
            .iter()
            .map(|(n, bytes)| Reference::Image {
                name: n.clone(),
                image: bytes.clone().into(),
            });
        files.chain(images).collect()
    }
}

impl CompilerBackend for FakeBackend {
    fn compile(&self, name: &ProjectName, _: &TargetPlatform) -> Option<CompiledProject> {
        self.compiles.lock().unwrap().push(name.to_string());
        let project = self.projects.get(name.as_str())?.clone();
        let mut info = ProjectInfo::new(name.clone(), project.directory.clone());
        info.embedded_files = project.embedded_files.clone();
        Some(CompiledProject {
            project: info,
            compilation: Arc::new(FakeCompilation {
                name: name.to_string(),
                project: project.clone(),
                references: self.references_of(name.as_str()),
                emits: Arc::clone(&self.emits),
            }),
            diagnostics: project.diagnostics.clone(),
            shared_references: project
                .shared
                .iter()
                .map(|(n, b)| SharedReference::new(n.clone(), b.clone()))
                .collect(),
            dependencies: project
                .dependencies
                .iter()
                .map(|d| ProjectName::new(d.as_str()))
                .collect(),
        })
    }
}

/// A loaded fake module.
#[derive(Debug, PartialEq, Eq)]
pub struct FakeModule {
    pub code: Vec<u8>,
    pub symbols: Option<Vec<u8>>,
}

/// A module loader that keeps the bytes it was given.
#[derive(Default)]
pub struct FakeEngine {
    pub reject: bool,
    pub loads: Mutex<usize>,
}

impl FakeEngine {
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub fn load_count(&self) -> usize {
        *self.loads.lock().unwrap()
    }
}

impl ModuleLoader for FakeEngine {
    type Module = FakeModule;

    fn load_bytes(&self, code: &[u8], symbols: Option<&[u8]>) -> Result<FakeModule, EngineError> {
        *self.loads.lock().unwrap() += 1;
        if self.reject {
            return Err("bad image format".into());
        }
        Ok(FakeModule {
            code: code.to_vec(),
            symbols: symbols.map(<[u8]>::to_vec),
        })
    }
}

pub fn platform() -> TargetPlatform {
    TargetPlatform::new("net451")
}
