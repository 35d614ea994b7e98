//! The process-wide compiled-unit cache.
//!
//! `UnitCache` memoizes compiled units by project name. Resolving a project
//! compiles it and its whole dependency subgraph before anything is published,
//! so readers never see a unit whose dependencies are missing.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use kiln_common::{ProjectIdentity, ProjectName, TargetPlatform};
use tracing::{debug, info, instrument, warn};

use crate::backend::{CompiledProject, CompilerBackend};
use crate::error::CacheError;
use crate::unit::CompiledUnit;

/// Memoizing cache of compiled units, keyed by project name.
///
/// All population happens under a single lock, which makes each project
/// compile at most once even when several threads resolve overlapping graphs.
/// The platform passed to [`resolve`](Self::resolve) is only used on a miss:
/// a cached unit is returned for its name whatever platform is requested.
pub struct UnitCache {
    backend: Box<dyn CompilerBackend>,
    units: Mutex<HashMap<ProjectName, Arc<CompiledUnit>>>,
}

/// A project on the walk stack whose dependencies are still being visited.
struct Frame {
    name: ProjectName,
    next_dependency: usize,
}

impl UnitCache {
    /// Creates an empty cache that compiles through `backend`.
    pub fn new(backend: impl CompilerBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            units: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the compiled unit for `name`, compiling it and every transitive
    /// dependency on first request.
    ///
    /// Returns `Ok(None)` when the backend knows no such project. Failed
    /// resolves are not remembered, so the next call asks the backend again.
    #[instrument(level = "debug", skip(self, platform), fields(platform = %platform))]
    pub fn resolve(
        &self,
        name: &str,
        platform: &TargetPlatform,
    ) -> Result<Option<Arc<CompiledUnit>>, CacheError> {
        let mut units = self.lock();

        if let Some(unit) = units.get(name) {
            if unit.identity.platform != *platform {
                debug!(
                    cached = %unit.identity.platform,
                    "serving unit compiled for a different platform"
                );
            }
            debug!("cache hit");
            return Ok(Some(Arc::clone(unit)));
        }

        let root = ProjectName::new(name);
        let Some(project) = self.backend.compile(&root, platform) else {
            debug!("no such project");
            return Ok(None);
        };

        let linked = self.compile_graph(&units, root, project, platform)?;
        let unit = linked.get(name).cloned();
        units.extend(linked);
        Ok(unit)
    }

    /// Walks the dependency graph below `root` depth-first with an explicit
    /// stack, compiling each project not yet cached and linking units in
    /// post-order so every unit is built after its dependencies.
    ///
    /// Nothing is written to `cached`; the caller publishes the returned units.
    fn compile_graph(
        &self,
        cached: &HashMap<ProjectName, Arc<CompiledUnit>>,
        root: ProjectName,
        project: CompiledProject,
        platform: &TargetPlatform,
    ) -> Result<HashMap<ProjectName, Arc<CompiledUnit>>, CacheError> {
        // Projects on the stack, compiled but not yet linked.
        let mut pending: HashMap<ProjectName, CompiledProject> = HashMap::new();
        let mut linked: HashMap<ProjectName, Arc<CompiledUnit>> = HashMap::new();
        let mut missing: HashSet<ProjectName> = HashSet::new();
        let mut stack = vec![Frame {
            name: root.clone(),
            next_dependency: 0,
        }];
        pending.insert(root, project);

        while let Some(frame) = stack.last_mut() {
            let next = pending
                .get(&frame.name)
                .and_then(|p| p.dependencies.get(frame.next_dependency))
                .cloned();
            frame.next_dependency += 1;

            let Some(dependency) = next else {
                let Some(frame) = stack.pop() else { break };
                let Some(project) = pending.remove(&frame.name) else {
                    continue;
                };
                let unit = link(frame.name.clone(), project, platform, cached, &linked);
                info!(
                    project = %unit.name(),
                    dependencies = unit.dependencies.len(),
                    diagnostics = unit.diagnostics.len(),
                    "compiled project"
                );
                linked.insert(frame.name, Arc::new(unit));
                continue;
            };

            if cached.contains_key(&dependency)
                || linked.contains_key(&dependency)
                || missing.contains(&dependency)
            {
                continue;
            }

            if pending.contains_key(&dependency) {
                let start = stack
                    .iter()
                    .position(|f| f.name == dependency)
                    .unwrap_or(0);
                let mut cycle: Vec<ProjectName> =
                    stack[start..].iter().map(|f| f.name.clone()).collect();
                cycle.push(dependency);
                return Err(CacheError::DependencyCycle { cycle });
            }

            match self.backend.compile(&dependency, platform) {
                Some(project) => {
                    debug!(project = %dependency, "compiling dependency");
                    pending.insert(dependency.clone(), project);
                    stack.push(Frame {
                        name: dependency,
                        next_dependency: 0,
                    });
                }
                None => {
                    warn!(
                        dependency = %dependency,
                        dependent = %frame_name(&stack),
                        "dependency could not be resolved; skipping"
                    );
                    missing.insert(dependency);
                }
            }
        }

        Ok(linked)
    }

    /// Returns the cached unit for `name` without compiling anything.
    pub fn get(&self, name: &str) -> Option<Arc<CompiledUnit>> {
        self.lock().get(name).cloned()
    }

    /// Returns `true` if a unit for `name` is cached.
    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Returns the number of cached units.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the names of all cached projects, sorted.
    pub fn project_names(&self) -> Vec<ProjectName> {
        let mut names: Vec<_> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Evicts `name` and every cached unit that transitively depends on it.
    ///
    /// Dependents must go too since they hold the stale unit as a dependency.
    /// Returns the evicted names, sorted; empty if `name` was not cached.
    pub fn invalidate(&self, name: &str) -> Vec<ProjectName> {
        let mut units = self.lock();
        if !units.contains_key(name) {
            return Vec::new();
        }

        let mut evicted: HashSet<ProjectName> = HashSet::from([ProjectName::new(name)]);
        loop {
            let dependents: Vec<ProjectName> = units
                .iter()
                .filter(|(n, _)| !evicted.contains(*n))
                .filter(|(_, u)| u.dependencies.iter().any(|d| evicted.contains(d.name())))
                .map(|(n, _)| n.clone())
                .collect();
            if dependents.is_empty() {
                break;
            }
            evicted.extend(dependents);
        }

        units.retain(|n, _| !evicted.contains(n));
        let mut evicted: Vec<_> = evicted.into_iter().collect();
        evicted.sort();
        info!(project = name, evicted = evicted.len(), "invalidated cached units");
        evicted
    }

    /// Drops every cached unit.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ProjectName, Arc<CompiledUnit>>> {
        // The map is only mutated after a walk completes, so a poisoned guard
        // still holds a consistent map.
        self.units.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn frame_name(stack: &[Frame]) -> &str {
    stack.last().map_or("", |f| f.name.as_str())
}

/// Builds the unit for `project`, resolving its dependency names against the
/// already cached units and those linked earlier in this walk.
fn link(
    name: ProjectName,
    project: CompiledProject,
    platform: &TargetPlatform,
    cached: &HashMap<ProjectName, Arc<CompiledUnit>>,
    linked: &HashMap<ProjectName, Arc<CompiledUnit>>,
) -> CompiledUnit {
    let dependencies = project
        .dependencies
        .iter()
        .filter_map(|d| cached.get(d).or_else(|| linked.get(d)).cloned())
        .collect();
    CompiledUnit {
        identity: ProjectIdentity::new(name, platform.clone()),
        project: project.project,
        compilation: project.compilation,
        diagnostics: project.diagnostics,
        shared_references: project.shared_references,
        dependencies,
    }
}
