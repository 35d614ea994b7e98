//! The top-level build-and-load entry point.

use std::sync::Arc;

use kiln_cache::{CacheError, Reference, UnitCache};
use kiln_common::TargetPlatform;
use kiln_config::LoaderConfig;
use kiln_diagnostics::DiagnosticFormatter;
use tracing::{debug, instrument};

use crate::emit::EmissionPipeline;
use crate::engine::ModuleLoader;
use crate::error::LoadError;
use crate::exporter::ReferenceExporter;
use crate::resources::{ResourceAggregator, ResourceProvider};
use crate::result::LoadResult;

/// Builds projects in memory and loads them through a [`ModuleLoader`].
///
/// Each loader owns a handle to its [`UnitCache`]; loaders built over separate
/// caches share nothing.
pub struct ProjectLoader<L> {
    cache: Arc<UnitCache>,
    resources: ResourceAggregator,
    pipeline: EmissionPipeline,
    engine: L,
}

impl<L: ModuleLoader> ProjectLoader<L> {
    /// Creates a loader over `cache` that loads images with `engine`.
    pub fn new(cache: Arc<UnitCache>, engine: L, config: &LoaderConfig) -> Self {
        Self {
            cache,
            resources: ResourceAggregator::new(config.emit.binary_extension.clone()),
            pipeline: EmissionPipeline::from_config(config),
            engine,
        }
    }

    /// Appends a resource provider; providers are queried in the order added.
    pub fn with_provider(mut self, provider: impl ResourceProvider + 'static) -> Self {
        self.resources.add_provider(provider);
        self
    }

    /// Replaces the formatter used for failure messages.
    pub fn with_formatter(mut self, formatter: impl DiagnosticFormatter + 'static) -> Self {
        self.pipeline = self.pipeline.with_formatter(formatter);
        self
    }

    /// Builds `name` and everything it depends on, then loads its image.
    ///
    /// Returns `Ok(None)` when no such project exists so the caller can fall
    /// back to another way of finding the module.
    #[instrument(level = "debug", skip(self, platform), fields(platform = %platform))]
    pub fn load(
        &self,
        name: &str,
        platform: &TargetPlatform,
    ) -> Result<Option<LoadResult<L::Module>>, LoadError> {
        let Some(unit) = self.cache.resolve(name, platform)? else {
            debug!("not a project; deferring");
            return Ok(None);
        };
        let resources = self.resources.collect(&unit);
        self.pipeline
            .emit(&unit, &resources, &self.engine)
            .map(Some)
    }

    /// Returns the references dependents should compile against for `name`.
    pub fn export_references(
        &self,
        name: &str,
        platform: &TargetPlatform,
    ) -> Result<Vec<Reference>, CacheError> {
        self.exporter().export_references(name, platform)
    }

    /// Returns an exporter sharing this loader's cache.
    pub fn exporter(&self) -> ReferenceExporter {
        ReferenceExporter::new(Arc::clone(&self.cache))
    }

    /// Returns the shared cache, e.g. to signal invalidations.
    pub fn cache(&self) -> &Arc<UnitCache> {
        &self.cache
    }

    /// Returns the module loader.
    pub fn engine(&self) -> &L {
        &self.engine
    }
}
