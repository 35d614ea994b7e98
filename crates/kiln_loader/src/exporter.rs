//! Exporting a project's references to compilations built against it.

use std::sync::Arc;

use kiln_cache::{CacheError, Reference, UnitCache};
use kiln_common::TargetPlatform;
use tracing::instrument;

/// Hands out the references a dependent compilation needs for a project.
///
/// Shares its [`UnitCache`] with the [`ProjectLoader`](crate::ProjectLoader),
/// so exporting never compiles a project a second time.
#[derive(Clone)]
pub struct ReferenceExporter {
    cache: Arc<UnitCache>,
}

impl ReferenceExporter {
    /// Creates an exporter over `cache`.
    pub fn new(cache: Arc<UnitCache>) -> Self {
        Self { cache }
    }

    /// Returns the project's own live compilation reference followed by every
    /// reference that compilation was built against, in original order.
    ///
    /// An unknown project contributes no references.
    #[instrument(level = "debug", skip(self, platform))]
    pub fn export_references(
        &self,
        name: &str,
        platform: &TargetPlatform,
    ) -> Result<Vec<Reference>, CacheError> {
        let Some(unit) = self.cache.resolve(name, platform)? else {
            return Ok(Vec::new());
        };
        let compilation = unit.compilation();
        let mut references = vec![compilation.as_reference()];
        references.extend(compilation.references());
        Ok(references)
    }
}
