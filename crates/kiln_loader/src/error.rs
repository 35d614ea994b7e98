//! Error types for loading projects.

use kiln_cache::CacheError;
use kiln_common::ProjectName;

use crate::engine::EngineError;

/// Errors that abort a load.
///
/// Compile and emit failures are not errors here; they come back as
/// [`LoadResult::Failed`](crate::LoadResult::Failed).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The project graph could not be populated.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The module loader rejected an image that emitted cleanly.
    #[error("module loader failed for '{project}': {source}")]
    Engine {
        /// The project whose image was rejected.
        project: ProjectName,
        /// The loader's error.
        #[source]
        source: EngineError,
    },
}
