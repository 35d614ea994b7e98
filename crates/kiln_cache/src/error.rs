//! Error types for cache operations.

use kiln_common::ProjectName;

/// Errors that can occur while populating the cache.
///
/// A project the backend does not know about is not an error; it is reported
/// as an absent result by [`UnitCache::resolve`](crate::UnitCache::resolve).
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The project graph contains a dependency cycle.
    #[error("dependency cycle detected: {}", format_cycle(.cycle))]
    DependencyCycle {
        /// The projects forming the cycle; the first name is repeated at the end.
        cycle: Vec<ProjectName>,
    },
}

fn format_cycle(cycle: &[ProjectName]) -> String {
    cycle
        .iter()
        .map(ProjectName::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}
