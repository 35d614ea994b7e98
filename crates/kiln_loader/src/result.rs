//! The outcome of a build-and-load request.

/// Either a loaded module or the formatted diagnostics explaining why there is none.
#[derive(Debug)]
pub enum LoadResult<M> {
    /// The project built and its module was loaded.
    Loaded(M),
    /// The build failed; one formatted message per diagnostic, in report order.
    Failed(Vec<String>),
}

impl<M> LoadResult<M> {
    /// Returns `true` if a module was loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadResult::Loaded(_))
    }

    /// Returns the loaded module, if any.
    pub fn module(&self) -> Option<&M> {
        match self {
            LoadResult::Loaded(module) => Some(module),
            LoadResult::Failed(_) => None,
        }
    }

    /// Consumes the result, returning the loaded module, if any.
    pub fn into_module(self) -> Option<M> {
        match self {
            LoadResult::Loaded(module) => Some(module),
            LoadResult::Failed(_) => None,
        }
    }

    /// Returns the failure messages; empty for a loaded module.
    pub fn errors(&self) -> &[String] {
        match self {
            LoadResult::Loaded(_) => &[],
            LoadResult::Failed(errors) => errors,
        }
    }
}
