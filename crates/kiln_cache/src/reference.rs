//! Binary references consumed by other compilations.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use kiln_common::{LazyBytes, ProjectName};

use crate::unit::Compilation;

/// A binary usable as an input when compiling another project.
///
/// The pipeline never looks inside a reference; it only orders and hands them
/// on to the backend.
#[derive(Clone)]
pub enum Reference {
    /// The live in-memory compilation of another project.
    Compilation {
        /// The referenced project.
        name: ProjectName,
        /// Its compilation handle.
        compilation: Arc<dyn Compilation>,
    },
    /// A binary image held in memory.
    Image {
        /// The image's module name.
        name: String,
        /// The image bytes.
        image: LazyBytes,
    },
    /// A binary on disk, such as a framework module.
    File {
        /// The module name.
        name: String,
        /// Path to the file.
        path: PathBuf,
    },
}

impl Reference {
    /// Creates a reference to a live compilation.
    pub fn compilation(name: impl Into<ProjectName>, compilation: Arc<dyn Compilation>) -> Self {
        Reference::Compilation {
            name: name.into(),
            compilation,
        }
    }

    /// Returns the referenced module's name.
    pub fn name(&self) -> &str {
        match self {
            Reference::Compilation { name, .. } => name.as_str(),
            Reference::Image { name, .. } | Reference::File { name, .. } => name,
        }
    }
}

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Compilation { name, .. } => write!(f, "Compilation({name})"),
            Reference::Image { name, .. } => write!(f, "Image({name})"),
            Reference::File { path, .. } => write!(f, "File({})", path.display()),
        }
    }
}
