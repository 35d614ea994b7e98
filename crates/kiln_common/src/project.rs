//! Project identities and the resolved project description handed out by the
//! compiler backend.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::path::PathBuf;

use crate::platform::TargetPlatform;

/// The name of a buildable project.
///
/// Names are the sole key of the compiled-unit cache, so two requests for the
/// same name share one compiled unit regardless of platform.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a project name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ProjectName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ProjectName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A project name paired with the platform it was built for.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ProjectIdentity {
    /// The project name.
    pub name: ProjectName,
    /// The platform the project targets.
    pub platform: TargetPlatform,
}

impl ProjectIdentity {
    /// Creates an identity from a name and platform.
    pub fn new(name: impl Into<ProjectName>, platform: TargetPlatform) -> Self {
        Self {
            name: name.into(),
            platform,
        }
    }
}

impl fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.platform)
    }
}

/// What the project resolver knows about a project on disk.
///
/// Produced by the compiler backend alongside a compilation; resource
/// providers read it to discover what to embed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectInfo {
    /// The project name.
    pub name: ProjectName,
    /// The directory containing the project.
    pub directory: PathBuf,
    /// Files to embed as manifest resources, relative to `directory`.
    pub embedded_files: Vec<PathBuf>,
}

impl ProjectInfo {
    /// Creates a project description with no embedded files.
    pub fn new(name: impl Into<ProjectName>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            embedded_files: Vec::new(),
        }
    }

    /// Adds a file to embed.
    pub fn with_embedded_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.embedded_files.push(path.into());
        self
    }
}
