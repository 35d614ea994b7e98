//! Manifest resources embedded into an emitted binary.

use crate::bytes::LazyBytes;

/// Whether an embedded resource is visible to other modules.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Visibility {
    /// Readable by any module that loads this one.
    Public,
    /// Readable only from within the owning module.
    Private,
}

/// A named resource to embed at emission time.
///
/// The bytes are produced lazily; an entry is consumed once, by the emit step.
#[derive(Clone, Debug)]
pub struct ResourceEntry {
    /// The manifest name of the resource.
    pub name: String,
    /// The resource contents.
    pub data: LazyBytes,
    /// The resource's visibility.
    pub visibility: Visibility,
}

impl ResourceEntry {
    /// Creates a publicly visible resource.
    pub fn public(name: impl Into<String>, data: impl Into<LazyBytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            visibility: Visibility::Public,
        }
    }

    /// Creates a private resource.
    pub fn private(name: impl Into<String>, data: impl Into<LazyBytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            visibility: Visibility::Private,
        }
    }

    /// Returns `true` if the resource is publicly visible.
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}
