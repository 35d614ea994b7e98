//! Gathering the manifest resources embedded into a project's image.

use std::path::Path;

use kiln_cache::CompiledUnit;
use kiln_common::{LazyBytes, ProjectInfo, ResourceEntry};

/// Extracts resources to embed from a project.
///
/// Providers return lazy entries; nothing is read until emission.
pub trait ResourceProvider: Send + Sync {
    /// Returns the project's resources, in the order they should be embedded.
    fn provide(&self, project: &ProjectInfo) -> Vec<ResourceEntry>;
}

impl<F> ResourceProvider for F
where
    F: Fn(&ProjectInfo) -> Vec<ResourceEntry> + Send + Sync,
{
    fn provide(&self, project: &ProjectInfo) -> Vec<ResourceEntry> {
        self(project)
    }
}

/// Embeds the files listed in [`ProjectInfo::embedded_files`].
///
/// Each file becomes a public resource named after the project and the file's
/// path with separators replaced by dots, so `Resources/logo.png` in project
/// `Web` is embedded as `Web.Resources.logo.png`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedFileProvider;

impl ResourceProvider for EmbeddedFileProvider {
    fn provide(&self, project: &ProjectInfo) -> Vec<ResourceEntry> {
        project
            .embedded_files
            .iter()
            .map(|relative| {
                let name = format!("{}.{}", project.name, dotted(relative));
                let path = project.directory.join(relative);
                ResourceEntry::public(name, LazyBytes::new(move || std::fs::read(&path)))
            })
            .collect()
    }
}

fn dotted(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Merges resources from every configured provider with the shared
/// references a unit must carry inside its image.
pub struct ResourceAggregator {
    providers: Vec<Box<dyn ResourceProvider>>,
    binary_extension: String,
}

impl ResourceAggregator {
    /// Creates an aggregator with no providers.
    ///
    /// `binary_extension` names the embedded shared-reference images, without the dot.
    pub fn new(binary_extension: impl Into<String>) -> Self {
        Self {
            providers: Vec::new(),
            binary_extension: binary_extension.into(),
        }
    }

    /// Appends a provider; providers are queried in the order they were added.
    pub fn with_provider(mut self, provider: impl ResourceProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Appends a provider in place.
    pub fn add_provider(&mut self, provider: impl ResourceProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// Returns every resource to embed into `unit`'s image: provider output in
    /// provider order, followed by one public entry per shared reference.
    pub fn collect(&self, unit: &CompiledUnit) -> Vec<ResourceEntry> {
        let mut resources = self.provided(unit);
        resources.extend(self.shared_reference_entries(unit));
        resources
    }

    /// Returns the providers' resources for `unit`'s project.
    pub fn provided(&self, unit: &CompiledUnit) -> Vec<ResourceEntry> {
        self.providers
            .iter()
            .flat_map(|p| p.provide(unit.project()))
            .collect()
    }

    /// Returns an entry named `<name>.<extension>` for each shared reference
    /// recorded on `unit`.
    pub fn shared_reference_entries<'a>(
        &'a self,
        unit: &'a CompiledUnit,
    ) -> impl Iterator<Item = ResourceEntry> + 'a {
        unit.shared_references().iter().map(move |shared| {
            ResourceEntry::public(
                format!("{}.{}", shared.name, self.binary_extension),
                shared.image.clone(),
            )
        })
    }
}
