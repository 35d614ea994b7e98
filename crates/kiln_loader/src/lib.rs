//! In-memory project build-and-load pipeline.
//!
//! [`ProjectLoader`] turns a project name into a loaded module: it resolves
//! the compiled unit through the shared [`UnitCache`](kiln_cache::UnitCache),
//! gathers manifest resources with a [`ResourceAggregator`], emits the image
//! with the [`EmissionPipeline`], and hands the bytes to a [`ModuleLoader`].
//! No intermediate artifact touches the disk.
//!
//! [`ReferenceExporter`] serves the other direction: it gives compilations
//! built against a project that project's live in-memory references.

#![warn(missing_docs)]

pub mod emit;
pub mod engine;
pub mod error;
pub mod exporter;
pub mod orchestrator;
pub mod resources;
pub mod result;

pub use emit::{EmissionPipeline, EmittedImage};
pub use engine::{EngineError, ModuleLoader};
pub use error::LoadError;
pub use exporter::ReferenceExporter;
pub use orchestrator::ProjectLoader;
pub use resources::{EmbeddedFileProvider, ResourceAggregator, ResourceProvider};
pub use result::LoadResult;
