//! In-memory compiled-unit cache for incremental project builds.
//!
//! [`UnitCache`] asks a [`CompilerBackend`] to compile a project and every
//! project it depends on, links the results into a graph of [`CompiledUnit`]s
//! that share dependency nodes, and memoizes each unit by project name for the
//! lifetime of the cache.

#![warn(missing_docs)]

pub mod backend;
pub mod cache;
pub mod error;
pub mod reference;
pub mod unit;

pub use backend::{CompiledProject, CompilerBackend};
pub use cache::UnitCache;
pub use error::CacheError;
pub use reference::Reference;
pub use unit::{Compilation, CompiledUnit, EmitOutcome, EmitRequest, SharedReference};
