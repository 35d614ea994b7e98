//! Shared foundational types used across the kiln build-and-load pipeline.
//!
//! This crate provides project identities, target-platform descriptors, lazily
//! produced byte sources, manifest resource entries, and content hashing of
//! emitted images.

#![warn(missing_docs)]

pub mod bytes;
pub mod hash;
pub mod platform;
pub mod project;
pub mod resource;

pub use bytes::LazyBytes;
pub use hash::ContentHash;
pub use platform::TargetPlatform;
pub use project::{ProjectIdentity, ProjectInfo, ProjectName};
pub use resource::{ResourceEntry, Visibility};
