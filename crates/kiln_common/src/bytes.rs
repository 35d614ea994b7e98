//! Lazily produced byte streams.

use std::fmt;
use std::io;
use std::sync::Arc;

type Producer = dyn Fn() -> io::Result<Vec<u8>> + Send + Sync;

/// A cheaply clonable handle to bytes that are produced on demand.
///
/// Resource entries and shared reference images hold one of these instead of
/// materialized bytes, so nothing is read until emission consumes it.
#[derive(Clone)]
pub struct LazyBytes(Arc<Producer>);

impl LazyBytes {
    /// Wraps a producer closure. It may be invoked more than once.
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn() -> io::Result<Vec<u8>> + Send + Sync + 'static,
    {
        Self(Arc::new(producer))
    }

    /// Wraps bytes that are already in memory.
    pub fn from_shared(bytes: Arc<[u8]>) -> Self {
        Self::new(move || Ok(bytes.to_vec()))
    }

    /// Produces the bytes.
    pub fn read(&self) -> io::Result<Vec<u8>> {
        (self.0)()
    }
}

impl From<Vec<u8>> for LazyBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_shared(bytes.into())
    }
}

impl From<&'static [u8]> for LazyBytes {
    fn from(bytes: &'static [u8]) -> Self {
        Self::new(move || Ok(bytes.to_vec()))
    }
}

impl fmt::Debug for LazyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LazyBytes(..)")
    }
}
