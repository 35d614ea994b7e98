//! The binary-loading engine contract.

/// Error type returned by a [`ModuleLoader`].
pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

/// Turns emitted image bytes into an executable module.
pub trait ModuleLoader {
    /// Handle to a loaded module.
    type Module;

    /// Loads a module from its image and, when available, its debug symbols.
    fn load_bytes(&self, code: &[u8], symbols: Option<&[u8]>) -> Result<Self::Module, EngineError>;
}

impl<L: ModuleLoader + ?Sized> ModuleLoader for &L {
    type Module = L::Module;

    fn load_bytes(&self, code: &[u8], symbols: Option<&[u8]>) -> Result<Self::Module, EngineError> {
        (**self).load_bytes(code, symbols)
    }
}
