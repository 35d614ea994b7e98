//! Emission and the diagnostic gate in front of the module loader.

use std::io::Write;

use kiln_cache::{CompiledUnit, EmitRequest};
use kiln_common::{ContentHash, ResourceEntry};
use kiln_config::{LoaderConfig, MessageFormat};
use kiln_diagnostics::{
    Diagnostic, DiagnosticFormatter, FailurePolicy, JsonFormatter, PlainFormatter,
};
use tracing::{debug, info, instrument};

use crate::engine::ModuleLoader;
use crate::error::LoadError;
use crate::result::LoadResult;

/// The bytes produced by a successful emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmittedImage {
    /// The binary image.
    pub code: Vec<u8>,
    /// Debug symbols, on platforms that load them.
    pub symbols: Option<Vec<u8>>,
    /// XXH3 hash of `code`.
    pub hash: ContentHash,
}

impl EmittedImage {
    /// Wraps emitted streams, hashing the image.
    pub fn new(code: Vec<u8>, symbols: Option<Vec<u8>>) -> Self {
        let hash = ContentHash::from_bytes(&code);
        Self {
            code,
            symbols,
            hash,
        }
    }
}

/// Emits compiled units into memory and decides whether they may be loaded.
///
/// A diagnostic fails the build when the [`FailurePolicy`] says so. If
/// emission fails, the messages list the unit's own failing diagnostics and
/// then everything emission reported. If emission succeeds, only the unit's
/// own failing diagnostics can stop the load.
pub struct EmissionPipeline {
    policy: FailurePolicy,
    formatter: Box<dyn DiagnosticFormatter>,
    debug_symbols: bool,
}

impl EmissionPipeline {
    /// Creates a pipeline with the default policy and plain formatting.
    pub fn new() -> Self {
        Self {
            policy: FailurePolicy::default(),
            formatter: Box::new(PlainFormatter),
            debug_symbols: true,
        }
    }

    /// Creates a pipeline configured from `kiln.toml` settings.
    pub fn from_config(config: &LoaderConfig) -> Self {
        let formatter: Box<dyn DiagnosticFormatter> = match config.diagnostics.format {
            MessageFormat::Plain => Box::new(PlainFormatter),
            MessageFormat::Json => Box::new(JsonFormatter),
        };
        Self {
            policy: FailurePolicy::new(config.diagnostics.warnings_as_errors),
            formatter,
            debug_symbols: config.emit.debug_symbols,
        }
    }

    /// Replaces the diagnostic formatter.
    pub fn with_formatter(mut self, formatter: impl DiagnosticFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Replaces the failure policy.
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Emits `unit` with `resources` embedded and, if nothing fails the build,
    /// loads the image through `loader`.
    ///
    /// A failed build is `Ok(LoadResult::Failed)`; only a loader error is `Err`.
    #[instrument(level = "debug", skip_all, fields(project = %unit.name()))]
    pub fn emit<L: ModuleLoader>(
        &self,
        unit: &CompiledUnit,
        resources: &[ResourceEntry],
        loader: &L,
    ) -> Result<LoadResult<L::Module>, LoadError> {
        let platform = &unit.identity().platform;
        let want_symbols = self.debug_symbols && platform.debug_symbols;
        if self.debug_symbols && !platform.debug_symbols {
            debug!(%platform, "platform does not support debug symbols; emitting without them");
        }

        // Both buffers are dropped on every return path below.
        let mut code: Vec<u8> = Vec::new();
        let mut symbols: Vec<u8> = Vec::new();
        let outcome = unit.compilation().emit(EmitRequest {
            code: &mut code,
            symbols: if want_symbols {
                Some(&mut symbols as &mut dyn Write)
            } else {
                None
            },
            resources,
        });
        debug!(
            success = outcome.success,
            diagnostics = outcome.diagnostics.len(),
            resources = resources.len(),
            "emitted"
        );

        let failing = self.policy.failing(unit.diagnostics());
        if !outcome.success {
            let all_emitted = outcome.diagnostics.iter();
            return Ok(LoadResult::Failed(
                self.format_all(failing.into_iter().chain(all_emitted)),
            ));
        }

        // A successful emission is judged on the unit's own diagnostics only.
        if !failing.is_empty() {
            return Ok(LoadResult::Failed(self.format_all(failing.into_iter())));
        }

        let image = EmittedImage::new(code, want_symbols.then_some(symbols));
        let module = loader
            .load_bytes(&image.code, image.symbols.as_deref())
            .map_err(|source| LoadError::Engine {
                project: unit.name().clone(),
                source,
            })?;
        info!(
            hash = %image.hash.short(),
            bytes = image.code.len(),
            symbol_bytes = image.symbols.as_ref().map_or(0, Vec::len),
            "loaded module"
        );
        Ok(LoadResult::Loaded(module))
    }

    fn format_all<'a>(&self, diags: impl Iterator<Item = &'a Diagnostic>) -> Vec<String> {
        diags.map(|d| self.formatter.format(d)).collect()
    }
}

impl Default for EmissionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
