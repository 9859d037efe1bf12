//! # Dispatch Registry
//!
//! Maps a format tag to the importer entry point found for it and invokes
//! that importer. Resolution happens once per tag: both hits and misses are
//! cached for the lifetime of the registry.
//!
//! # Negative caching
//!
//! A tag whose lookup failed stays unknown, even if a module providing it is
//! loaded later. The first failing call emits one warning (when the log
//! level allows it); later calls return `Ok(None)` silently.
//!
//! # Concurrency
//!
//! Hits take a shared lock. Misses take the exclusive lock and check again
//! before resolving, so each tag is resolved and reported at most once. No
//! lock is held while an importer runs, so importers may dispatch nested
//! files through the same registry.

use crate::{
    canonical::{PathCanonicalizer, RealPath},
    config::DispatchConfig,
    entry::ENTRY_POINT_PREFIX,
    resolve::{ChainResolver, EntryPointResolver, InventoryResolver, ModuleResolver},
    sink::{TracingSink, WarningSink},
};
use parking_lot::RwLock;
use std::{collections::HashMap, sync::OnceLock};
use volfile_core::{FormatTag, ImportFn, ImportResult, ModuleError, Volume};

/// What a registry knows about a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// An importer was found and is cached.
    Resolved,
    /// Resolution failed; the negative result is cached.
    Unresolved,
    /// The tag has not been dispatched yet.
    Unknown,
}

// ============================================================================
// RegistryBuilder
// ============================================================================

/// Builder for a [`Registry`].
///
/// Defaults: [`InventoryResolver`], [`RealPath`], [`TracingSink`] and
/// [`DispatchConfig::default`].
///
/// # Example
/// ```rust,ignore
/// let registry = Registry::builder()
///     .resolver(TableResolver::new())
///     .log_level(1)
///     .build();
/// ```
pub struct RegistryBuilder {
    resolver: Box<dyn EntryPointResolver>,
    canonicalizer: Box<dyn PathCanonicalizer>,
    sink: Box<dyn WarningSink>,
    config: DispatchConfig,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Create a builder with the default collaborators.
    pub fn new() -> Self {
        Self {
            resolver: Box::new(InventoryResolver),
            canonicalizer: Box::new(RealPath),
            sink: Box::new(TracingSink),
            config: DispatchConfig::default(),
        }
    }

    /// Set the entry point resolver.
    pub fn resolver<R: EntryPointResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Set the path canonicalizer.
    pub fn canonicalizer<C: PathCanonicalizer + 'static>(mut self, canonicalizer: C) -> Self {
        self.canonicalizer = Box::new(canonicalizer);
        self
    }

    /// Set the warning sink.
    pub fn sink<S: WarningSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Set only the log level.
    pub fn log_level(mut self, log_level: u32) -> Self {
        self.config.log_level = log_level;
        self
    }

    /// Build the registry with an empty cache.
    pub fn build(self) -> Registry {
        Registry {
            cache: RwLock::new(HashMap::new()),
            resolver: self.resolver,
            canonicalizer: self.canonicalizer,
            sink: self.sink,
            config: self.config,
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// A late-bound importer dispatcher keyed by file extension.
pub struct Registry {
    cache: RwLock<HashMap<FormatTag, Option<ImportFn>>>,
    resolver: Box<dyn EntryPointResolver>,
    canonicalizer: Box<dyn PathCanonicalizer>,
    sink: Box<dyn WarningSink>,
    config: DispatchConfig,
}

impl Registry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Import `filename` into `volume` with the importer for its extension.
    ///
    /// Returns `Ok(None)` when no importer exists for the extension. An
    /// importer's own error is returned as is.
    pub fn import_volume(&self, filename: &str, volume: &mut dyn Volume) -> ImportResult {
        let path = self.canonicalizer.canonicalize(filename);
        let tag = FormatTag::from_filename(filename);

        match self.entry_point(&tag) {
            Some(import) => import(&path, volume).map(Some),
            None => Ok(None),
        }
    }

    /// The cached or freshly resolved entry point for `tag`.
    fn entry_point(&self, tag: &FormatTag) -> Option<ImportFn> {
        if let Some(cached) = self.cache.read().get(tag.as_str()) {
            return *cached;
        }

        let (import, discovered) = {
            let mut cache = self.cache.write();
            match cache.get(tag.as_str()) {
                Some(cached) => (*cached, false),
                None => {
                    let name = self.handler_name(tag.as_str());
                    let import = self.resolver.find_entry_point(&name);
                    tracing::debug!(
                        target: "volfile",
                        tag = %tag,
                        entry_point = %name,
                        found = import.is_some(),
                        "resolved importer"
                    );
                    cache.insert(tag.clone(), import);
                    (import, true)
                }
            }
        };

        if import.is_none() && discovered && self.config.warnings_enabled() {
            self.sink
                .warn(tag, &format!("unrecognized file type '{tag}'."));
        }
        import
    }

    /// Entry point name searched for `tag`.
    pub fn handler_name(&self, tag: &str) -> String {
        format!("{ENTRY_POINT_PREFIX}{tag}")
    }

    /// The entry point prefix, [`ENTRY_POINT_PREFIX`].
    pub fn prefix(&self) -> &'static str {
        ENTRY_POINT_PREFIX
    }

    /// The configuration in use.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// What the cache holds for `tag`.
    pub fn state(&self, tag: &str) -> CacheState {
        match self.cache.read().get(tag) {
            Some(Some(_)) => CacheState::Resolved,
            Some(None) => CacheState::Unresolved,
            None => CacheState::Unknown,
        }
    }

    /// Every tag dispatched so far, resolved or not, sorted.
    pub fn tags(&self) -> Vec<FormatTag> {
        let mut tags: Vec<_> = self.cache.read().keys().cloned().collect();
        tags.sort();
        tags
    }

    /// Number of cached tags.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Whether nothing has been dispatched yet.
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}

// ============================================================================
// Process-wide registry
// ============================================================================

static HOST_MODULES: OnceLock<ModuleResolver> = OnceLock::new();
static GLOBAL: OnceLock<Registry> = OnceLock::new();

fn host_modules() -> &'static ModuleResolver {
    HOST_MODULES.get_or_init(|| {
        ModuleResolver::with_host().unwrap_or_else(|err| {
            tracing::debug!(target: "volfile", error = %err, "host symbols unavailable");
            ModuleResolver::empty()
        })
    })
}

/// The process-wide registry, created on first use.
///
/// It searches `inventory` entry points, then (with the `linkme` feature) the
/// link-time slice, then the host program and every module added with
/// [`load_module`]. Its log level comes from `VOLFILE_LOG_LEVEL`.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(|| {
        let config = DispatchConfig::from_env().unwrap_or_else(|err| {
            tracing::warn!(target: "volfile", error = %err, "ignoring log level");
            DispatchConfig::default()
        });

        let resolver = ChainResolver::new().with(InventoryResolver);
        #[cfg(feature = "linkme")]
        let resolver = resolver.with(crate::resolve::LinkmeResolver);
        let resolver = resolver.with(host_modules().clone());

        Registry::builder().resolver(resolver).config(config).build()
    })
}

/// Import through the process-wide registry.
pub fn import_volume(filename: &str, volume: &mut dyn Volume) -> ImportResult {
    global().import_volume(filename, volume)
}

/// Load a dynamic module into the set searched by the process-wide registry.
///
/// Tags that already failed to resolve stay unresolved.
///
/// # Safety
///
/// See [`ModuleResolver::load`].
pub unsafe fn load_module(path: impl AsRef<std::path::Path>) -> Result<(), ModuleError> {
    unsafe { host_modules().load(path) }
}
