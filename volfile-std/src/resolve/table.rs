//! Explicit runtime registration.

use super::EntryPointResolver;
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};
use volfile_core::ImportFn;

/// A resolver fed by explicit [`register`](Self::register) calls.
///
/// Clones share the same table, so a handle kept by the host can register
/// importers after the resolver has been moved into a registry.
#[derive(Clone, Default)]
pub struct TableResolver {
    table: Arc<RwLock<HashMap<String, ImportFn>>>,
}

impl TableResolver {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `import` under the full entry point `name`.
    ///
    /// Returns the entry point previously registered under that name.
    pub fn register(&self, name: impl Into<String>, import: ImportFn) -> Option<ImportFn> {
        let name = name.into();
        tracing::trace!(target: "volfile", entry_point = %name, "registering importer");
        self.table.write().insert(name, import)
    }

    /// Whether an entry point named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.table.read().contains_key(name)
    }

    /// Number of registered entry points.
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }
}

impl EntryPointResolver for TableResolver {
    fn find_entry_point(&self, name: &str) -> Option<ImportFn> {
        self.table.read().get(name).copied()
    }
}
