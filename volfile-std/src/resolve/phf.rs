//! Resolution over a compile-time perfect hash map.
//!
//! The map is immutable and must be a static reference, so this resolver
//! suits hosts that ship a fixed set of formats.

use super::EntryPointResolver;
use volfile_core::ImportFn;

/// Wraps a static `phf::Map` from entry point name to importer.
pub struct PhfResolver {
    map: &'static ::phf::Map<&'static str, ImportFn>,
}

impl PhfResolver {
    /// Create a resolver from a static map.
    pub const fn new(map: &'static ::phf::Map<&'static str, ImportFn>) -> Self {
        Self { map }
    }
}

impl EntryPointResolver for PhfResolver {
    fn find_entry_point(&self, name: &str) -> Option<ImportFn> {
        self.map.get(name).copied()
    }
}
