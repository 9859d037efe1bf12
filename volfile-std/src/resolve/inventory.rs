//! Resolution over entry points collected with `inventory`.

use super::EntryPointResolver;
use crate::entry;
use volfile_core::ImportFn;

/// Searches every [`EntryPoint`](crate::EntryPoint) submitted to `inventory`.
///
/// The collection is walked on each lookup, so entry points contributed by
/// `dylib` modules loaded after start-up are found too. The registry caches results,
/// which keeps the walk off the hot path.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryResolver;

impl EntryPointResolver for InventoryResolver {
    fn find_entry_point(&self, name: &str) -> Option<ImportFn> {
        entry::collected()
            .find(|entry| entry.name == name)
            .map(|entry| entry.import)
    }
}
