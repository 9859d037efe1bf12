//! # Entry Point Resolution
//!
//! A resolver answers one question: is there an importer entry point with
//! exactly this name anywhere in the set of modules it searches?
//!
//! | Resolver | Searches | Grows at run time |
//! |----------|----------|-------------------|
//! | [`InventoryResolver`] | Entry points submitted with `inventory` | Yes, when modules load |
//! | [`ModuleResolver`] | Exported symbols of loaded dynamic modules | Yes, via `load` |
//! | [`TableResolver`] | Explicit registrations | Yes, via `register` |
//! | `LinkmeResolver` | A `linkme` distributed slice | No |
//! | `PhfResolver` | A compile-time perfect hash map | No |
//!
//! [`ChainResolver`] searches several of them in order.

use volfile_core::ImportFn;

pub mod inventory;
#[cfg(feature = "linkme")]
pub mod linkme;
pub mod module;
#[cfg(feature = "phf")]
pub mod phf;
pub mod table;

pub use self::inventory::InventoryResolver;
#[cfg(feature = "linkme")]
pub use self::linkme::{ENTRY_POINTS, LinkmeResolver};
pub use self::module::ModuleResolver;
#[cfg(feature = "phf")]
pub use self::phf::PhfResolver;
pub use self::table::TableResolver;

/// Finds importer entry points by exact name.
///
/// A registry calls the resolver while holding its exclusive cache lock, so
/// lookups stall every other dispatch until they return. Implementations must
/// not block on I/O or other threads, and must not call back into a
/// [`Registry`](crate::Registry).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot resolve importer entry points",
    label = "missing `EntryPointResolver` implementation",
    note = "Implement `find_entry_point`, or pass a `Fn(&str) -> Option<ImportFn>` closure."
)]
pub trait EntryPointResolver: Send + Sync {
    /// Return the entry point named `name`, if any module provides it.
    fn find_entry_point(&self, name: &str) -> Option<ImportFn>;
}

impl<F> EntryPointResolver for F
where
    F: Fn(&str) -> Option<ImportFn> + Send + Sync,
{
    fn find_entry_point(&self, name: &str) -> Option<ImportFn> {
        (self)(name)
    }
}

/// Searches a list of resolvers in order; the first match wins.
#[derive(Default)]
pub struct ChainResolver {
    resolvers: Vec<Box<dyn EntryPointResolver>>,
}

impl ChainResolver {
    /// Create an empty chain, which resolves nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolver, builder style.
    pub fn with<R: EntryPointResolver + 'static>(mut self, resolver: R) -> Self {
        self.push(resolver);
        self
    }

    /// Append a resolver.
    pub fn push<R: EntryPointResolver + 'static>(&mut self, resolver: R) {
        self.resolvers.push(Box::new(resolver));
    }

    /// Number of resolvers in the chain.
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl EntryPointResolver for ChainResolver {
    fn find_entry_point(&self, name: &str) -> Option<ImportFn> {
        self.resolvers
            .iter()
            .find_map(|resolver| resolver.find_entry_point(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use volfile_core::{BoxError, Catalog, Volume};

    fn first(_: &Path, _: &mut dyn Volume) -> Result<Catalog, BoxError> {
        Ok(Catalog::new("first"))
    }

    fn second(_: &Path, _: &mut dyn Volume) -> Result<Catalog, BoxError> {
        Ok(Catalog::new("second"))
    }

    fn only(name: &'static str, import: ImportFn) -> impl Fn(&str) -> Option<ImportFn> + Send + Sync {
        move |wanted: &str| (wanted == name).then_some(import)
    }

    #[test]
    fn empty_chain_resolves_nothing() {
        assert!(ChainResolver::new().find_entry_point("volfile_import_raw").is_none());
    }

    #[test]
    fn first_match_wins() {
        let chain = ChainResolver::new()
            .with(only("volfile_import_raw", first))
            .with(only("volfile_import_raw", second))
            .with(only("volfile_import_vol", second));
        assert_eq!(chain.len(), 3);

        let mut volume = volfile_core::ParamVolume::new();
        let raw = chain.find_entry_point("volfile_import_raw").unwrap();
        assert_eq!(raw(Path::new("a.raw"), &mut volume).unwrap().name(), "first");

        let vol = chain.find_entry_point("volfile_import_vol").unwrap();
        assert_eq!(vol(Path::new("a.vol"), &mut volume).unwrap().name(), "second");
    }
}
