//! Introspection result returned by a successful import.

use crate::volume::Param;

/// A named, ordered collection of parameters describing imported data.
///
/// Importers return a catalog so callers can inspect what was read without
/// knowing the file format. Ownership passes to the caller.
///
/// # Example
///
/// ```rust
/// use volfile_core::{Catalog, Param};
///
/// let catalog = Catalog::new("scan.raw")
///     .with("dimensions", [64, 64, 32])
///     .with("voxelType", "uchar");
///
/// assert_eq!(catalog.get("voxelType"), Some(&Param::Text("uchar".into())));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    name: String,
    entries: Vec<(String, Param)>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Add an entry, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Param>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Param>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Param> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// The catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[(String, Param)] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
