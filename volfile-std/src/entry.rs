//! Named importer entry points and their distributed collection.
//!
//! Every importer linked into the process can submit an [`EntryPoint`] to
//! `inventory`. A Rust `dylib` module that links this crate dynamically adds
//! its submissions when it is loaded, so the set can grow over the process
//! lifetime. `cdylib` modules carry their own copy of the collection and
//! must export symbols instead (see [`ModuleResolver`](crate::ModuleResolver)).
//!
//! # Example
//!
//! ```rust,ignore
//! volfile::register_volume_file!(RawFile, raw);
//! volfile::register_importer!(nrrd, import_nrrd);
//! ```

use volfile_core::ImportFn;

/// Prefix joined with a format tag to name its importer entry point.
pub const ENTRY_POINT_PREFIX: &str = "volfile_import_";

/// An importer entry point discoverable by exact name.
#[derive(Debug, Clone, Copy)]
pub struct EntryPoint {
    /// Full entry point name, e.g. `volfile_import_raw`.
    pub name: &'static str,
    /// The importer function.
    pub import: ImportFn,
}

impl EntryPoint {
    /// Create an entry point.
    pub const fn new(name: &'static str, import: ImportFn) -> Self {
        Self { name, import }
    }
}

inventory::collect!(EntryPoint);

/// Iterate over every entry point submitted to `inventory` so far.
pub fn collected() -> impl Iterator<Item = &'static EntryPoint> {
    inventory::iter::<EntryPoint>.into_iter()
}

/// Registers a [`VolumeFile`](volfile_core::VolumeFile) type for a format tag.
///
/// The type must implement `for<'a> From<&'a Path>`. The tag is written as a
/// bare identifier and becomes part of the entry point name.
///
/// # Example
/// ```rust,ignore
/// register_volume_file!(RawFile, raw);
/// ```
#[macro_export]
macro_rules! register_volume_file {
    ($file_type:ty, $tag:ident) => {
        $crate::inventory::submit! {
            $crate::entry::EntryPoint::new(
                concat!("volfile_import_", stringify!($tag)),
                $crate::volfile_core::import_with::<$file_type>,
            )
        }
    };
}

/// Registers a plain importer function for a format tag.
///
/// # Example
/// ```rust,ignore
/// register_importer!(nrrd, import_nrrd);
/// ```
#[macro_export]
macro_rules! register_importer {
    ($tag:ident, $import:path) => {
        $crate::inventory::submit! {
            $crate::entry::EntryPoint::new(
                concat!("volfile_import_", stringify!($tag)),
                $import,
            )
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use volfile_core::{BoxError, Catalog, Volume};

    fn import_unit_test_fmt(_path: &Path, _volume: &mut dyn Volume) -> Result<Catalog, BoxError> {
        Ok(Catalog::new("unit"))
    }

    crate::register_importer!(unit_test_fmt, import_unit_test_fmt);

    #[test]
    fn submitted_entry_is_collected() {
        let found = collected().find(|e| e.name == "volfile_import_unit_test_fmt");
        assert!(found.is_some());
    }

    #[test]
    fn macro_name_uses_prefix() {
        assert!(
            collected()
                .filter(|e| e.name.ends_with("unit_test_fmt"))
                .all(|e| e.name.starts_with(ENTRY_POINT_PREFIX))
        );
    }
}
