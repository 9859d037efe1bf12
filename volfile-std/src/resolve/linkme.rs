//! Resolution over a `linkme` distributed slice.
//!
//! An alternative to `inventory` for targets without static constructors.
//! Entries are gathered by the linker, so only code linked into the final
//! binary contributes.
//!
//! ```rust,ignore
//! #[linkme::distributed_slice(volfile::ENTRY_POINTS)]
//! static RAW: volfile::EntryPoint =
//!     volfile::EntryPoint::new("volfile_import_raw", volfile::import_with::<RawFile>);
//! ```

use super::EntryPointResolver;
use crate::entry::EntryPoint;
use volfile_core::ImportFn;

/// Entry points gathered at link time.
#[::linkme::distributed_slice]
pub static ENTRY_POINTS: [EntryPoint];

/// Searches [`ENTRY_POINTS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkmeResolver;

impl EntryPointResolver for LinkmeResolver {
    fn find_entry_point(&self, name: &str) -> Option<ImportFn> {
        ENTRY_POINTS
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.import)
    }
}
