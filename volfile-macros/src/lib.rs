//! Registration macros for volfile importers.
//!
//! - `#[volume_file("tag")]` on a struct or enum implementing `VolumeFile`
//! - `#[importer("tag")]` on a function with the importer entry point signature
//!
//! Both submit an `EntryPoint` named `volfile_import_<tag>`. Adding `export`
//! also emits an unmangled symbol of that name so a host can find the
//! importer inside a dynamically loaded module.

use proc_macro::TokenStream;

mod args;
mod importer;
mod volume_file;

/// Register a `VolumeFile` type as the importer for a format tag.
///
/// The type must implement `VolumeFile` and `for<'a> From<&'a Path>`.
///
/// # Example
///
/// ```rust,ignore
/// #[volfile::volume_file("raw")]
/// struct RawFile {
///     path: PathBuf,
/// }
/// ```
#[proc_macro_attribute]
pub fn volume_file(attr: TokenStream, item: TokenStream) -> TokenStream {
    volume_file::volume_file_impl(attr, item)
}

/// Register a function as the importer for a format tag.
///
/// # Example
///
/// ```rust,ignore
/// #[volfile::importer("nrrd", export)]
/// fn import_nrrd(path: &Path, volume: &mut dyn Volume) -> Result<Catalog, BoxError> {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn importer(attr: TokenStream, item: TokenStream) -> TokenStream {
    importer::importer_impl(attr, item)
}
