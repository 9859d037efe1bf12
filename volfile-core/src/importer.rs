//! # Importer Layer (VolumeFile)
//!
//! An importer reads one file format into a [`Volume`]. The dispatcher only
//! knows importers through their entry point, a plain function pointer of
//! type [`ImportFn`], found by name at run time.
//!
//! Format authors usually implement [`VolumeFile`] for a type that can be
//! built from the file path and expose it through [`import_with`]:
//!
//! ```rust
//! use std::path::{Path, PathBuf};
//! use volfile_core::{BoxError, Catalog, ImportFn, Volume, VolumeFile, import_with};
//!
//! struct RawFile {
//!     path: PathBuf,
//! }
//!
//! impl From<&Path> for RawFile {
//!     fn from(path: &Path) -> Self {
//!         Self { path: path.to_path_buf() }
//!     }
//! }
//!
//! impl VolumeFile for RawFile {
//!     fn import_volume(&mut self, volume: &mut dyn Volume) -> Result<Catalog, BoxError> {
//!         volume.set("filename", self.path.display().to_string().into());
//!         Ok(Catalog::new("raw"))
//!     }
//! }
//!
//! let entry: ImportFn = import_with::<RawFile>;
//! ```

use crate::{
    catalog::Catalog,
    error::{BoxError, ImportError},
    volume::Volume,
};
use std::path::Path;

/// Entry point signature every importer exposes.
///
/// Receives the canonicalized (or best-effort) path and the target volume.
/// Neither may be retained past the call.
pub type ImportFn = fn(&Path, &mut dyn Volume) -> Result<Catalog, BoxError>;

/// Severity of a message emitted by an importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Something odd that does not stop the import.
    Warning,
    /// A failure that aborts the import.
    Error,
}

/// A loader for one volume file format.
///
/// The concrete format is unknown to the dispatcher; implementations live in
/// the host program or in modules loaded at run time and are selected by the
/// file extension.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `VolumeFile`",
    label = "missing `VolumeFile` implementation",
    note = "Importers must implement `import_volume`."
)]
pub trait VolumeFile {
    /// Import the volume specification and voxel data.
    fn import_volume(&mut self, volume: &mut dyn Volume) -> Result<Catalog, BoxError>;

    /// A short description of this importer, used in messages.
    fn describe(&self) -> &str {
        "volfile::VolumeFile"
    }

    /// Emit a message tagged with this importer's description.
    fn emit_message(&self, kind: MessageKind, message: &str) {
        match kind {
            MessageKind::Warning => {
                tracing::warn!(target: "volfile", importer = self.describe(), "{message}")
            }
            MessageKind::Error => {
                tracing::error!(target: "volfile", importer = self.describe(), "{message}")
            }
        }
    }

    /// Emit a warning when `condition` holds.
    fn warn_on(&self, condition: bool, message: &str) {
        if condition {
            self.emit_message(MessageKind::Warning, message);
        }
    }

    /// Fail the import when `condition` holds.
    ///
    /// The error is logged and returned; the importer is expected to
    /// propagate it with `?`.
    fn fail_on(&self, condition: bool, message: &str) -> Result<(), ImportError> {
        if !condition {
            return Ok(());
        }
        self.emit_message(MessageKind::Error, message);
        Err(ImportError::Condition {
            origin: self.describe().to_owned(),
            message: message.to_owned(),
        })
    }
}

/// Build `F` from the path and import into `volume`.
///
/// Monomorphized instances coerce to [`ImportFn`], which is how
/// `VolumeFile` types become discoverable entry points.
pub fn import_with<F>(path: &Path, volume: &mut dyn Volume) -> Result<Catalog, BoxError>
where
    F: VolumeFile + for<'a> From<&'a Path>,
{
    let mut file = F::from(path);
    file.import_volume(volume)
}
