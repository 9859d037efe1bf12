//! # volfile - Late-Bound Volume File Import
//!
//! `volfile` picks the importer for a volume file from its extension without
//! the caller knowing, at build time, which importers exist. Importers can be
//! linked in by third parties, registered at run time, or exported from
//! dynamically loaded modules.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::path::{Path, PathBuf};
//! use volfile::prelude::*;
//!
//! #[volfile::volume_file("raw")]
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
//!         // read header and voxels, populate `volume`
//!         Ok(Catalog::new("raw"))
//!     }
//! }
//!
//! let mut volume = ParamVolume::new();
//! match volfile::import_volume("scan.raw", &mut volume)? {
//!     Some(catalog) => println!("imported {}", catalog.name()),
//!     None => println!("no importer for this format"),
//! }
//! ```
//!
//! ## Unknown formats
//!
//! A file whose extension has no importer yields `Ok(None)`. The first such
//! call per extension emits a warning when the log level is 1 or more; the
//! negative result is cached for the registry's lifetime.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

extern crate self as volfile;

pub use volfile_core::{
    // Error types
    BoxError,
    // Results
    Catalog,
    ConfigError,
    // Dispatch key
    FormatTag,
    ImportError,
    // Importer
    ImportFn,
    ImportResult,
    MessageKind,
    ModuleError,
    // Volume
    Param,
    ParamVolume,
    Volume,
    VolumeFile,
    import_with,
};

// Dispatch
pub use volfile_std::{
    CacheState, DispatchConfig, LOG_LEVEL_VAR, Registry, RegistryBuilder, global, import_volume,
    load_module,
};

// Registration
pub use volfile_std::{ENTRY_POINT_PREFIX, EntryPoint, register_importer, register_volume_file};

/// Entry point resolvers.
pub mod resolve {
    #[cfg(feature = "linkme")]
    pub use volfile_std::resolve::LinkmeResolver;
    #[cfg(feature = "phf")]
    pub use volfile_std::resolve::PhfResolver;
    pub use volfile_std::resolve::{
        ChainResolver, EntryPointResolver, InventoryResolver, ModuleResolver, TableResolver,
    };
}

/// Path canonicalizers.
pub mod canonical {
    pub use volfile_std::canonical::{PathCanonicalizer, RealPath, Verbatim};
}

/// Warning sinks.
pub mod sink {
    pub use volfile_std::sink::{NullSink, TracingSink, WarningSink};
}

/// Testing utilities.
pub mod testing {
    pub use volfile_std::testing::{CountingVolume, RecordingSink, loaded_module_path};
}

/// Prelude module - common imports for volfile.
///
/// # Usage
///
/// ```rust,ignore
/// use volfile::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Catalog, FormatTag, ImportResult, Param, ParamVolume, Registry, Volume,
        VolumeFile, import_with,
    };
}

#[cfg(feature = "macros")]
pub use volfile_macros::{importer, volume_file};

#[cfg(feature = "linkme")]
pub use volfile_std::{ENTRY_POINTS, linkme};
#[cfg(feature = "phf")]
pub use volfile_std::phf;

pub use volfile_std::inventory;
