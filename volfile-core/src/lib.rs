//! # volfile-core
//!
//! Core types for the volfile volume import dispatch framework.
//!
//! This crate has minimal dependencies and is what format modules link
//! against: it defines the importer entry point signature and the types that
//! cross it, but no registry.
//!
//! # Pieces
//!
//! - [`FormatTag`]: the dispatch key, the text after the last `.` of a name
//! - [`Volume`]: the opaque target an importer populates
//! - [`Catalog`]: the introspection object a successful import returns
//! - [`VolumeFile`] / [`ImportFn`]: the importer capability and its entry point
//!
//! # Error Types
//!
//! - [`ImportError`] - Importer failures
//! - [`ModuleError`] - Dynamic module loading failures
//! - [`ConfigError`] - Configuration failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod catalog;
mod error;
mod importer;
mod tag;
mod volume;

// Re-exports
pub use catalog::Catalog;
pub use error::{BoxError, ConfigError, ImportError, ModuleError};
pub use importer::{ImportFn, MessageKind, VolumeFile, import_with};
pub use tag::FormatTag;
pub use volume::{Param, ParamVolume, Volume};

/// Outcome of dispatching a file to its importer.
///
/// - `Ok(Some(catalog))`: the importer ran and succeeded
/// - `Ok(None)`: no importer exists for the file's format
/// - `Err(e)`: the importer ran and failed; `e` is its own error
pub type ImportResult = Result<Option<Catalog>, BoxError>;
