//! Error types for volfile.
//!
//! - [`ImportError`] - Failures raised by importer implementations
//! - [`ModuleError`] - Failures loading or opening dynamic modules
//! - [`ConfigError`] - Invalid configuration values
//!
//! The dispatch registry itself never fails: an unknown format is a value,
//! not an error. Whatever an importer returns as `Err` reaches the caller as
//! a [`BoxError`] without being wrapped.

use std::{io, path::PathBuf};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors an importer may report while reading a volume file.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file could not be opened or read.
    #[error("cannot read '{}'", .path.display())]
    Io {
        /// The offending file.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The file header is malformed.
    #[error("invalid header in '{}': {reason}", .path.display())]
    InvalidHeader {
        /// The offending file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// The file uses a feature the importer does not handle.
    #[error("unsupported {0}")]
    Unsupported(String),

    /// A checked condition failed inside an importer.
    #[error("{origin}: {message}")]
    Condition {
        /// Description of the importer that raised the condition.
        origin: String,
        /// The condition message.
        message: String,
    },

    /// A custom importer error.
    #[error(transparent)]
    Custom(BoxError),
}

impl ImportError {
    /// Wrap an I/O error together with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ImportError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<BoxError> for ImportError {
    fn from(err: BoxError) -> Self {
        ImportError::Custom(err)
    }
}

/// Errors that can occur while loading dynamic modules.
#[derive(Error, Debug)]
pub enum ModuleError {
    /// No file exists at the given path.
    #[error("module not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The platform loader rejected the module.
    #[error("failed to load module '{}'", .path.display())]
    Load {
        /// The module path.
        path: PathBuf,
        /// The loader error.
        #[source]
        source: BoxError,
    },

    /// The symbol table of the running program could not be opened.
    #[error("failed to open the host program's symbols")]
    Host(#[source] BoxError),
}

/// Errors in configuration values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A log level was not an unsigned integer.
    #[error("invalid value {value:?} for {var}: expected an unsigned integer")]
    InvalidLogLevel {
        /// Where the value came from.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}
