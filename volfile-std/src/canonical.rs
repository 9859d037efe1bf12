//! Path canonicalization collaborators.
//!
//! Canonicalization never fails: when a path cannot be resolved the input is
//! handed to the importer unchanged.

use std::path::PathBuf;

/// Turns a caller supplied file name into the path handed to importers.
pub trait PathCanonicalizer: Send + Sync {
    /// Resolve `path`, falling back to it verbatim on failure.
    fn canonicalize(&self, path: &str) -> PathBuf;
}

impl<F> PathCanonicalizer for F
where
    F: Fn(&str) -> PathBuf + Send + Sync,
{
    fn canonicalize(&self, path: &str) -> PathBuf {
        (self)(path)
    }
}

/// Resolves symlinks and relative components through the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealPath;

impl PathCanonicalizer for RealPath {
    fn canonicalize(&self, path: &str) -> PathBuf {
        std::fs::canonicalize(path).unwrap_or_else(|_| PathBuf::from(path))
    }
}

/// Passes paths through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl PathCanonicalizer for Verbatim {
    fn canonicalize(&self, path: &str) -> PathBuf {
        PathBuf::from(path)
    }
}
