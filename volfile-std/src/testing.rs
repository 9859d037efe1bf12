//! Testing utilities for volfile.
//!
//! - [`RecordingSink`]: a warning sink that keeps every message
//! - [`CountingVolume`]: a volume that counts the parameters set on it
//! - [`loaded_module_path`]: locate a shared library already mapped into the process

use crate::sink::WarningSink;
use parking_lot::Mutex;
use std::{path::PathBuf, sync::Arc};
use volfile_core::{FormatTag, Param, ParamVolume, Volume};

// ============================================================================
// Recording Sink
// ============================================================================

/// A sink that records every warning it receives.
///
/// Clones share the same record, so keep one clone and hand the other to the
/// registry.
///
/// # Example
///
/// ```rust,ignore
/// let sink = RecordingSink::new();
/// let registry = Registry::builder().sink(sink.clone()).log_level(1).build();
///
/// registry.import_volume("scan.unknown", &mut volume)?;
/// assert_eq!(sink.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<(FormatTag, String)>>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the recorded `(tag, message)` pairs.
    pub fn messages(&self) -> Vec<(FormatTag, String)> {
        self.messages.lock().clone()
    }

    /// Number of recorded messages.
    pub fn count(&self) -> usize {
        self.messages.lock().len()
    }

    /// Number of recorded messages about `tag`.
    pub fn count_for(&self, tag: &str) -> usize {
        self.messages
            .lock()
            .iter()
            .filter(|(t, _)| t.as_str() == tag)
            .count()
    }

    /// Forget all recorded messages.
    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, tag: &FormatTag, message: &str) {
        self.messages.lock().push((tag.clone(), message.to_owned()));
    }
}

// ============================================================================
// Counting Volume
// ============================================================================

/// A volume that stores parameters and counts every `set` call.
#[derive(Debug, Default)]
pub struct CountingVolume {
    inner: ParamVolume,
    sets: usize,
}

impl CountingVolume {
    /// Create an empty volume.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far, including overwrites.
    pub fn sets(&self) -> usize {
        self.sets
    }

    /// The stored parameters.
    pub fn params(&self) -> &ParamVolume {
        &self.inner
    }
}

impl Volume for CountingVolume {
    fn set(&mut self, name: &str, value: Param) {
        self.sets += 1;
        self.inner.set(name, value);
    }

    fn get(&self, name: &str) -> Option<&Param> {
        self.inner.get(name)
    }
}

// ============================================================================
// Loaded modules
// ============================================================================

/// Path of a shared library mapped into this process whose file name contains
/// `fragment`, e.g. `"libc.so"`.
///
/// Useful as a real module for `ModuleResolver::load`. Returns `None` where
/// the mapping table is unavailable (outside Linux, or static binaries).
pub fn loaded_module_path(fragment: &str) -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        let maps = std::fs::read_to_string("/proc/self/maps").ok()?;
        let path = maps
            .lines()
            .filter_map(|line| line.split_whitespace().nth(5))
            .map(PathBuf::from)
            .find(|path| {
                path.is_absolute()
                    && path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| name.contains(fragment))
            });
        path
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = fragment;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_shares_messages() {
        let sink = RecordingSink::new();
        let handle = sink.clone();
        sink.warn(&FormatTag::new("a"), "first");
        sink.warn(&FormatTag::new("b"), "second");

        assert_eq!(handle.count(), 2);
        assert_eq!(handle.count_for("a"), 1);
        handle.clear();
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn counting_volume_counts_overwrites() {
        let mut volume = CountingVolume::new();
        volume.set("x", Param::Int(1));
        volume.set("x", Param::Int(2));

        assert_eq!(volume.sets(), 2);
        assert_eq!(volume.params().len(), 1);
        assert_eq!(volume.get("x"), Some(&Param::Int(2)));
    }

    #[test]
    fn unmapped_library_is_not_found() {
        assert!(loaded_module_path("libvolfile_never_mapped").is_none());
    }
}
