#![allow(dead_code)]

use lazy_static::lazy_static;
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};
use volfile::{
    BoxError, Catalog, ImportError, Param, Registry, Volume,
    canonical::Verbatim,
    resolve::TableResolver,
    testing::RecordingSink,
};

// ============================================================================
// Invocation log
// ============================================================================

lazy_static! {
    /// Every importer call: (importer label, path received).
    pub static ref CALLS: Mutex<Vec<(&'static str, PathBuf)>> = Mutex::new(Vec::new());
}

pub fn record(label: &'static str, path: &Path) {
    CALLS.lock().unwrap().push((label, path.to_path_buf()));
}

/// Number of calls recorded for `label`.
pub fn calls_to(label: &'static str) -> usize {
    CALLS
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, _)| *l == label)
        .count()
}

/// Paths received by `label`, in call order.
pub fn paths_for(label: &'static str) -> Vec<PathBuf> {
    CALLS
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, _)| *l == label)
        .map(|(_, p)| p.clone())
        .collect()
}

// ============================================================================
// Test Importers
// ============================================================================

pub fn import_raw(path: &Path, volume: &mut dyn Volume) -> Result<Catalog, BoxError> {
    record("raw", path);
    volume.set("dimensions", Param::Vec3i([2, 2, 2]));
    volume.set("voxelType", Param::Text("uchar".into()));
    Ok(Catalog::new("raw")
        .with("dimensions", [2, 2, 2])
        .with("filename", path.display().to_string()))
}

pub fn import_upper_vol(path: &Path, _volume: &mut dyn Volume) -> Result<Catalog, BoxError> {
    record("VOL", path);
    Ok(Catalog::new("VOL"))
}

pub fn import_late(path: &Path, _volume: &mut dyn Volume) -> Result<Catalog, BoxError> {
    record("late", path);
    Ok(Catalog::new("late"))
}

pub fn import_broken(path: &Path, _volume: &mut dyn Volume) -> Result<Catalog, BoxError> {
    record("broken", path);
    Err(Box::new(ImportError::InvalidHeader {
        path: path.to_path_buf(),
        reason: "missing magic".into(),
    }))
}

// ============================================================================
// Fixtures
// ============================================================================

/// A registry over a fresh table, recording warnings, with warnings enabled.
pub fn verbose_registry() -> (Registry, TableResolver, RecordingSink) {
    let table = TableResolver::new();
    let sink = RecordingSink::new();
    let registry = Registry::builder()
        .resolver(table.clone())
        .canonicalizer(Verbatim)
        .sink(sink.clone())
        .log_level(1)
        .build();
    (registry, table, sink)
}
