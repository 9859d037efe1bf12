//! Registration through attributes and declarative macros, dispatched by the
//! process-wide registry.

use std::path::{Path, PathBuf};
use volfile::{
    BoxError, CacheState, Catalog, EntryPoint, ImportError, Param, ParamVolume, Volume,
    VolumeFile,
    resolve::{EntryPointResolver, InventoryResolver},
};

mod common;
use common::{calls_to, record};

// ============================================================================
// Registered importers
// ============================================================================

#[volfile::volume_file("brick")]
struct BrickFile {
    path: PathBuf,
}

impl From<&Path> for BrickFile {
    fn from(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl VolumeFile for BrickFile {
    fn import_volume(&mut self, volume: &mut dyn Volume) -> Result<Catalog, BoxError> {
        record("brick", &self.path);
        let name = self.path.display().to_string();
        self.fail_on(name.contains("corrupt"), "corrupt brick")?;
        volume.set("dimensions", Param::Vec3i([16, 16, 16]));
        Ok(Catalog::new("brick").with("dimensions", [16, 16, 16]))
    }

    fn describe(&self) -> &str {
        "volfile::BrickFile"
    }
}

#[volfile::importer("grid")]
fn import_grid(path: &Path, volume: &mut dyn Volume) -> Result<Catalog, BoxError> {
    record("grid", path);
    volume.set("spacing", Param::Vec3f([1.0, 1.0, 0.5]));
    Ok(Catalog::new("grid"))
}

#[volfile::importer("shared_grid", export)]
fn import_shared_grid(path: &Path, volume: &mut dyn Volume) -> Result<Catalog, BoxError> {
    record("shared_grid", path);
    volume.set("exported", Param::Int(1));
    Ok(Catalog::new("shared_grid"))
}

struct PlainFile;

impl From<&Path> for PlainFile {
    fn from(_: &Path) -> Self {
        PlainFile
    }
}

impl VolumeFile for PlainFile {
    fn import_volume(&mut self, _volume: &mut dyn Volume) -> Result<Catalog, BoxError> {
        Ok(Catalog::new("plain"))
    }
}

volfile::register_volume_file!(PlainFile, plain);

fn import_legacy(path: &Path, _volume: &mut dyn Volume) -> Result<Catalog, BoxError> {
    record("legacy", path);
    Ok(Catalog::new("legacy"))
}

volfile::register_importer!(legacy, import_legacy);

// ============================================================================
// Tests
// ============================================================================

#[test]
fn attribute_registered_type_is_dispatched_globally() {
    let before = calls_to("brick");
    let mut volume = ParamVolume::new();

    let catalog = volfile::import_volume("tile.brick", &mut volume)
        .unwrap()
        .unwrap();

    assert_eq!(catalog.name(), "brick");
    assert_eq!(volume.get("dimensions"), Some(&Param::Vec3i([16, 16, 16])));
    assert!(calls_to("brick") > before);
    assert_eq!(volfile::global().state("brick"), CacheState::Resolved);
}

#[test]
fn fail_on_surfaces_as_condition_error() {
    let err = volfile::import_volume("corrupt.brick", &mut ParamVolume::new()).unwrap_err();
    let err = err.downcast::<ImportError>().unwrap();
    assert!(matches!(
        *err,
        ImportError::Condition { ref origin, ref message }
            if origin == "volfile::BrickFile" && message == "corrupt brick"
    ));
}

#[test]
fn attribute_registered_function_is_dispatched_globally() {
    let mut volume = ParamVolume::new();
    let catalog = volfile::import_volume("ct.grid", &mut volume).unwrap();

    assert_eq!(catalog.unwrap().name(), "grid");
    assert_eq!(volume.get("spacing"), Some(&Param::Vec3f([1.0, 1.0, 0.5])));
}

#[test]
fn declarative_macros_register_entry_points() {
    let plain = volfile::import_volume("a.plain", &mut ParamVolume::new()).unwrap();
    assert_eq!(plain.unwrap().name(), "plain");

    let legacy = volfile::import_volume("b.legacy", &mut ParamVolume::new()).unwrap();
    assert_eq!(legacy.unwrap().name(), "legacy");
    assert!(calls_to("legacy") >= 1);
}

#[test]
fn exported_symbol_forwards_to_function() {
    let mut volume = ParamVolume::new();
    let catalog = volfile_import_shared_grid(Path::new("x.shared_grid"), &mut volume).unwrap();

    assert_eq!(catalog.name(), "shared_grid");
    assert_eq!(volume.get("exported"), Some(&Param::Int(1)));
}

#[test]
fn inventory_resolver_sees_every_registration() {
    for name in [
        "volfile_import_brick",
        "volfile_import_grid",
        "volfile_import_shared_grid",
        "volfile_import_plain",
        "volfile_import_legacy",
    ] {
        assert!(
            InventoryResolver.find_entry_point(name).is_some(),
            "{name} should be collected"
        );
    }
    assert!(InventoryResolver.find_entry_point("volfile_import_Brick").is_none());
}

#[test]
fn global_registry_returns_none_for_unknown_format() {
    let result = volfile::import_volume("mystery.registration_none", &mut ParamVolume::new());
    assert!(result.unwrap().is_none());
    assert_eq!(
        volfile::global().state("registration_none"),
        CacheState::Unresolved
    );
}

#[test]
fn entry_point_is_plain_data() {
    let entry = EntryPoint::new("volfile_import_manual", import_legacy);
    let copy = entry;
    assert_eq!(copy.name, entry.name);
    assert_eq!(volfile::ENTRY_POINT_PREFIX, "volfile_import_");
}

#[test]
fn loading_missing_module_is_an_error() {
    let err = unsafe { volfile::load_module("/nonexistent/libvolfile_formats.so") }.unwrap_err();
    assert!(matches!(err, volfile::ModuleError::NotFound(_)));
}

#[test]
fn late_module_joins_search_but_failed_tags_stay_unresolved() {
    let Some(libc) = volfile::testing::loaded_module_path("libc.so") else {
        return;
    };

    let mut volume = ParamVolume::new();
    let before = volfile::import_volume("scan.late_module_tag", &mut volume).unwrap();
    assert!(before.is_none());
    assert_eq!(
        volfile::global().state("late_module_tag"),
        CacheState::Unresolved
    );

    unsafe { volfile::load_module(&libc) }.unwrap();

    let after = volfile::import_volume("scan.late_module_tag", &mut volume).unwrap();
    assert!(after.is_none());
    assert_eq!(
        volfile::global().state("late_module_tag"),
        CacheState::Unresolved
    );
}
