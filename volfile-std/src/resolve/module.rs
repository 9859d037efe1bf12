//! Resolution over symbols exported by loaded dynamic modules.
//!
//! Modules export importers as unmangled functions named after the
//! registration convention, e.g. `volfile_import_raw`. The
//! `#[volume_file("raw", export)]` attribute generates such a symbol.
//!
//! Entry points use the Rust ABI, so modules must be built with the same
//! compiler as the host. Names outside the `volfile_import_` namespace are
//! never looked up, so other symbols of the host or a module (libc's `abort`,
//! say) cannot be reached as importers.

use super::EntryPointResolver;
use crate::entry::ENTRY_POINT_PREFIX;
use libloading::Library;
use parking_lot::RwLock;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use volfile_core::{ImportFn, ModuleError};

struct LoadedModule {
    /// `None` for the host program itself.
    path: Option<PathBuf>,
    library: Library,
}

/// Searches the exported symbols of every module loaded so far.
///
/// Modules are never unloaded while the resolver lives, so resolved entry
/// points stay valid for as long as the owning registry does. Clones share the
/// same module list.
#[derive(Clone, Default)]
pub struct ModuleResolver {
    modules: Arc<RwLock<Vec<LoadedModule>>>,
}

impl ModuleResolver {
    /// Create a resolver that searches no modules yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a resolver that searches the running program.
    pub fn with_host() -> Result<Self, ModuleError> {
        let resolver = Self::empty();
        resolver.modules.write().push(LoadedModule {
            path: None,
            library: host_library()?,
        });
        Ok(resolver)
    }

    /// Load a dynamic module and add it to the searched set.
    ///
    /// # Safety
    ///
    /// Loading runs the module's initializers, and every symbol it exports
    /// under an entry point name must have the [`ImportFn`] signature.
    pub unsafe fn load(&self, path: impl AsRef<Path>) -> Result<(), ModuleError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ModuleError::NotFound(path.to_path_buf()));
        }

        let library = unsafe { Library::new(path) }.map_err(|e| ModuleError::Load {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        tracing::debug!(target: "volfile", module = %path.display(), "loaded module");
        self.modules.write().push(LoadedModule {
            path: Some(path.to_path_buf()),
            library,
        });
        Ok(())
    }

    /// Paths of the loaded modules, in load order. The host program is omitted.
    pub fn module_paths(&self) -> Vec<PathBuf> {
        self.modules
            .read()
            .iter()
            .filter_map(|module| module.path.clone())
            .collect()
    }

    /// Number of searched modules, including the host program.
    pub fn len(&self) -> usize {
        self.modules.read().len()
    }

    /// Whether no module is searched.
    pub fn is_empty(&self) -> bool {
        self.modules.read().is_empty()
    }

    /// Whether any searched module exports `name`, whatever its type.
    fn exports(&self, name: &str) -> bool {
        self.modules.read().iter().any(|module| {
            // SAFETY: the symbol is only checked for presence, never called.
            unsafe { module.library.get::<*const ()>(name.as_bytes()) }.is_ok()
        })
    }
}

impl EntryPointResolver for ModuleResolver {
    fn find_entry_point(&self, name: &str) -> Option<ImportFn> {
        if !name.starts_with(ENTRY_POINT_PREFIX) {
            return None;
        }

        let modules = self.modules.read();
        modules.iter().find_map(|module| {
            // SAFETY: names under `ENTRY_POINT_PREFIX` are reserved for
            // `ImportFn` symbols. The host follows this through the
            // registration macros; loaded modules through `load`'s contract.
            let symbol = unsafe { module.library.get::<ImportFn>(name.as_bytes()) };
            symbol.ok().map(|symbol| *symbol)
        })
    }
}

#[cfg(unix)]
fn host_library() -> Result<Library, ModuleError> {
    Ok(libloading::os::unix::Library::this().into())
}

#[cfg(windows)]
fn host_library() -> Result<Library, ModuleError> {
    libloading::os::windows::Library::this()
        .map(Into::into)
        .map_err(|e| ModuleError::Host(Box::new(e)))
}

#[cfg(not(any(unix, windows)))]
fn host_library() -> Result<Library, ModuleError> {
    Err(ModuleError::Host(
        "dynamic modules are not supported on this platform".into(),
    ))
}
