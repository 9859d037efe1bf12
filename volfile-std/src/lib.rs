//! # volfile-std
//!
//! Standard implementations for the volfile volume import dispatch framework.
//!
//! This crate provides:
//! - **Dispatch**: [`Registry`], [`RegistryBuilder`] and the process-wide [`global`] registry
//! - **Resolution**: [`InventoryResolver`], [`ModuleResolver`], [`TableResolver`], [`ChainResolver`]
//! - **Registration**: [`EntryPoint`], [`register_volume_file!`], [`register_importer!`]
//! - **Collaborators**: path canonicalizers and warning sinks
//! - **Testing**: [`testing::RecordingSink`], [`testing::CountingVolume`], [`testing::loaded_module_path`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use volfile_core;

// Modules
pub mod canonical;
pub mod config;
pub mod entry;
pub mod registry;
pub mod resolve;
pub mod sink;
pub mod testing;

pub use canonical::{PathCanonicalizer, RealPath, Verbatim};
pub use config::{DispatchConfig, LOG_LEVEL_VAR};
pub use entry::{ENTRY_POINT_PREFIX, EntryPoint};
pub use registry::{CacheState, Registry, RegistryBuilder, global, import_volume, load_module};
pub use resolve::{
    ChainResolver, EntryPointResolver, InventoryResolver, ModuleResolver, TableResolver,
};
#[cfg(feature = "linkme")]
pub use resolve::{ENTRY_POINTS, LinkmeResolver};
#[cfg(feature = "phf")]
pub use resolve::PhfResolver;
pub use sink::{NullSink, TracingSink, WarningSink};

pub use inventory;
#[cfg(feature = "linkme")]
pub use linkme;
#[cfg(feature = "phf")]
pub use phf;
