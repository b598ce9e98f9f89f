// src/config/mod.rs

//! Configuration loading and validation for mapcraft.
//!
//! Responsibilities:
//! - Read the INI-style file into raw sections (`ini.rs`).
//! - Turn raw sections into typed, validated schemas (`world.rs`, `map.rs`,
//!   `overlay.rs`), built on [`Field`] (`field.rs`).
//! - Orchestrate a whole file, including global templates, inheritance and
//!   name uniqueness (`loader.rs`, `model.rs`).
//! - Collect diagnostics instead of failing fast (`validation.rs`).

use std::path::Path;

use crate::fs::FileSystem;

pub mod discovery;
pub mod dump;
pub mod field;
pub mod ini;
pub mod loader;
pub mod map;
pub mod model;
pub mod overlay;
pub mod validation;
pub mod world;

pub use discovery::{DataDirs, FixedDataDirs, InstalledDataDirs};
pub use field::{Field, FieldValue};
pub use ini::{IniFile, IniSection};
pub use loader::{LABEL_CONFIG_FILE, LABEL_GLOBAL_MAPS, LABEL_GLOBAL_WORLDS, map_label, world_label};
pub use map::MapSection;
pub use model::ConfigFile;
pub use overlay::{OverlaySection, OverlaySettings};
pub use validation::{Severity, ValidationList, ValidationMap, ValidationMessage};
pub use world::WorldSection;

/// Everything a section needs besides its raw entries.
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
    /// Relative paths are resolved against this directory.
    pub config_dir: &'a Path,
    pub fs: &'a dyn FileSystem,
    pub data_dirs: &'a dyn DataDirs,
}
