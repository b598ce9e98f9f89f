// src/config/model.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::field::Field;
use crate::config::map::MapSection;
use crate::config::world::WorldSection;

/// A fully parsed configuration file.
///
/// ```ini
/// output_dir = output
///
/// [global:maps]
/// texture_size = 16
///
/// [myworld:world]
/// input_dir = worlds/myworld
///
/// [overview:map]
/// world = myworld
/// ```
///
/// Built once by [`ConfigFile::parse`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub(crate) output_dir: Field<PathBuf>,
    pub(crate) template_dir: Field<PathBuf>,

    /// Template copied into every `world` section before it is parsed.
    pub(crate) world_global: WorldSection,
    /// Template copied into every `map` section before it is parsed.
    pub(crate) map_global: MapSection,

    /// Worlds keyed by section name.
    pub(crate) worlds: BTreeMap<String, WorldSection>,
    /// World names in declaration order.
    pub(crate) world_order: Vec<String>,

    /// Maps in declaration order; short names are unique.
    pub(crate) maps: Vec<MapSection>,
}

impl ConfigFile {
    pub fn new() -> Self {
        Self {
            output_dir: Field::new(),
            template_dir: Field::new(),
            world_global: WorldSection::new(true),
            map_global: MapSection::new(true),
            worlds: BTreeMap::new(),
            world_order: Vec::new(),
            maps: Vec::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir.value()
    }

    pub fn template_dir(&self) -> &Path {
        self.template_dir.value()
    }

    pub fn world_global(&self) -> &WorldSection {
        &self.world_global
    }

    pub fn map_global(&self) -> &MapSection {
        &self.map_global
    }

    pub fn has_world(&self, name: &str) -> bool {
        self.worlds.contains_key(name)
    }

    pub fn world(&self, name: &str) -> Option<&WorldSection> {
        self.worlds.get(name)
    }

    /// Worlds in declaration order.
    pub fn worlds(&self) -> impl Iterator<Item = (&str, &WorldSection)> {
        self.world_order
            .iter()
            .filter_map(|name| self.worlds.get(name).map(|w| (name.as_str(), w)))
    }

    pub fn has_map(&self, short_name: &str) -> bool {
        self.map(short_name).is_some()
    }

    pub fn map(&self, short_name: &str) -> Option<&MapSection> {
        self.maps.iter().find(|m| m.short_name() == short_name)
    }

    pub fn maps(&self) -> &[MapSection] {
        &self.maps
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new()
    }
}
