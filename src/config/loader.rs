// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ParseContext;
use crate::config::discovery::{DataDirs, InstalledDataDirs};
use crate::config::ini::IniFile;
use crate::config::model::ConfigFile;
use crate::config::validation::{ValidationList, ValidationMap, ValidationMessage};
use crate::fs::{FileSystem, RealFileSystem, absolute};

pub const LABEL_CONFIG_FILE: &str = "Configuration file";
pub const LABEL_GLOBAL_WORLDS: &str = "Global world configuration";
pub const LABEL_GLOBAL_MAPS: &str = "Global map configuration";

const GLOBAL: &str = "global";
const GLOBAL_WORLDS: &str = "worlds";
const GLOBAL_MAPS: &str = "maps";
const TYPE_WORLD: &str = "world";
const TYPE_MAP: &str = "map";

pub fn world_label(name: &str) -> String {
    format!("World section '{name}'")
}

pub fn map_label(name: &str) -> String {
    format!("Map section '{name}'")
}

impl ConfigFile {
    /// Parse the configuration file at `path` from disk, using the
    /// installed data directories as fallbacks.
    ///
    /// See [`ConfigFile::parse_with`].
    pub fn parse(&mut self, path: impl AsRef<Path>, validation: &mut ValidationMap) -> bool {
        let fs = RealFileSystem;
        let data_dirs = InstalledDataDirs::new(&fs);
        self.parse_with(path, &fs, &data_dirs, validation)
    }

    /// Parse the configuration file at `path`.
    ///
    /// `validation` receives the full report whatever the result. Returns
    /// true iff the file is usable: it could be read, both global templates
    /// and the general options are valid, and every world and map section
    /// parsed without errors.
    pub fn parse_with(
        &mut self,
        path: impl AsRef<Path>,
        fs: &dyn FileSystem,
        data_dirs: &dyn DataDirs,
        validation: &mut ValidationMap,
    ) -> bool {
        let path = path.as_ref();
        let ini = match IniFile::load(fs, path) {
            Ok(ini) => ini,
            Err(e) => {
                validation.push(LABEL_CONFIG_FILE, ValidationMessage::error(e.to_string()).into());
                return false;
            }
        };

        let config_dir = config_root_dir(fs, path);
        let ctx = ParseContext {
            config_dir: &config_dir,
            fs,
            data_dirs,
        };
        self.parse_ini(&ini, &ctx, validation)
    }

    /// Parse an already-read INI document.
    pub fn parse_ini(
        &mut self,
        ini: &IniFile,
        ctx: &ParseContext<'_>,
        validation: &mut ValidationMap,
    ) -> bool {
        let mut ok = self.parse_general(ini, ctx, validation);

        if let Some(section) = ini.section(GLOBAL, GLOBAL_WORLDS) {
            let mut msgs = ValidationList::new();
            let global_ok = self.world_global.parse(section, ctx, &mut msgs);
            if !msgs.is_empty() {
                validation.push(LABEL_GLOBAL_WORLDS, msgs);
            }
            if !global_ok {
                return false;
            }
        }

        if let Some(section) = ini.section(GLOBAL, GLOBAL_MAPS) {
            let mut msgs = ValidationList::new();
            let global_ok = self.map_global.parse(section, ctx, &mut msgs);
            if !msgs.is_empty() {
                validation.push(LABEL_GLOBAL_MAPS, msgs);
            }
            if !global_ok {
                return false;
            }
        }

        let global_worlds = format!("{GLOBAL}:{GLOBAL_WORLDS}");
        let global_maps = format!("{GLOBAL}:{GLOBAL_MAPS}");
        for section in ini.sections() {
            let name_type = section.name_type();
            if section.section_type() != TYPE_WORLD
                && section.section_type() != TYPE_MAP
                && name_type != global_worlds
                && name_type != global_maps
            {
                validation.push(
                    format!(
                        "Section '{}' with type '{}'",
                        section.name(),
                        section.section_type()
                    ),
                    ValidationMessage::warning("Unknown section type!").into(),
                );
            }
        }

        for section in ini.sections().iter().filter(|s| s.section_type() == TYPE_WORLD) {
            let name = section.name();
            let mut msgs = ValidationList::new();
            let mut world = self.world_global.clone();
            world.set_global(false);
            ok = world.parse(section, ctx, &mut msgs) && ok;

            if self.has_world(name) {
                msgs.error(format!("World name '{name}' already used!"));
                ok = false;
            } else {
                self.worlds.insert(name.to_string(), world);
                self.world_order.push(name.to_string());
            }

            debug!(world = name, valid = msgs.is_valid(), "parsed world section");
            validation.push(world_label(name), msgs);
        }

        for section in ini.sections().iter().filter(|s| s.section_type() == TYPE_MAP) {
            let name = section.name();
            let mut msgs = ValidationList::new();
            let mut map = self.map_global.clone();
            map.set_global(false);
            ok = map.parse(section, ctx, &mut msgs) && ok;

            if self.has_map(name) {
                msgs.error(format!("Map name '{name}' already used!"));
                ok = false;
            } else {
                if map.has_world() && !self.has_world(map.world()) {
                    msgs.error(format!("World '{}' does not exist!", map.world()));
                    ok = false;
                }
                self.maps.push(map);
            }

            debug!(map = name, valid = msgs.is_valid(), "parsed map section");
            validation.push(map_label(name), msgs);
        }

        info!(
            worlds = self.worlds.len(),
            maps = self.maps.len(),
            ok,
            "configuration parsed"
        );
        ok
    }

    /// Root-level options: `output_dir` and `template_dir`.
    fn parse_general(
        &mut self,
        ini: &IniFile,
        ctx: &ParseContext<'_>,
        validation: &mut ValidationMap,
    ) -> bool {
        let root = ini.root();
        let mut msgs = ValidationList::new();

        if self.output_dir.load(root, "output_dir", &mut msgs) {
            let resolved = absolute(self.output_dir.value(), ctx.config_dir);
            self.output_dir.set_value(resolved);
        }
        if !root.has("output_dir") {
            self.output_dir.require(
                &mut msgs,
                "You have to specify an output directory ('output_dir')!",
            );
        }

        if root.has("template_dir") {
            if self.template_dir.load(root, "template_dir", &mut msgs) {
                self.template_dir
                    .resolve_existing_dir(ctx, "template_dir", &mut msgs);
            }
        } else if let Some(dir) = ctx.data_dirs.template_dir() {
            self.template_dir.set_value(dir);
        } else {
            self.template_dir.require(
                &mut msgs,
                "You have to specify a template directory ('template_dir')!",
            );
        }

        let ok = msgs.is_valid();
        validation.push(LABEL_CONFIG_FILE, msgs);
        ok
    }
}

/// Directory relative paths in the config are resolved against.
///
/// - A config path with a non-empty parent (e.g. `configs/render.conf`)
///   uses that parent, made absolute against the working directory.
/// - A bare filename like `render.conf` uses the working directory.
pub fn config_root_dir(fs: &dyn FileSystem, config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => absolute(parent, &fs.current_dir()),
        _ => fs.current_dir(),
    }
}
