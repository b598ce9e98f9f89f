// src/config/map.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::ParseContext;
use crate::config::field::Field;
use crate::config::ini::IniSection;
use crate::config::validation::ValidationList;
use crate::types::{Rendermode, Rotation};

pub const DEFAULT_ROTATIONS: &str = "top-left";
pub const DEFAULT_TEXTURE_SIZE: i32 = 12;
pub const MIN_TEXTURE_SIZE: i32 = 1;
pub const MAX_TEXTURE_SIZE: i32 = 32;

/// A `[<name>:map]` section, or the `[global:maps]` template.
///
/// ```ini
/// [overview:map]
/// name = World overview
/// world = myworld
/// rotations = top-left bottom-right
/// texture_size = 16
/// ```
///
/// The section name is the map's short name (used in output paths and on
/// the command line); `name` is the long, human-readable one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSection {
    global: bool,

    short_name: String,
    long_name: String,
    /// Whether `long_name` came from a `name` key.
    has_long_name: bool,

    world: Field<String>,
    texture_dir: Field<PathBuf>,

    rotations: Field<String>,
    rotations_set: BTreeSet<Rotation>,

    rendermode: Field<Rendermode>,
    texture_size: Field<i32>,

    render_unknown_blocks: Field<bool>,
    render_leaves_transparent: Field<bool>,
    render_biomes: Field<bool>,
    use_image_timestamps: Field<bool>,
}

impl MapSection {
    pub fn new(global: bool) -> Self {
        Self {
            global,
            ..Self::default()
        }
    }

    pub fn is_global(&self) -> bool {
        self.global
    }

    pub fn set_global(&mut self, global: bool) {
        self.global = global;
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Name of the world this map renders.
    pub fn world(&self) -> &str {
        self.world.value()
    }

    pub fn texture_dir(&self) -> &Path {
        self.texture_dir.value()
    }

    pub fn rotations(&self) -> &BTreeSet<Rotation> {
        &self.rotations_set
    }

    pub fn rendermode(&self) -> Rendermode {
        *self.rendermode.value()
    }

    pub fn texture_size(&self) -> i32 {
        *self.texture_size.value()
    }

    pub fn render_unknown_blocks(&self) -> bool {
        *self.render_unknown_blocks.value()
    }

    pub fn render_leaves_transparent(&self) -> bool {
        *self.render_leaves_transparent.value()
    }

    pub fn render_biomes(&self) -> bool {
        *self.render_biomes.value()
    }

    pub fn use_image_timestamps(&self) -> bool {
        *self.use_image_timestamps.value()
    }

    pub(crate) fn has_world(&self) -> bool {
        self.world.is_loaded()
    }

    pub(crate) fn has_long_name(&self) -> bool {
        self.has_long_name
    }

    pub(crate) fn has_texture_dir(&self) -> bool {
        self.texture_dir.is_loaded()
    }

    /// True once [`MapSection::parse`] ran; `rotations` always ends up
    /// loaded, from the section or from its default.
    pub(crate) fn is_parsed(&self) -> bool {
        self.rotations.is_loaded()
    }

    /// Parse `section` on top of the current values.
    ///
    /// Returns true iff no error was added to `validation`.
    pub fn parse(
        &mut self,
        section: &IniSection,
        ctx: &ParseContext<'_>,
        validation: &mut ValidationList,
    ) -> bool {
        self.short_name = section.name().to_string();
        self.has_long_name = section.has("name");
        self.long_name = section
            .get("name")
            .map(str::to_string)
            .unwrap_or_else(|| self.short_name.clone());

        self.world.load(section, "world", validation);

        if section.has("texture_dir") {
            if self.texture_dir.load(section, "texture_dir", validation) {
                self.texture_dir
                    .resolve_existing_dir(ctx, "texture_dir", validation);
            }
        } else if !self.texture_dir.is_loaded() {
            if let Some(dir) = ctx.data_dirs.texture_dir() {
                self.texture_dir.set_value(dir);
            } else if !self.global {
                self.texture_dir.require(
                    validation,
                    "You have to specify a texture directory ('texture_dir')!",
                );
            }
        }

        if self
            .rotations
            .load_or(section, "rotations", DEFAULT_ROTATIONS.to_string(), validation)
        {
            self.rotations_set = parse_rotations(self.rotations.value(), validation);
        }

        self.rendermode
            .load_or(section, "rendermode", Rendermode::Normal, validation);

        if self
            .texture_size
            .load_or(section, "texture_size", DEFAULT_TEXTURE_SIZE, validation)
        {
            let size = self.texture_size();
            if !(MIN_TEXTURE_SIZE..=MAX_TEXTURE_SIZE).contains(&size) {
                validation.error(format!(
                    "'texture_size' must be a number between {MIN_TEXTURE_SIZE} and {MAX_TEXTURE_SIZE}! (got {size})"
                ));
            }
        }

        self.render_unknown_blocks
            .load_or(section, "render_unknown_blocks", false, validation);
        self.render_leaves_transparent
            .load_or(section, "render_leaves_transparent", true, validation);
        self.render_biomes
            .load_or(section, "render_biomes", true, validation);
        self.use_image_timestamps
            .load_or(section, "use_image_timestamps", true, validation);

        if !self.global {
            self.world
                .require(validation, "You have to specify a world ('world')!");
        }

        validation.is_valid()
    }
}

/// Split a whitespace-separated rotation list into a set.
///
/// Each unknown name adds one error; the remaining names are still used.
pub fn parse_rotations(value: &str, validation: &mut ValidationList) -> BTreeSet<Rotation> {
    let mut set = BTreeSet::new();
    for token in value.split_whitespace() {
        match Rotation::from_name(token) {
            Some(rotation) => {
                set.insert(rotation);
            }
            None => validation.error(format!("Invalid rotation '{token}'!")),
        }
    }
    set
}

/// Inverse of [`parse_rotations`].
pub fn rotations_to_string(rotations: &BTreeSet<Rotation>) -> String {
    rotations
        .iter()
        .map(|r| r.name())
        .collect::<Vec<_>>()
        .join(" ")
}
