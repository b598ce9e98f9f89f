// src/config/dump.rs

//! Textual renderings of a parsed [`ConfigFile`].
//!
//! - [`ConfigFile::dump`]: human-readable overview of every resolved value.
//! - [`ConfigFile::to_ini`]: the same values as a configuration file that
//!   parses back to an identical configuration.

use std::fmt::{self, Write};

use crate::config::map::{MapSection, rotations_to_string};
use crate::config::model::ConfigFile;
use crate::config::world::WorldSection;

fn dump_world_section(out: &mut impl Write, section: &WorldSection) -> fmt::Result {
    writeln!(out, "  input_dir = {}", section.input_dir().display())
}

fn dump_map_section(out: &mut impl Write, section: &MapSection) -> fmt::Result {
    writeln!(out, "  name = {}", section.long_name())?;
    writeln!(out, "  world = {}", section.world())?;
    writeln!(out, "  texture_dir = {}", section.texture_dir().display())?;
    writeln!(out, "  rotations = {}", rotations_to_string(section.rotations()))?;
    writeln!(out, "  rendermode = {}", section.rendermode())?;
    writeln!(out, "  texture_size = {}", section.texture_size())?;
    writeln!(out, "  render_unknown_blocks = {}", section.render_unknown_blocks())?;
    writeln!(
        out,
        "  render_leaves_transparent = {}",
        section.render_leaves_transparent()
    )?;
    writeln!(out, "  render_biomes = {}", section.render_biomes())?;
    writeln!(out, "  use_image_timestamps = {}", section.use_image_timestamps())
}

/// Map keys with a value once the section has been parsed.
fn write_map_keys(out: &mut impl Write, section: &MapSection) -> fmt::Result {
    if !section.is_global() || section.has_long_name() {
        writeln!(out, "name = {}", section.long_name())?;
    }
    if section.has_world() {
        writeln!(out, "world = {}", section.world())?;
    }
    if section.has_texture_dir() {
        writeln!(out, "texture_dir = {}", section.texture_dir().display())?;
    }
    writeln!(out, "rotations = {}", rotations_to_string(section.rotations()))?;
    writeln!(out, "rendermode = {}", section.rendermode())?;
    writeln!(out, "texture_size = {}", section.texture_size())?;
    writeln!(out, "render_unknown_blocks = {}", section.render_unknown_blocks())?;
    writeln!(
        out,
        "render_leaves_transparent = {}",
        section.render_leaves_transparent()
    )?;
    writeln!(out, "render_biomes = {}", section.render_biomes())?;
    writeln!(out, "use_image_timestamps = {}", section.use_image_timestamps())
}

impl ConfigFile {
    pub fn dump(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_dump(&mut out);
        out
    }

    pub fn write_dump(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "General:")?;
        writeln!(out, "  output_dir = {}", self.output_dir().display())?;
        writeln!(out, "  template_dir = {}", self.template_dir().display())?;
        writeln!(out)?;

        writeln!(out, "Global world configuration:")?;
        dump_world_section(out, self.world_global())?;
        writeln!(out)?;

        writeln!(out, "Global map configuration:")?;
        dump_map_section(out, self.map_global())?;
        writeln!(out)?;

        for (name, world) in self.worlds() {
            writeln!(out, "World '{name}':")?;
            dump_world_section(out, world)?;
            writeln!(out)?;
        }

        for map in self.maps() {
            writeln!(out, "Map '{}':", map.short_name())?;
            dump_map_section(out, map)?;
            writeln!(out)?;
        }

        Ok(())
    }

    /// Render the resolved configuration as an INI file.
    ///
    /// All paths are absolute, so the result can be written anywhere.
    pub fn to_ini(&self) -> String {
        let mut out = String::new();
        let _ = self.write_ini(&mut out);
        out
    }

    fn write_ini(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "output_dir = {}", self.output_dir().display())?;
        writeln!(out, "template_dir = {}", self.template_dir().display())?;

        if self.world_global().has_input_dir() {
            writeln!(out)?;
            writeln!(out, "[global:worlds]")?;
            writeln!(out, "input_dir = {}", self.world_global().input_dir().display())?;
        }

        if self.map_global().is_parsed() {
            writeln!(out)?;
            writeln!(out, "[global:maps]")?;
            write_map_keys(out, self.map_global())?;
        }

        for (name, world) in self.worlds() {
            writeln!(out)?;
            writeln!(out, "[{name}:world]")?;
            writeln!(out, "input_dir = {}", world.input_dir().display())?;
        }

        for map in self.maps() {
            writeln!(out)?;
            writeln!(out, "[{}:map]", map.short_name())?;
            write_map_keys(out, map)?;
        }

        Ok(())
    }
}
