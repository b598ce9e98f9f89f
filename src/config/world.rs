// src/config/world.rs

use std::path::{Path, PathBuf};

use crate::config::ParseContext;
use crate::config::field::Field;
use crate::config::ini::IniSection;
use crate::config::validation::ValidationList;

/// A `[<name>:world]` section, or the `[global:worlds]` template.
///
/// ```ini
/// [myworld:world]
/// input_dir = worlds/myworld
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldSection {
    global: bool,
    input_dir: Field<PathBuf>,
}

impl WorldSection {
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

    pub(crate) fn has_input_dir(&self) -> bool {
        self.input_dir.is_loaded()
    }

    /// Absolute path of the world's input directory.
    pub fn input_dir(&self) -> &Path {
        self.input_dir.value()
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
        if self.input_dir.load(section, "input_dir", validation) {
            self.input_dir
                .resolve_existing_dir(ctx, "input_dir", validation);
        }

        // A present but invalid value was already reported by `load`.
        if !self.global && !section.has("input_dir") {
            self.input_dir.require(
                validation,
                "You have to specify an input directory ('input_dir')!",
            );
        }

        validation.is_valid()
    }
}
