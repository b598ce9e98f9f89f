// src/config/overlay.rs

//! Overlay sections: extra layers rendered on top of a base map.
//!
//! Every overlay shares `name`, `base` and `type`; the kind-specific keys
//! live in [`OverlaySettings`]. Parsing runs in three phases:
//!
//! 1. [`OverlaySection::pre_parse`] seeds defaults,
//! 2. [`OverlaySection::parse_field`] is called once per raw entry and
//!    reports whether it knew the key,
//! 3. [`OverlaySection::post_parse`] checks cross-field constraints.
//!
//! [`OverlaySection::parse`] drives the three phases over a whole section.

use std::fmt::{self, Write};
use std::str::FromStr;

use tracing::debug;

use crate::config::field::Field;
use crate::config::ini::IniSection;
use crate::config::validation::ValidationList;
use crate::types::OverlayKind;

pub const DEFAULT_LIGHTING_INTENSITY: f64 = 1.0;
pub const DEFAULT_LIGHTING_WATER_INTENSITY: f64 = 0.85;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightingSettings {
    day: Field<bool>,
    intensity: Field<f64>,
    water_intensity: Field<f64>,
}

impl LightingSettings {
    pub fn is_day(&self) -> bool {
        *self.day.value()
    }

    pub fn intensity(&self) -> f64 {
        *self.intensity.value()
    }

    pub fn water_intensity(&self) -> f64 {
        *self.water_intensity.value()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnSettings {
    day: Field<bool>,
}

impl SpawnSettings {
    pub fn is_day(&self) -> bool {
        *self.day.value()
    }
}

/// Kind-specific part of an overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlaySettings {
    Dummy,
    Height,
    Lighting(LightingSettings),
    Slime,
    Spawn(SpawnSettings),
}

impl OverlaySettings {
    fn for_kind(kind: OverlayKind) -> Self {
        match kind {
            OverlayKind::Dummy => OverlaySettings::Dummy,
            OverlayKind::Height => OverlaySettings::Height,
            OverlayKind::Lighting => OverlaySettings::Lighting(LightingSettings::default()),
            OverlayKind::Slime => OverlaySettings::Slime,
            OverlayKind::Spawn => OverlaySettings::Spawn(SpawnSettings::default()),
        }
    }

    pub fn kind(&self) -> OverlayKind {
        match self {
            OverlaySettings::Dummy => OverlayKind::Dummy,
            OverlaySettings::Height => OverlayKind::Height,
            OverlaySettings::Lighting(_) => OverlayKind::Lighting,
            OverlaySettings::Slime => OverlayKind::Slime,
            OverlaySettings::Spawn(_) => OverlayKind::Spawn,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySection {
    id: String,
    name: Field<String>,
    base: Field<bool>,
    settings: OverlaySettings,
}

impl OverlaySection {
    pub fn new(kind: OverlayKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Field::new(),
            base: Field::new(),
            settings: OverlaySettings::for_kind(kind),
        }
    }

    /// Pick the overlay kind from the section's `type` key (default
    /// `dummy`).
    ///
    /// Returns `None` and records an error for an unknown type.
    pub fn from_section(section: &IniSection, validation: &mut ValidationList) -> Option<Self> {
        let kind = match section.get("type") {
            None => OverlayKind::Dummy,
            Some(raw) => match OverlayKind::from_str(raw) {
                Ok(kind) => kind,
                Err(e) => {
                    validation.error(format!("Invalid value for 'type': {e}!"));
                    return None;
                }
            },
        };
        Some(Self::new(kind, section.name()))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.name.value()
    }

    pub fn kind(&self) -> OverlayKind {
        self.settings.kind()
    }

    pub fn is_base(&self) -> bool {
        *self.base.value()
    }

    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    /// Seed defaults before any entry is read.
    pub fn pre_parse(&mut self, _section: &IniSection, _validation: &mut ValidationList) {
        match &mut self.settings {
            OverlaySettings::Lighting(lighting) => {
                lighting.day.set_default(true);
                lighting.intensity.set_default(DEFAULT_LIGHTING_INTENSITY);
                lighting
                    .water_intensity
                    .set_default(DEFAULT_LIGHTING_WATER_INTENSITY);
            }
            OverlaySettings::Spawn(spawn) => spawn.day.set_default(true),
            OverlaySettings::Dummy | OverlaySettings::Height | OverlaySettings::Slime => {}
        }
    }

    /// Handle one raw entry. Returns false if the key is not an overlay key.
    pub fn parse_field(&mut self, key: &str, value: &str, validation: &mut ValidationList) -> bool {
        match key {
            // Consumed by `from_section`.
            "type" => return true,
            "name" => {
                self.name.load_value(key, value, validation);
                return true;
            }
            "base" => {
                self.base.load_value(key, value, validation);
                return true;
            }
            _ => {}
        }

        match (&mut self.settings, key) {
            (OverlaySettings::Lighting(lighting), "day") => {
                lighting.day.load_value(key, value, validation);
            }
            (OverlaySettings::Lighting(lighting), "lighting_intensity") => {
                lighting.intensity.load_value(key, value, validation);
            }
            (OverlaySettings::Lighting(lighting), "lighting_water_intensity") => {
                lighting.water_intensity.load_value(key, value, validation);
            }
            (OverlaySettings::Spawn(spawn), "day") => {
                spawn.day.load_value(key, value, validation);
            }
            _ => return false,
        }
        true
    }

    /// Fill remaining defaults and check value ranges.
    pub fn post_parse(&mut self, _section: &IniSection, validation: &mut ValidationList) {
        self.name.set_default(self.id.clone());
        self.base.set_default(false);

        if let OverlaySettings::Lighting(lighting) = &self.settings {
            for (key, value) in [
                ("lighting_intensity", lighting.intensity()),
                ("lighting_water_intensity", lighting.water_intensity()),
            ] {
                if !(0.0..=1.0).contains(&value) {
                    validation.error(format!("'{key}' must be a number between 0 and 1!"));
                }
            }
        }
    }

    /// Run all three phases over `section`.
    ///
    /// Unknown keys become warnings. Returns true iff no error was added.
    pub fn parse(&mut self, section: &IniSection, validation: &mut ValidationList) -> bool {
        self.pre_parse(section, validation);
        for (key, value) in section.entries() {
            if !self.parse_field(key, value, validation) {
                validation.warning(format!("Unknown configuration option '{key}'!"));
            }
        }
        self.post_parse(section, validation);

        debug!(overlay = %self.id, kind = %self.kind(), valid = validation.is_valid(), "parsed overlay section");
        validation.is_valid()
    }

    pub fn dump(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "{} overlay '{}':", self.kind().pretty_name(), self.id)?;
        writeln!(out, "  type = {}", self.kind())?;
        writeln!(out, "  name = {}", self.name())?;
        writeln!(out, "  base = {}", self.is_base())?;
        match &self.settings {
            OverlaySettings::Lighting(lighting) => {
                writeln!(out, "  day = {}", lighting.is_day())?;
                writeln!(out, "  lighting_intensity = {}", lighting.intensity())?;
                writeln!(
                    out,
                    "  lighting_water_intensity = {}",
                    lighting.water_intensity()
                )?;
            }
            OverlaySettings::Spawn(spawn) => writeln!(out, "  day = {}", spawn.is_day())?,
            OverlaySettings::Dummy | OverlaySettings::Height | OverlaySettings::Slime => {}
        }
        Ok(())
    }
}
