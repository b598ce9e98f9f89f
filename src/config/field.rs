// src/config/field.rs

//! `Field<T>`: an optional value that remembers whether it was loaded.
//!
//! Every section type stores its settings as fields. Loading never fails
//! hard; a value that does not parse becomes one error in the section's
//! [`ValidationList`] and the field keeps its previous state.

use std::path::PathBuf;

use crate::config::ParseContext;
use crate::config::ini::IniSection;
use crate::config::validation::ValidationList;
use crate::fs::absolute;
use crate::types::Rendermode;

/// Types a field can hold, parsed from a raw INI value.
pub trait FieldValue: Clone + Default {
    /// Parse `raw`, returning a short description of what was expected on
    /// failure.
    fn parse_value(raw: &str) -> Result<Self, String>;
}

impl FieldValue for String {
    fn parse_value(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl FieldValue for PathBuf {
    fn parse_value(raw: &str) -> Result<Self, String> {
        if raw.trim().is_empty() {
            return Err("expected a path".to_string());
        }
        Ok(PathBuf::from(raw))
    }
}

impl FieldValue for bool {
    fn parse_value(raw: &str) -> Result<Self, String> {
        match raw.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err("expected a boolean (true/false)".to_string()),
        }
    }
}

impl FieldValue for i32 {
    fn parse_value(raw: &str) -> Result<Self, String> {
        raw.trim()
            .parse()
            .map_err(|_| "expected an integer".to_string())
    }
}

impl FieldValue for f64 {
    fn parse_value(raw: &str) -> Result<Self, String> {
        raw.trim()
            .parse()
            .map_err(|_| "expected a number".to_string())
    }
}

impl FieldValue for Rendermode {
    fn parse_value(raw: &str) -> Result<Self, String> {
        raw.parse()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field<T> {
    value: T,
    loaded: bool,
}

impl<T: FieldValue> Field<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `key` from `section` if present.
    ///
    /// Returns true iff the key was present and parsed. An absent key leaves
    /// the field untouched and reports nothing.
    pub fn load(
        &mut self,
        section: &IniSection,
        key: &str,
        validation: &mut ValidationList,
    ) -> bool {
        match section.get(key) {
            Some(raw) => self.load_value(key, raw, validation),
            None => false,
        }
    }

    /// Like [`Field::load`], but fall back to `default` when the key is
    /// absent and nothing was loaded before.
    ///
    /// Returns true iff the field holds a usable value afterwards.
    pub fn load_or(
        &mut self,
        section: &IniSection,
        key: &str,
        default: T,
        validation: &mut ValidationList,
    ) -> bool {
        if section.has(key) {
            let ok = self.load(section, key, validation);
            if !ok {
                self.set_default(default);
            }
            return ok;
        }
        self.set_default(default);
        true
    }

    /// Parse a single raw value for `key`.
    pub fn load_value(&mut self, key: &str, raw: &str, validation: &mut ValidationList) -> bool {
        match T::parse_value(raw) {
            Ok(value) => {
                self.value = value;
                self.loaded = true;
                true
            }
            Err(expected) => {
                validation.error(format!("Invalid value for '{key}': '{raw}' ({expected})!"));
                false
            }
        }
    }

    /// Load `value` unless something was loaded already.
    pub fn set_default(&mut self, value: T) {
        if !self.loaded {
            self.value = value;
            self.loaded = true;
        }
    }

    /// Add `message` as an error if the field was never loaded.
    pub fn require(&self, validation: &mut ValidationList, message: &str) -> bool {
        if !self.loaded {
            validation.error(message);
        }
        self.loaded
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

impl Field<PathBuf> {
    /// Resolve the loaded path against the config directory and check that
    /// it names an existing directory.
    pub fn resolve_existing_dir(
        &mut self,
        ctx: &ParseContext<'_>,
        key: &str,
        validation: &mut ValidationList,
    ) -> bool {
        let resolved = absolute(&self.value, ctx.config_dir);
        self.value = resolved;

        if !ctx.fs.is_dir(&self.value) {
            validation.error(format!(
                "'{key}' must be an existing directory! '{}' does not exist!",
                self.value.display()
            ));
            return false;
        }
        true
    }
}
