// src/config/ini.rs

//! Minimal INI reader producing raw key/value sections.
//!
//! Grammar:
//!
//! ```ini
//! # comment
//! output_dir = output
//!
//! [global:maps]
//! texture_size = 16
//!
//! [myworld:world]
//! input_dir = worlds/myworld
//! ```
//!
//! A header is `[name]` or `[name:type]`. Keys before the first header
//! belong to the root section. Nothing here knows what the keys mean.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{MapcraftError, Result};
use crate::fs::FileSystem;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[\s*([^\]:]*?)\s*(?::\s*([^\]]*?)\s*)?\]$").expect("valid header regex")
});

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^=\s][^=]*?)\s*=\s*(.*)$").expect("valid entry regex"));

/// One `[name:type]` block of raw `key = value` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSection {
    name: String,
    section_type: String,
    entries: Vec<(String, String)>,
}

impl IniSection {
    pub fn new(name: impl Into<String>, section_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            section_type: section_type.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn section_type(&self) -> &str {
        &self.section_type
    }

    /// `"name:type"`, or just the name for untyped sections.
    pub fn name_type(&self) -> String {
        if self.section_type.is_empty() {
            self.name.clone()
        } else {
            format!("{}:{}", self.name, self.section_type)
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a value; a key that already exists keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A parsed INI document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniFile {
    root: IniSection,
    sections: Vec<IniSection>,
}

impl IniFile {
    /// Read and parse the file at `path`.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let contents = fs.read_to_string(path)?;
        Self::parse_str(&contents)
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        let mut file = IniFile::default();
        let mut current: Option<IniSection> = None;

        for (idx, raw_line) in contents.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') {
                let caps = HEADER_RE.captures(line).ok_or_else(|| MapcraftError::IniSyntax {
                    line: idx + 1,
                    message: format!("malformed section header '{line}'"),
                })?;
                let name = caps.get(1).map_or("", |m| m.as_str());
                if name.is_empty() {
                    return Err(MapcraftError::IniSyntax {
                        line: idx + 1,
                        message: "section name must not be empty".to_string(),
                    });
                }
                let section_type = caps.get(2).map_or("", |m| m.as_str());

                if let Some(done) = current.take() {
                    file.sections.push(done);
                }
                current = Some(IniSection::new(name, section_type));
                continue;
            }

            let caps = ENTRY_RE.captures(line).ok_or_else(|| MapcraftError::IniSyntax {
                line: idx + 1,
                message: format!("expected 'key = value', got '{line}'"),
            })?;
            let target = current.as_mut().unwrap_or(&mut file.root);
            target.set(&caps[1], &caps[2]);
        }

        if let Some(done) = current.take() {
            file.sections.push(done);
        }

        Ok(file)
    }

    /// Keys that appear before the first section header.
    pub fn root(&self) -> &IniSection {
        &self.root
    }

    /// All sections in declaration order, duplicates included.
    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }

    /// First section with the given name and type.
    pub fn section(&self, name: &str, section_type: &str) -> Option<&IniSection> {
        self.sections
            .iter()
            .find(|s| s.name == name && s.section_type == section_type)
    }

    pub fn has_section(&self, name: &str, section_type: &str) -> bool {
        self.section(name, section_type).is_some()
    }
}
