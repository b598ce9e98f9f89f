#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mapcraft::config::{ConfigFile, FixedDataDirs, ValidationMap};
use mapcraft::fs::RealFileSystem;
use tempfile::TempDir;

/// Builder for configuration file text.
///
/// ```ignore
/// let text = IniBuilder::new()
///     .root("output_dir", "output")
///     .section("myworld:world")
///     .key("input_dir", "worlds/myworld")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct IniBuilder {
    root: Vec<(String, String)>,
    sections: Vec<(String, Vec<(String, String)>)>,
}

impl IniBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key before the first section header.
    pub fn root(mut self, key: &str, value: &str) -> Self {
        self.root.push((key.to_string(), value.to_string()));
        self
    }

    /// Start a new `[header]` section; following `key` calls go into it.
    pub fn section(mut self, header: &str) -> Self {
        self.sections.push((header.to_string(), Vec::new()));
        self
    }

    /// Add a key to the most recent section (or the root if there is none).
    pub fn key(mut self, key: &str, value: &str) -> Self {
        let entry = (key.to_string(), value.to_string());
        match self.sections.last_mut() {
            Some((_, entries)) => entries.push(entry),
            None => self.root.push(entry),
        }
        self
    }

    pub fn build(&self) -> String {
        let mut out = String::new();
        for (k, v) in &self.root {
            out.push_str(&format!("{k} = {v}\n"));
        }
        for (header, entries) in &self.sections {
            out.push_str(&format!("\n[{header}]\n"));
            for (k, v) in entries {
                out.push_str(&format!("{k} = {v}\n"));
            }
        }
        out
    }
}

/// Temporary directory laid out like a real installation: a `textures/`
/// and a `template/` directory plus whatever worlds a test creates.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("creating fixture directory")?;
        let fixture = Self { dir };
        fixture.mkdir("textures")?;
        fixture.mkdir("template")?;
        Ok(fixture)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create `rel` (and parents) below the fixture root.
    pub fn mkdir(&self, rel: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).with_context(|| format!("creating {:?}", path))?;
        Ok(path)
    }

    pub fn write(&self, rel: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(rel);
        fs::write(&path, contents).with_context(|| format!("writing {:?}", path))?;
        Ok(path)
    }

    /// The fixture's `textures/` and `template/` as discovery results.
    pub fn data_dirs(&self) -> FixedDataDirs {
        FixedDataDirs {
            texture_dir: Some(self.dir.path().join("textures")),
            template_dir: Some(self.dir.path().join("template")),
        }
    }

    /// Write `contents` to `rel` and parse it with the fixture's data dirs.
    pub fn parse(&self, rel: &str, contents: &str) -> Result<(ConfigFile, ValidationMap, bool)> {
        let path = self.write(rel, contents)?;
        let mut config = ConfigFile::new();
        let mut validation = ValidationMap::new();
        let ok = config.parse_with(&path, &RealFileSystem, &self.data_dirs(), &mut validation);
        Ok((config, validation, ok))
    }
}
