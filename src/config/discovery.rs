// src/config/discovery.rs

//! Fallback lookup for the texture and template directories.
//!
//! A configuration may leave `texture_dir` / `template_dir` out, in which
//! case the directories shipped with an installation are used. The lookup
//! is a trait so tests and the CLI can inject fixed answers.

use std::path::PathBuf;

use tracing::debug;

use crate::fs::FileSystem;

/// Environment variable pointing at a data directory containing
/// `textures/` and `template/`.
pub const DATA_DIR_ENV: &str = "MAPCRAFT_DATA_DIR";

pub trait DataDirs {
    fn texture_dir(&self) -> Option<PathBuf>;
    fn template_dir(&self) -> Option<PathBuf>;
}

/// Explicit answers, `None` meaning "not found".
#[derive(Debug, Clone, Default)]
pub struct FixedDataDirs {
    pub texture_dir: Option<PathBuf>,
    pub template_dir: Option<PathBuf>,
}

impl FixedDataDirs {
    /// A lookup that never finds anything.
    pub fn none() -> Self {
        Self::default()
    }
}

impl DataDirs for FixedDataDirs {
    fn texture_dir(&self) -> Option<PathBuf> {
        self.texture_dir.clone()
    }

    fn template_dir(&self) -> Option<PathBuf> {
        self.template_dir.clone()
    }
}

/// Searches the usual installation locations.
///
/// Candidates, first match wins:
/// 1. `$MAPCRAFT_DATA_DIR`
/// 2. `<exe dir>/data`
/// 3. `<exe dir>/../share/mapcraft`
/// 4. `/usr/local/share/mapcraft`
/// 5. `/usr/share/mapcraft`
#[derive(Debug)]
pub struct InstalledDataDirs<'a> {
    fs: &'a dyn FileSystem,
    candidates: Vec<PathBuf>,
}

impl<'a> InstalledDataDirs<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        let mut candidates = Vec::new();

        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            candidates.push(PathBuf::from(dir));
        }
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        {
            candidates.push(exe_dir.join("data"));
            candidates.push(exe_dir.join("../share/mapcraft"));
        }
        candidates.push(PathBuf::from("/usr/local/share/mapcraft"));
        candidates.push(PathBuf::from("/usr/share/mapcraft"));

        Self { fs, candidates }
    }

    /// Search only the given candidate directories.
    pub fn with_candidates(fs: &'a dyn FileSystem, candidates: Vec<PathBuf>) -> Self {
        Self { fs, candidates }
    }

    fn find(&self, subdir: &str) -> Option<PathBuf> {
        let found = self
            .candidates
            .iter()
            .map(|c| c.join(subdir))
            .find(|dir| self.fs.is_dir(dir));
        debug!(subdir, found = ?found, "data directory lookup");
        found
    }
}

impl DataDirs for InstalledDataDirs<'_> {
    fn texture_dir(&self) -> Option<PathBuf> {
        self.find("textures")
    }

    fn template_dir(&self) -> Option<PathBuf> {
        self.find("template")
    }
}
