// src/fs/mod.rs

//! Filesystem access used while parsing a configuration.
//!
//! The config layer only reads the configuration file itself and checks
//! that resolved directories exist, so the trait stays small. Tests swap in
//! [`mock::MockFileSystem`] to avoid touching the disk.

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{MapcraftError, Result};

pub mod mock;

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn is_dir(&self, path: &Path) -> bool;

    /// Directory relative paths are resolved against when a path has no
    /// parent component.
    fn current_dir(&self) -> PathBuf;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| MapcraftError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn current_dir(&self) -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn absolute(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
