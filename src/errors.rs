// src/errors.rs

//! Crate-wide error type.
//!
//! Schema problems inside a configuration file are *not* errors in this
//! sense; they are collected as [`ValidationMessage`]s so a complete report
//! can be shown. `MapcraftError` covers the hard failures that stop parsing
//! altogether (unreadable file, broken INI syntax, bad report encoding).
//!
//! [`ValidationMessage`]: crate::config::ValidationMessage

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapcraftError {
    #[error("Unable to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Syntax error on line {line}: {message}")]
    IniSyntax { line: usize, message: String },

    #[error("TOML serialization error: {0}")]
    TomlError(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, MapcraftError>;
