#![allow(dead_code)]

use std::path::PathBuf;

use mapcraft::config::{ConfigFile, FixedDataDirs, ValidationMap};
use mapcraft::fs::mock::MockFileSystem;

pub use mapcraft_test_utils::builders::IniBuilder;
pub use mapcraft_test_utils::init_tracing;

pub const CONFIG_PATH: &str = "/cfg/render.conf";

/// In-memory layout used by most tests:
///
/// ```text
/// /cfg/render.conf        (written by `parse_mock`)
/// /cfg/worlds/alpha/
/// /cfg/worlds/beta/
/// /cfg/textures/
/// /data/textures/
/// /data/template/
/// ```
pub fn mock_fs() -> MockFileSystem {
    let fs = MockFileSystem::new().with_current_dir("/home/user");
    fs.add_dir("/cfg/worlds/alpha");
    fs.add_dir("/cfg/worlds/beta");
    fs.add_dir("/cfg/textures");
    fs.add_dir("/data/textures");
    fs.add_dir("/data/template");
    fs
}

pub fn data_dirs() -> FixedDataDirs {
    FixedDataDirs {
        texture_dir: Some(PathBuf::from("/data/textures")),
        template_dir: Some(PathBuf::from("/data/template")),
    }
}

/// Minimal valid configuration: one world, no maps.
pub fn base_config() -> IniBuilder {
    IniBuilder::new()
        .root("output_dir", "output")
        .section("alpha:world")
        .key("input_dir", "worlds/alpha")
}

pub fn parse_mock_with(
    fs: &MockFileSystem,
    data_dirs: &FixedDataDirs,
    text: &str,
) -> (ConfigFile, ValidationMap, bool) {
    init_tracing();
    fs.add_file(CONFIG_PATH, text);
    let mut config = ConfigFile::new();
    let mut validation = ValidationMap::new();
    let ok = config.parse_with(CONFIG_PATH, fs, data_dirs, &mut validation);
    (config, validation, ok)
}

pub fn parse_mock(text: &str) -> (ConfigFile, ValidationMap, bool) {
    parse_mock_with(&mock_fs(), &data_dirs(), text)
}

/// Error texts attached to `label`.
pub fn errors_for(validation: &ValidationMap, label: &str) -> Vec<String> {
    validation
        .get(label)
        .map(|list| list.errors().map(|m| m.text.clone()).collect())
        .unwrap_or_default()
}

pub fn warnings_for(validation: &ValidationMap, label: &str) -> Vec<String> {
    validation
        .get(label)
        .map(|list| list.warnings().map(|m| m.text.clone()).collect())
        .unwrap_or_default()
}
