mod common;

use std::error::Error;
use std::path::{Path, PathBuf};

use mapcraft::config::{
    ConfigFile, FixedDataDirs, LABEL_CONFIG_FILE, LABEL_GLOBAL_MAPS, LABEL_GLOBAL_WORLDS,
    ValidationMap, map_label, world_label,
};
use mapcraft::fs::mock::MockFileSystem;
use mapcraft::types::Rotation;

use common::{
    IniBuilder, base_config, data_dirs, errors_for, init_tracing, mock_fs, parse_mock,
    parse_mock_with, warnings_for,
};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn valid_file_with_world_and_map() -> TestResult {
    let text = base_config()
        .section("overview:map")
        .key("name", "World overview")
        .key("world", "alpha")
        .key("rotations", "top-left bottom-right")
        .build();
    let (config, validation, ok) = parse_mock(&text);

    assert!(ok, "{validation}");
    assert!(validation.is_valid());
    assert_eq!(config.output_dir(), Path::new("/cfg/output"));
    assert_eq!(config.template_dir(), Path::new("/data/template"));

    let world = config.world("alpha").ok_or("world missing")?;
    assert_eq!(world.input_dir(), Path::new("/cfg/worlds/alpha"));

    let map = config.map("overview").ok_or("map missing")?;
    assert_eq!(map.long_name(), "World overview");
    assert_eq!(map.world(), "alpha");
    assert_eq!(map.texture_dir(), Path::new("/data/textures"));
    assert_eq!(map.rotations().len(), 2);
    assert!(map.rotations().contains(&Rotation::BottomRight));

    let labels: Vec<_> = validation.labels().collect();
    assert_eq!(
        labels,
        [
            LABEL_CONFIG_FILE.to_string(),
            world_label("alpha"),
            map_label("overview")
        ]
    );
    Ok(())
}

#[test]
fn missing_file_is_one_config_file_error() {
    init_tracing();
    let fs = mock_fs();
    let mut config = ConfigFile::new();
    let mut validation = ValidationMap::new();

    let ok = config.parse_with("/cfg/nope.conf", &fs, &data_dirs(), &mut validation);

    assert!(!ok);
    assert_eq!(validation.entries().len(), 1);
    assert_eq!(errors_for(&validation, LABEL_CONFIG_FILE).len(), 1);
}

#[test]
fn syntax_error_is_reported_against_the_file() {
    let (_, validation, ok) = parse_mock("output_dir = out\n[broken\n");
    assert!(!ok);
    let errors = errors_for(&validation, LABEL_CONFIG_FILE);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("line 2"), "{}", errors[0]);
}

#[test]
fn output_dir_is_required() {
    let text = IniBuilder::new()
        .section("alpha:world")
        .key("input_dir", "worlds/alpha")
        .build();
    let (config, validation, ok) = parse_mock(&text);

    assert!(!ok);
    assert_eq!(
        errors_for(&validation, LABEL_CONFIG_FILE),
        ["You have to specify an output directory ('output_dir')!"]
    );
    // General errors do not stop the remaining sections from parsing.
    assert!(config.has_world("alpha"));
}

#[test]
fn template_dir_is_required_when_nothing_is_installed() {
    let (_, validation, ok) = parse_mock_with(
        &mock_fs(),
        &FixedDataDirs::none(),
        &base_config().build(),
    );
    assert!(!ok);
    assert_eq!(
        errors_for(&validation, LABEL_CONFIG_FILE),
        ["You have to specify a template directory ('template_dir')!"]
    );
}

#[test]
fn explicit_template_dir_must_exist() {
    let text = base_config().root("template_dir", "web").build();
    let (_, validation, ok) = parse_mock(&text);
    assert!(!ok);
    assert_eq!(
        errors_for(&validation, LABEL_CONFIG_FILE),
        ["'template_dir' must be an existing directory! '/cfg/web' does not exist!"]
    );

    let fs = mock_fs();
    fs.add_dir("/cfg/web");
    let (config, validation, ok) = parse_mock_with(&fs, &data_dirs(), &text);
    assert!(ok, "{validation}");
    assert_eq!(config.template_dir(), Path::new("/cfg/web"));
}

#[test]
fn duplicate_world_keeps_the_first_definition() {
    let text = base_config()
        .section("alpha:world")
        .key("input_dir", "worlds/beta")
        .build();
    let (config, validation, ok) = parse_mock(&text);

    assert!(!ok);
    assert_eq!(config.worlds().count(), 1);
    assert_eq!(
        config.world("alpha").map(|w| w.input_dir().to_path_buf()),
        Some(PathBuf::from("/cfg/worlds/alpha"))
    );
    let errors: Vec<_> = validation
        .entries()
        .iter()
        .flat_map(|(_, list)| list.errors())
        .map(|m| m.text.clone())
        .collect();
    assert_eq!(errors, ["World name 'alpha' already used!"]);
}

#[test]
fn duplicate_map_keeps_the_first_definition() {
    let text = base_config()
        .section("beta:world")
        .key("input_dir", "worlds/beta")
        .section("overview:map")
        .key("world", "alpha")
        .section("overview:map")
        .key("world", "beta")
        .build();
    let (config, validation, ok) = parse_mock(&text);

    assert!(!ok);
    assert_eq!(config.maps().len(), 1);
    assert_eq!(config.map("overview").map(|m| m.world()), Some("alpha"));
    assert_eq!(validation.error_count(), 1);
    let last = validation.entries().last().map(|(l, _)| l.clone());
    assert_eq!(last, Some(map_label("overview")));
    assert_eq!(
        validation.entries()[validation.entries().len() - 1]
            .1
            .errors()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>(),
        ["Map name 'overview' already used!"]
    );
}

#[test]
fn map_referring_to_unknown_world() {
    let text = base_config()
        .section("overview:map")
        .key("world", "gamma")
        .build();
    let (config, validation, ok) = parse_mock(&text);

    assert!(!ok);
    assert!(config.has_map("overview"));
    assert_eq!(
        errors_for(&validation, &map_label("overview")),
        ["World 'gamma' does not exist!"]
    );
}

#[test]
fn invalid_world_template_short_circuits() {
    let text = base_config()
        .section("global:worlds")
        .key("input_dir", "worlds/nowhere")
        .section("overview:map")
        .key("world", "alpha")
        .build();
    let (config, validation, ok) = parse_mock(&text);

    assert!(!ok);
    assert_eq!(errors_for(&validation, LABEL_GLOBAL_WORLDS).len(), 1);
    assert!(config.worlds().next().is_none());
    assert!(config.maps().is_empty());
    assert!(validation.get(&world_label("alpha")).is_none());
    assert!(validation.get(&map_label("overview")).is_none());
}

#[test]
fn invalid_map_template_short_circuits() {
    let text = base_config()
        .section("global:maps")
        .key("texture_size", "64")
        .section("overview:map")
        .key("world", "alpha")
        .build();
    let (config, validation, ok) = parse_mock(&text);

    assert!(!ok);
    assert_eq!(errors_for(&validation, LABEL_GLOBAL_MAPS).len(), 1);
    assert!(config.maps().is_empty());
    assert!(validation.get(&map_label("overview")).is_none());
}

#[test]
fn valid_templates_report_no_label() {
    let text = base_config()
        .section("global:maps")
        .key("texture_size", "16")
        .build();
    let (_, validation, ok) = parse_mock(&text);
    assert!(ok, "{validation}");
    assert!(validation.get(LABEL_GLOBAL_MAPS).is_none());
    assert!(validation.get(LABEL_GLOBAL_WORLDS).is_none());
}

#[test]
fn templates_are_inherited_by_every_section() -> TestResult {
    let text = base_config()
        .section("global:worlds")
        .key("input_dir", "worlds/beta")
        .section("global:maps")
        .key("texture_size", "16")
        .key("rendermode", "daylight")
        .section("other:world")
        .section("overview:map")
        .key("world", "alpha")
        .section("caves:map")
        .key("world", "other")
        .key("texture_size", "8")
        .build();
    let (config, validation, ok) = parse_mock(&text);

    assert!(ok, "{validation}");
    assert_eq!(
        config.world("other").ok_or("other missing")?.input_dir(),
        Path::new("/cfg/worlds/beta")
    );
    assert_eq!(
        config.world("alpha").ok_or("alpha missing")?.input_dir(),
        Path::new("/cfg/worlds/alpha")
    );

    let overview = config.map("overview").ok_or("overview missing")?;
    assert_eq!(overview.texture_size(), 16);
    assert_eq!(overview.rendermode().as_str(), "daylight");

    let caves = config.map("caves").ok_or("caves missing")?;
    assert_eq!(caves.texture_size(), 8);
    assert_eq!(caves.rendermode().as_str(), "daylight");

    assert!(config.world_global().is_global());
    assert!(config.map_global().is_global());
    Ok(())
}

#[test]
fn unknown_section_types_are_warnings() {
    let text = base_config()
        .section("shade:overlay")
        .key("type", "lighting")
        .section("plain")
        .build();
    let (_, validation, ok) = parse_mock(&text);

    assert!(ok, "{validation}");
    assert_eq!(validation.warning_count(), 2);
    assert_eq!(
        warnings_for(&validation, "Section 'shade' with type 'overlay'"),
        ["Unknown section type!"]
    );
    assert_eq!(
        warnings_for(&validation, "Section 'plain' with type ''"),
        ["Unknown section type!"]
    );
}

#[test]
fn sections_keep_declaration_order() {
    let text = IniBuilder::new()
        .root("output_dir", "output")
        .section("zeta:world")
        .key("input_dir", "worlds/beta")
        .section("alpha:world")
        .key("input_dir", "worlds/alpha")
        .section("second:map")
        .key("world", "zeta")
        .section("first:map")
        .key("world", "alpha")
        .build();
    let (config, validation, ok) = parse_mock(&text);

    assert!(ok, "{validation}");
    let worlds: Vec<_> = config.worlds().map(|(name, _)| name).collect();
    assert_eq!(worlds, ["zeta", "alpha"]);
    let maps: Vec<_> = config.maps().iter().map(|m| m.short_name()).collect();
    assert_eq!(maps, ["second", "first"]);
}

#[test]
fn bare_filename_resolves_against_working_directory() {
    init_tracing();
    let fs = MockFileSystem::new().with_current_dir("/home/user");
    fs.add_dir("/home/user/worlds/alpha");
    fs.add_file("/home/user/render.conf", base_config().build());

    // The mock stores paths verbatim, so read the file through its absolute
    // path and only check how the directory is derived.
    let root = mapcraft::config::loader::config_root_dir(&fs, Path::new("render.conf"));
    assert_eq!(root, PathBuf::from("/home/user"));

    let nested = mapcraft::config::loader::config_root_dir(&fs, Path::new("conf/render.conf"));
    assert_eq!(nested, PathBuf::from("/home/user/conf"));

    let mut config = ConfigFile::new();
    let mut validation = ValidationMap::new();
    assert!(config.parse_with("/home/user/render.conf", &fs, &data_dirs(), &mut validation));
    assert_eq!(config.output_dir(), Path::new("/home/user/output"));
}

#[test]
fn report_rendering() -> TestResult {
    let text = base_config()
        .section("overview:map")
        .key("world", "gamma")
        .section("shade:overlay")
        .build();
    let (_, validation, _) = parse_mock(&text);

    let rendered = validation.to_string();
    assert!(rendered.contains("Map section 'overview':\n  Error: World 'gamma' does not exist!"));
    assert!(rendered.contains("Section 'shade' with type 'overlay':\n  Warning: Unknown section type!"));
    // Empty lists are not printed.
    assert!(!rendered.contains(LABEL_CONFIG_FILE));

    let toml_text = validation.to_toml()?;
    let parsed: toml::Value = toml::from_str(&toml_text)?;
    let sections = parsed
        .get("section")
        .and_then(|s| s.as_array())
        .ok_or("no sections")?;
    assert_eq!(sections.len(), 2);
    let first = &sections[0];
    assert_eq!(
        first.get("label").and_then(|l| l.as_str()),
        Some("Section 'shade' with type 'overlay'")
    );
    let kind = first
        .get("messages")
        .and_then(|m| m.as_array())
        .and_then(|m| m.first())
        .and_then(|m| m.get("kind"))
        .and_then(|k| k.as_str());
    assert_eq!(kind, Some("warning"));
    Ok(())
}

#[test]
fn empty_general_paths_are_reported_once_each() {
    let text = IniBuilder::new()
        .root("output_dir", "")
        .root("template_dir", "")
        .section("alpha:world")
        .key("input_dir", "worlds/alpha")
        .build();
    let (config, validation, ok) = parse_mock(&text);

    assert!(!ok);
    let errors = errors_for(&validation, LABEL_CONFIG_FILE);
    assert_eq!(errors.len(), 2, "{errors:?}");
    assert!(errors[0].starts_with("Invalid value for 'output_dir'"), "{}", errors[0]);
    assert!(errors[1].starts_with("Invalid value for 'template_dir'"), "{}", errors[1]);
    // An explicit but broken template_dir does not fall back to discovery.
    assert_eq!(config.template_dir(), Path::new(""));
}
