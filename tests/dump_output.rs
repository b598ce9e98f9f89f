use std::error::Error;

use mapcraft_test_utils::builders::{Fixture, IniBuilder};
use mapcraft_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn sample(fixture: &Fixture) -> Result<String, Box<dyn Error>> {
    fixture.mkdir("worlds/alpha")?;
    fixture.mkdir("worlds/beta")?;
    Ok(IniBuilder::new()
        .root("output_dir", "output")
        .section("global:maps")
        .key("texture_size", "16")
        .key("render_biomes", "false")
        .section("alpha:world")
        .key("input_dir", "worlds/alpha")
        .section("beta:world")
        .key("input_dir", "worlds/beta")
        .section("overview:map")
        .key("name", "World overview")
        .key("world", "alpha")
        .key("rotations", "top-left bottom-right")
        .section("night:map")
        .key("world", "beta")
        .key("rendermode", "nightlight")
        .key("texture_size", "8")
        .build())
}

#[test]
fn dump_lists_every_resolved_value() -> TestResult {
    init_tracing();
    let fixture = Fixture::new()?;
    let text = sample(&fixture)?;
    let (config, validation, ok) = fixture.parse("render.conf", &text)?;
    assert!(ok, "{validation}");

    let dump = config.dump();
    let root = fixture.path().display().to_string();

    assert!(dump.starts_with("General:\n"));
    assert!(dump.contains(&format!("  output_dir = {root}/output\n")));
    assert!(dump.contains(&format!("  template_dir = {root}/template\n")));
    assert!(dump.contains("Global map configuration:\n"));
    assert!(dump.contains(&format!("World 'alpha':\n  input_dir = {root}/worlds/alpha\n")));
    assert!(dump.contains("Map 'overview':\n  name = World overview\n  world = alpha\n"));
    assert!(dump.contains("  rotations = top-left bottom-right\n"));
    assert!(dump.contains("  rendermode = nightlight\n"));
    assert!(dump.contains("  render_biomes = false\n"));

    // Declaration order, not alphabetical.
    let overview = dump.find("Map 'overview'").ok_or("overview missing")?;
    let night = dump.find("Map 'night'").ok_or("night missing")?;
    assert!(overview < night);
    Ok(())
}

#[test]
fn to_ini_parses_back_to_the_same_configuration() -> TestResult {
    init_tracing();
    let fixture = Fixture::new()?;
    let text = sample(&fixture)?;
    let (config, validation, ok) = fixture.parse("render.conf", &text)?;
    assert!(ok, "{validation}");

    // Written into a different directory: all paths are absolute.
    fixture.mkdir("copy")?;
    let (again, validation, ok) = fixture.parse("copy/render.conf", &config.to_ini())?;
    assert!(ok, "{validation}");

    assert_eq!(again.dump(), config.dump());
    assert_eq!(again.to_ini(), config.to_ini());
    Ok(())
}

#[test]
fn to_ini_without_templates_has_no_template_sections() -> TestResult {
    init_tracing();
    let fixture = Fixture::new()?;
    fixture.mkdir("worlds/alpha")?;
    let text = IniBuilder::new()
        .root("output_dir", "output")
        .section("alpha:world")
        .key("input_dir", "worlds/alpha")
        .build();
    let (config, validation, ok) = fixture.parse("render.conf", &text)?;
    assert!(ok, "{validation}");

    let ini = config.to_ini();
    assert!(!ini.contains("[global:maps]"));
    assert!(ini.contains("[alpha:world]"));

    let (again, _, ok) = fixture.parse("again.conf", &ini)?;
    assert!(ok);
    assert_eq!(again.dump(), config.dump());
    Ok(())
}

#[test]
fn templates_survive_to_ini() -> TestResult {
    init_tracing();
    let fixture = Fixture::new()?;
    fixture.mkdir("worlds/alpha")?;
    fixture.mkdir("worlds/beta")?;
    let text = IniBuilder::new()
        .root("output_dir", "output")
        .section("global:worlds")
        .key("input_dir", "worlds/alpha")
        .section("global:maps")
        .key("name", "Default map")
        .key("rendermode", "daylight")
        .section("alpha:world")
        .section("beta:world")
        .key("input_dir", "worlds/beta")
        .section("overview:map")
        .key("world", "beta")
        .build();
    let (config, validation, ok) = fixture.parse("render.conf", &text)?;
    assert!(ok, "{validation}");

    let ini = config.to_ini();
    assert!(ini.contains("[global:worlds]"), "{ini}");
    assert!(ini.contains("name = Default map\n"), "{ini}");

    fixture.mkdir("copy")?;
    let (again, validation, ok) = fixture.parse("copy/render.conf", &ini)?;
    assert!(ok, "{validation}");

    let root = fixture.path().display().to_string();
    let dump = again.dump();
    assert!(dump.contains(&format!(
        "Global world configuration:\n  input_dir = {root}/worlds/alpha\n"
    )));
    assert!(dump.contains("Global map configuration:\n  name = Default map\n"));
    assert_eq!(dump, config.dump());
    assert_eq!(again.to_ini(), ini);
    Ok(())
}
