// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod render;
pub mod types;

use anyhow::{Result, bail};
use tracing::{debug, info};

use crate::cli::{CliArgs, ReportFormat};
use crate::config::discovery::{DataDirs, FixedDataDirs, InstalledDataDirs};
use crate::config::{ConfigFile, ValidationMap};
use crate::fs::RealFileSystem;
use crate::render::RenderBehaviorHelper;
use crate::types::Rotation;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config parsing (with the installed data directories as fallbacks,
///   overridable from the CLI)
/// - the validation report
/// - `--dump`
/// - render behaviour specs and the resulting render plan
pub fn run(args: CliArgs) -> Result<()> {
    let fs = RealFileSystem;
    let installed = InstalledDataDirs::new(&fs);
    let data_dirs = FixedDataDirs {
        texture_dir: args.texture_dir.clone().or_else(|| installed.texture_dir()),
        template_dir: args.template_dir.clone().or_else(|| installed.template_dir()),
    };

    let mut config = ConfigFile::new();
    let mut validation = ValidationMap::new();
    let ok = config.parse_with(&args.config, &fs, &data_dirs, &mut validation);

    print_report(&validation, args.report_format)?;

    if !ok {
        bail!(
            "configuration file {:?} is invalid ({} error(s))",
            args.config,
            validation.error_count()
        );
    }

    if args.dump {
        print!("{}", config.dump());
        return Ok(());
    }

    let mut helper = RenderBehaviorHelper::new(&config);
    let warnings = helper.parse_render_behaviors(
        args.render_skip_all,
        &args.render_skip,
        &args.render_auto,
        &args.render_force,
    );
    debug!(warnings = warnings.len(), "render behaviours applied");

    print_render_plan(&config, &helper);

    if args.template_js {
        println!("{}", helper.generate_template_javascript());
    }

    Ok(())
}

fn print_report(validation: &ValidationMap, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => print!("{validation}"),
        ReportFormat::Toml => print!("{}", validation.to_toml()?),
    }
    info!(
        errors = validation.error_count(),
        warnings = validation.warning_count(),
        "configuration validated"
    );
    Ok(())
}

/// One line per map: its world and the behaviour of every rotation it
/// renders.
fn print_render_plan(config: &ConfigFile, helper: &RenderBehaviorHelper<'_>) {
    println!("render plan ({} maps):", config.maps().len());
    for map in config.maps() {
        let name = map.short_name();
        let plan: Vec<String> = map
            .rotations()
            .iter()
            .map(|r: &Rotation| {
                let behavior = helper.render_behavior(name, *r).unwrap_or_default();
                format!("{}={behavior}", r.short_name())
            })
            .collect();

        let summary = if helper.is_complete_render_skip(name) {
            " (skipped)"
        } else if helper.is_complete_render_force(name) {
            " (forced)"
        } else {
            ""
        };
        println!("  - {name} [world {}]: {}{summary}", map.world(), plan.join(" "));
    }
}
