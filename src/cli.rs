// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `mapcraft`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mapcraft",
    version,
    about = "Validate a map rendering configuration and plan what to render.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: PathBuf,

    /// Print the fully resolved configuration and exit.
    #[arg(long)]
    pub dump: bool,

    /// Format of the validation report.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub report_format: ReportFormat,

    /// Maps (`map` or `map:rotation`, comma separated) to skip.
    #[arg(short = 's', long, value_name = "MAPS", default_value = "")]
    pub render_skip: String,

    /// Skip every map; combine with `--render-auto` / `--render-force` to
    /// render only a few.
    #[arg(long)]
    pub render_skip_all: bool,

    /// Maps to render incrementally (the default behaviour).
    #[arg(short = 'a', long, value_name = "MAPS", default_value = "")]
    pub render_auto: String,

    /// Maps to render from scratch.
    #[arg(short = 'f', long, value_name = "MAPS", default_value = "")]
    pub render_force: String,

    /// Also print the per-map descriptor for the web template.
    #[arg(long)]
    pub template_js: bool,

    /// Texture directory used when a map does not set `texture_dir`.
    #[arg(long, value_name = "DIR")]
    pub texture_dir: Option<PathBuf>,

    /// Template directory used when the config does not set `template_dir`.
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MAPCRAFT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Toml,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
