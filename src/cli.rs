// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::OutputStyle;

/// Command-line arguments for `scss-refresh`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "scss-refresh",
    version,
    about = "Recompile changed SCSS stylesheets into a static directory.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `ScssRefresh.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "ScssRefresh.toml")]
    pub config: String,

    /// Run a single refresh pass and exit.
    #[arg(long)]
    pub once: bool,

    /// Milliseconds between refresh passes when not running `--once`.
    #[arg(
        long,
        value_name = "MS",
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_ms: u64,

    /// Source directory; overrides `SCSS_ASSET_DIR`.
    #[arg(long, value_name = "DIR")]
    pub asset_dir: Option<PathBuf>,

    /// Output directory; overrides `SCSS_STATIC_DIR`.
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Compiler search path (repeatable); replaces `SCSS_LOAD_PATHS`.
    #[arg(long = "load-path", value_name = "DIR")]
    pub load_paths: Vec<PathBuf>,

    /// CSS formatting (`expanded` or `compressed`); overrides `SCSS_OUTPUT_STYLE`.
    #[arg(long, value_name = "STYLE", value_parser = parse_output_style)]
    pub output_style: Option<OutputStyle>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SCSS_REFRESH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve directories and list discovered stylesheets, but compile nothing.
    #[arg(long)]
    pub dry_run: bool,
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

fn parse_output_style(s: &str) -> Result<OutputStyle, String> {
    s.parse()
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
