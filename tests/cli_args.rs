// tests/cli_args.rs

use std::path::PathBuf;

use clap::Parser;
use scss_refresh::cli::{CliArgs, LogLevel};
use scss_refresh::types::OutputStyle;

#[test]
fn defaults() {
    let args = CliArgs::try_parse_from(["scss-refresh"]).unwrap();

    assert_eq!(args.config, "ScssRefresh.toml");
    assert!(!args.once);
    assert!(!args.dry_run);
    assert_eq!(args.interval_ms, 1000);
    assert!(args.asset_dir.is_none());
    assert!(args.static_dir.is_none());
    assert!(args.load_paths.is_empty());
    assert!(args.log_level.is_none());
    assert!(args.output_style.is_none());
}

#[test]
fn load_path_is_repeatable() {
    let args = CliArgs::try_parse_from([
        "scss-refresh",
        "--load-path",
        "vendor",
        "--load-path",
        "lib/scss",
    ])
    .unwrap();

    assert_eq!(
        args.load_paths,
        vec![PathBuf::from("vendor"), PathBuf::from("lib/scss")]
    );
}

#[test]
fn overrides_and_flags() {
    let args = CliArgs::try_parse_from([
        "scss-refresh",
        "--config",
        "site/ScssRefresh.toml",
        "--once",
        "--asset-dir",
        "styles",
        "--static-dir",
        "public/css",
        "--log-level",
        "debug",
        "--interval-ms",
        "250",
    ])
    .unwrap();

    assert_eq!(args.config, "site/ScssRefresh.toml");
    assert!(args.once);
    assert_eq!(args.asset_dir, Some(PathBuf::from("styles")));
    assert_eq!(args.static_dir, Some(PathBuf::from("public/css")));
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    assert_eq!(args.interval_ms, 250);
}

#[test]
fn zero_interval_is_rejected() {
    assert!(CliArgs::try_parse_from(["scss-refresh", "--interval-ms", "0"]).is_err());
}

#[test]
fn unknown_log_level_is_rejected() {
    assert!(CliArgs::try_parse_from(["scss-refresh", "--log-level", "loud"]).is_err());
}

#[test]
fn output_style_is_parsed_case_insensitively() {
    let args = CliArgs::try_parse_from(["scss-refresh", "--output-style", "Compressed"]).unwrap();
    assert_eq!(args.output_style, Some(OutputStyle::Compressed));
}

#[test]
fn unknown_output_style_is_rejected() {
    let err = CliArgs::try_parse_from(["scss-refresh", "--output-style", "nested"]).unwrap_err();
    assert!(err.to_string().contains("invalid output style"));
}
