// tests/run_once.rs

//! End-to-end runs of the binary's entry point against a config file.

use std::error::Error;

use clap::Parser;
use scss_refresh::cli::CliArgs;
use scss_refresh_test_utils::fixtures::{read, SiteLayout};
use scss_refresh_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

fn args_for(site: &SiteLayout, extra: &[&str]) -> Result<CliArgs, clap::Error> {
    let config = site.root().join("ScssRefresh.toml");
    let config = config.to_string_lossy().into_owned();
    let mut argv = vec!["scss-refresh", "--config", config.as_str()];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv)
}

#[tokio::test]
async fn once_compiles_and_exits() -> TestResult {
    init_tracing();
    let site = SiteLayout::new();
    std::fs::write(site.root().join("ScssRefresh.toml"), "[app]\ndebug = true\n")?;
    site.create_asset_file("pages/home.scss");

    with_timeout(scss_refresh::run(args_for(&site, &["--once"])?)).await?;

    let css = read(&site.static_dir().join("pages/home.css"));
    assert!(css.contains("color: red"));
    Ok(())
}

#[tokio::test]
async fn once_reports_compile_errors() -> TestResult {
    init_tracing();
    let site = SiteLayout::new();
    std::fs::write(site.root().join("ScssRefresh.toml"), "")?;
    site.write_asset_file("broken.scss", "a { color: ");

    let result = with_timeout(scss_refresh::run(args_for(&site, &["--once"])?)).await;

    let err = result.expect_err("a broken stylesheet must fail --once");
    assert!(format!("{err:#}").contains("broken.scss"));
    assert!(!site.static_dir().join("broken.css").exists());
    Ok(())
}

#[tokio::test]
async fn dry_run_compiles_nothing() -> TestResult {
    init_tracing();
    let site = SiteLayout::new();
    std::fs::write(site.root().join("ScssRefresh.toml"), "")?;
    site.create_asset_file("app.scss");
    site.create_asset_file("_partial.scss");

    with_timeout(scss_refresh::run(args_for(&site, &["--dry-run"])?)).await?;

    assert!(!site.static_dir().join("app.css").exists());
    Ok(())
}

#[tokio::test]
async fn production_mode_registers_no_hook() -> TestResult {
    init_tracing();
    let site = SiteLayout::new();
    std::fs::write(
        site.root().join("ScssRefresh.toml"),
        "[app]\ndebug = false\ntesting = false\n",
    )?;
    site.create_asset_file("app.scss");

    with_timeout(scss_refresh::run(args_for(&site, &["--once"])?)).await?;

    assert!(!site.static_dir().join("app.css").exists());
    Ok(())
}

#[tokio::test]
async fn command_line_dirs_override_config() -> TestResult {
    init_tracing();
    let site = SiteLayout::empty();
    let styles = site.mkdir("styles");
    let public = site.mkdir("public");
    std::fs::write(site.root().join("ScssRefresh.toml"), "")?;
    std::fs::write(styles.join("main.scss"), "b { font-weight: bold; }")?;

    let styles_arg = styles.to_string_lossy().into_owned();
    let public_arg = public.to_string_lossy().into_owned();
    let args = args_for(
        &site,
        &["--once", "--asset-dir", styles_arg.as_str(), "--static-dir", public_arg.as_str()],
    )?;
    with_timeout(scss_refresh::run(args)).await?;

    assert!(read(&public.join("main.css")).contains("font-weight: bold"));
    Ok(())
}

#[tokio::test]
async fn output_style_flag_beats_config() -> TestResult {
    init_tracing();
    let site = SiteLayout::new();
    std::fs::write(
        site.root().join("ScssRefresh.toml"),
        "[config]\nSCSS_OUTPUT_STYLE = \"expanded\"\n",
    )?;
    site.write_asset_file("min.scss", "a {\n  color: red;\n}\n");

    let args = args_for(&site, &["--once", "--output-style", "compressed"])?;
    with_timeout(scss_refresh::run(args)).await?;

    assert!(read(&site.static_dir().join("min.css")).contains("a{color:red}"));
    Ok(())
}
