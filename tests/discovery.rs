// tests/discovery.rs

use std::error::Error;
use std::path::Path;

use scss_refresh::assets::{classify, output_path_for, SourceKind};
use scss_refresh::config::RefreshOptions;
use scss_refresh::engine::ScssRefresher;
use scss_refresh_test_utils::fake_compiler::RecordingCompiler;
use scss_refresh_test_utils::fixtures::{MockSite, SiteLayout};
use scss_refresh_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn discovers_scss_files_only() -> TestResult {
    init_tracing();
    let site = SiteLayout::new();
    let scss = site.create_asset_file("foo.scss");
    let txt = site.create_asset_file("foo.txt");

    let refresher = ScssRefresher::from_host(&site.host(), RefreshOptions::new());
    refresher.discover()?;

    assert!(refresher.contains_asset(&scss));
    assert!(!refresher.contains_asset(&txt));
    Ok(())
}

#[test]
fn discovery_is_recursive() -> TestResult {
    init_tracing();
    let site = SiteLayout::new();
    site.create_asset_file("foo.scss");
    let nested = site.create_asset_file("bar/baz.scss");

    let refresher = ScssRefresher::from_host(&site.host(), RefreshOptions::new());
    refresher.discover()?;

    assert!(refresher.contains_asset(&nested));
    assert_eq!(refresher.assets().len(), 2);
    Ok(())
}

#[test]
fn partials_are_not_assets() -> TestResult {
    init_tracing();
    let site = SiteLayout::new();
    let partial = site.create_asset_file("_bar.scss");
    let deep_partial = site.create_asset_file("a/b/c/_deep.scss");

    let refresher = ScssRefresher::from_host(&site.host(), RefreshOptions::new());
    refresher.discover()?;

    assert!(!refresher.contains_asset(&partial));
    assert!(!refresher.contains_asset(&deep_partial));
    assert!(refresher.is_partial(&partial));
    assert!(refresher.is_partial(&deep_partial));
    Ok(())
}

#[test]
fn output_tree_mirrors_source_tree() -> TestResult {
    init_tracing();
    let site = SiteLayout::new();
    let src = site.create_asset_file("bar/baz.scss");

    let refresher = ScssRefresher::from_host(&site.host(), RefreshOptions::new());
    refresher.discover()?;

    let asset = refresher.asset(&src).ok_or("asset not registered")?;
    assert_eq!(asset.dest_path, site.static_dir().join("bar").join("baz.css"));
    Ok(())
}

#[test]
fn rediscovery_only_reports_new_files() -> TestResult {
    init_tracing();
    let site = SiteLayout::new();
    let foo = site.create_asset_file("foo.scss");

    let refresher = ScssRefresher::from_host(&site.host(), RefreshOptions::new());
    let first = refresher.discover()?;
    assert_eq!(first.new_assets, vec![foo.clone()]);

    let second = refresher.discover()?;
    assert!(second.new_assets.is_empty());
    assert_eq!(refresher.assets().len(), 1);

    let bar = site.create_asset_file("bar.scss");
    let third = refresher.discover()?;
    assert_eq!(third.new_assets, vec![bar]);
    assert_eq!(refresher.assets().len(), 2);
    Ok(())
}

#[test]
fn partial_mtime_tracks_latest_value_on_disk() -> TestResult {
    init_tracing();
    let site = MockSite::new();
    let partial = site.add_asset("_vars.scss");

    let refresher = site.refresher(RecordingCompiler::new());
    refresher.discover()?;
    let first = refresher.partials()[0].1;

    let touched = site.fs.touch(&partial)?;
    refresher.discover()?;
    let partials = refresher.partials();

    assert_eq!(partials.len(), 1);
    assert_eq!(partials[0].1, touched);
    assert!(touched > first);
    Ok(())
}

#[test]
fn deleted_sources_stay_registered() -> TestResult {
    init_tracing();
    let site = MockSite::new();
    let src = site.add_asset("gone.scss");

    let refresher = site.refresher(RecordingCompiler::new());
    refresher.discover()?;
    site.fs.remove_file(&src);
    refresher.discover()?;

    assert!(refresher.contains_asset(&src));
    Ok(())
}

#[test]
fn classification_uses_the_file_name_only() {
    assert_eq!(classify(Path::new("/a/foo.scss")), Some(SourceKind::Asset));
    assert_eq!(classify(Path::new("/a/_foo.scss")), Some(SourceKind::Partial));
    assert_eq!(classify(Path::new("/_vendor/foo.scss")), Some(SourceKind::Asset));
    assert_eq!(classify(Path::new("/a/foo_.scss")), Some(SourceKind::Asset));
    assert_eq!(classify(Path::new("/a/-foo.scss")), Some(SourceKind::Asset));
    assert_eq!(classify(Path::new("/a/foo.SCSS")), None);
    assert_eq!(classify(Path::new("/a/foo.css")), None);
    assert_eq!(classify(Path::new("/a/foo.scss.bak")), None);
}

#[test]
fn output_path_swaps_extension_and_keeps_subdirectories() {
    let dest = output_path_for(
        Path::new("/site/assets"),
        Path::new("/site/static"),
        Path::new("/site/assets/themes/dark/main.scss"),
    );
    assert_eq!(
        dest.as_deref(),
        Some(Path::new("/site/static/themes/dark/main.css"))
    );

    let outside = output_path_for(
        Path::new("/site/assets"),
        Path::new("/site/static"),
        Path::new("/elsewhere/main.scss"),
    );
    assert_eq!(outside, None);
}

#[cfg(unix)]
#[test]
fn symlink_loop_is_not_followed() -> TestResult {
    init_tracing();
    let site = SiteLayout::new();
    let scss = site.create_asset_file("foo.scss");
    std::os::unix::fs::symlink(site.asset_dir(), site.asset_dir().join("loop"))?;

    let refresher = ScssRefresher::from_host(&site.host(), RefreshOptions::new());
    let report = refresher.update()?;

    assert_eq!(report.assets, 1);
    assert_eq!(report.compiled, vec![site.static_dir().join("foo.css")]);
    assert!(refresher.contains_asset(&scss));
    assert!(!site.static_dir().join("loop").exists());
    Ok(())
}

#[test]
fn symlinked_directories_are_skipped() -> TestResult {
    init_tracing();
    let site = MockSite::new();
    site.add_asset("real/a.scss");
    site.fs.add_dir_symlink(site.asset("linked"));
    site.add_asset("linked/b.scss");
    site.add_asset("linked/_shared.scss");

    let refresher = site.refresher(RecordingCompiler::new());
    let found = refresher.discover()?;

    assert_eq!(found.new_assets, vec![site.asset("real/a.scss")]);
    assert_eq!(found.partials_seen, 0);
    assert!(!refresher.contains_asset(&site.asset("linked/b.scss")));
    Ok(())
}
