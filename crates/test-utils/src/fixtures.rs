#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

use scss_refresh::compile::StyleCompiler;
use scss_refresh::engine::ScssRefresher;
use scss_refresh::fs::mock::MockFileSystem;
use scss_refresh::host::StandaloneHost;

/// Stylesheet written by `create_asset_file`.
pub const SCSS_CONTENT: &str = "a { color: red; text-decoration: none; }";
/// Placeholder written by `create_static_file`.
pub const STALE_CSS: &str = "nothing";

/// A throwaway application root on the real filesystem.
pub struct SiteLayout {
    dir: TempDir,
}

impl SiteLayout {
    /// Empty application root.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("creating tempdir"),
        }
    }

    /// Application root with `assets/` and `static/`.
    pub fn new() -> Self {
        let site = Self::empty();
        site.mkdir("assets");
        site.mkdir("static");
        site
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn asset_dir(&self) -> PathBuf {
        self.root().join("assets")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root().join("static")
    }

    /// Host rooted here, in testing mode.
    pub fn host(&self) -> StandaloneHost {
        StandaloneHost::new(self.root())
            .with_debug(false)
            .with_testing(true)
    }

    pub fn mkdir(&self, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).expect("creating directory");
        path
    }

    /// Write `SCSS_CONTENT` to `assets/<rel>`.
    pub fn create_asset_file(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.write_asset_file(rel, SCSS_CONTENT)
    }

    pub fn write_asset_file(&self, rel: impl AsRef<Path>, content: &str) -> PathBuf {
        write_file(&self.asset_dir().join(rel), content)
    }

    /// Write `STALE_CSS` to `static/<rel>`.
    pub fn create_static_file(&self, rel: impl AsRef<Path>) -> PathBuf {
        write_file(&self.static_dir().join(rel), STALE_CSS)
    }
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("creating parent directory");
    }
    fs::write(path, content).expect("writing file");
    path.to_path_buf()
}

/// Back-date `path` to `secs` seconds before now.
pub fn set_mtime_ago(path: &Path, secs: u64) {
    let time = SystemTime::now() - Duration::from_secs(secs);
    let file = fs::File::options()
        .write(true)
        .open(path)
        .expect("opening file to set mtime");
    file.set_modified(time).expect("setting mtime");
}

pub fn mtime(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .expect("reading mtime")
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("reading file")
}

/// In-memory site rooted at `/site` with `assets/` and `static/`.
pub struct MockSite {
    pub fs: MockFileSystem,
}

impl MockSite {
    pub const ROOT: &'static str = "/site";

    pub fn new() -> Self {
        let fs = MockFileSystem::new();
        fs.add_dir("/site/assets");
        fs.add_dir("/site/static");
        Self { fs }
    }

    pub fn asset_dir(&self) -> PathBuf {
        PathBuf::from("/site/assets")
    }

    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from("/site/static")
    }

    pub fn asset(&self, rel: &str) -> PathBuf {
        self.asset_dir().join(rel)
    }

    pub fn output(&self, rel: &str) -> PathBuf {
        self.static_dir().join(rel)
    }

    pub fn add_asset(&self, rel: &str) -> PathBuf {
        let path = self.asset(rel);
        self.fs.add_file(&path, SCSS_CONTENT);
        path
    }

    pub fn add_output(&self, rel: &str) -> PathBuf {
        let path = self.output(rel);
        self.fs.add_file(&path, STALE_CSS);
        path
    }

    /// Refresher over this site with an explicit compiler.
    pub fn refresher(&self, compiler: impl StyleCompiler + 'static) -> ScssRefresher {
        ScssRefresher::new(
            Arc::new(self.fs.clone()),
            Some(self.asset_dir()),
            Some(self.static_dir()),
            vec![self.asset_dir()],
            Arc::new(compiler),
        )
    }
}

impl Default for MockSite {
    fn default() -> Self {
        Self::new()
    }
}
