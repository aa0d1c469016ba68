// src/engine/refresher.rs

//! The refresh pass.
//!
//! `ScssRefresher` owns the resolved directories, the compiler and the
//! long-lived registry. It does not know when it is invoked: hosts call
//! [`ScssRefresher::update`] before each request, tests call it directly.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

use tracing::debug;

use crate::assets::{
    check_asset, discover, resolve_asset_dir, resolve_load_paths, resolve_static_dir, Asset,
    AssetRegistry, DiscoveryReport, ResolvedDirs,
};
use crate::compile::{compile_asset, GrassCompiler, StyleCompiler};
use crate::config::RefreshOptions;
use crate::engine::locks::OutputLocks;
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::host::Host;

/// Outcome of one [`ScssRefresher::update`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Assets known after discovery.
    pub assets: usize,
    /// Partials known after discovery.
    pub partials: usize,
    /// Outputs rewritten during this pass, in source order.
    pub compiled: Vec<PathBuf>,
}

impl RefreshReport {
    pub fn is_noop(&self) -> bool {
        self.compiled.is_empty()
    }
}

pub struct ScssRefresher {
    fs: Arc<dyn FileSystem>,
    dirs: Option<ResolvedDirs>,
    asset_dir: Option<PathBuf>,
    static_dir: Option<PathBuf>,
    load_paths: Vec<PathBuf>,
    compiler: Arc<dyn StyleCompiler>,
    registry: Mutex<AssetRegistry>,
    locks: OutputLocks,
}

impl std::fmt::Debug for ScssRefresher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScssRefresher")
            .field("asset_dir", &self.asset_dir)
            .field("static_dir", &self.static_dir)
            .field("load_paths", &self.load_paths)
            .finish_non_exhaustive()
    }
}

impl ScssRefresher {
    /// Resolve everything from `host` + `options` against the real filesystem.
    pub fn from_host<H: Host + ?Sized>(host: &H, options: RefreshOptions) -> Self {
        Self::from_host_with_fs(host, options, Arc::new(RealFileSystem))
    }

    /// Same as [`ScssRefresher::from_host`], over an arbitrary filesystem.
    /// The grass compiler resolves imports through the same filesystem.
    pub fn from_host_with_fs<H: Host + ?Sized>(
        host: &H,
        options: RefreshOptions,
        fs: Arc<dyn FileSystem>,
    ) -> Self {
        let config = host.config();

        let asset_dir = resolve_asset_dir(
            fs.as_ref(),
            options.asset_dir.as_deref(),
            config.asset_dir.as_deref(),
            host.root_path(),
        );
        let static_dir = resolve_static_dir(
            fs.as_ref(),
            options.static_dir.as_deref(),
            config.static_dir.as_deref(),
            host.root_path(),
            host.static_folder(),
        );
        let load_paths = resolve_load_paths(
            options.load_paths.as_deref(),
            &config.load_paths,
            asset_dir.as_deref(),
        );
        let style = options
            .output_style
            .or(config.output_style)
            .unwrap_or_default();

        let compiler = Arc::new(GrassCompiler::new(Arc::clone(&fs), load_paths.clone(), style));
        Self::new(fs, asset_dir, static_dir, load_paths, compiler)
    }

    /// Low-level constructor for callers that already resolved everything.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        asset_dir: Option<PathBuf>,
        static_dir: Option<PathBuf>,
        load_paths: Vec<PathBuf>,
        compiler: Arc<dyn StyleCompiler>,
    ) -> Self {
        let dirs = ResolvedDirs::from_parts(asset_dir.clone(), static_dir.clone());
        Self {
            fs,
            dirs,
            asset_dir,
            static_dir,
            load_paths,
            compiler,
            registry: Mutex::new(AssetRegistry::new()),
            locks: OutputLocks::new(),
        }
    }

    pub fn asset_dir(&self) -> Option<&Path> {
        self.asset_dir.as_deref()
    }

    pub fn static_dir(&self) -> Option<&Path> {
        self.static_dir.as_deref()
    }

    /// Search paths forwarded to the compiler.
    pub fn load_paths(&self) -> &[PathBuf] {
        &self.load_paths
    }

    /// Both directories were found.
    pub fn is_enabled(&self) -> bool {
        self.dirs.is_some()
    }

    fn registry(&self) -> MutexGuard<'_, AssetRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the known assets, ordered by source path.
    pub fn assets(&self) -> Vec<Asset> {
        self.registry().assets().cloned().collect()
    }

    pub fn asset(&self, src_path: &Path) -> Option<Asset> {
        self.registry().get(src_path).cloned()
    }

    pub fn contains_asset(&self, src_path: &Path) -> bool {
        self.registry().contains_asset(src_path)
    }

    /// Snapshot of tracked partials and their last seen modification time.
    pub fn partials(&self) -> Vec<(PathBuf, SystemTime)> {
        self.registry()
            .partials()
            .map(|(p, t)| (p.to_path_buf(), t))
            .collect()
    }

    pub fn is_partial(&self, path: &Path) -> bool {
        self.registry().partial_mtime(path).is_some()
    }

    /// Merge newly appeared sources into the registry.
    ///
    /// A disabled refresher discovers nothing.
    pub fn discover(&self) -> Result<DiscoveryReport> {
        let Some(dirs) = &self.dirs else {
            return Ok(DiscoveryReport::default());
        };
        discover(self.fs.as_ref(), dirs, &mut self.registry())
    }

    /// Discover, then rebuild every stale asset.
    ///
    /// The first failure aborts the pass; outputs already rebuilt in this pass
    /// stay rebuilt.
    pub fn update(&self) -> Result<RefreshReport> {
        let Some(dirs) = &self.dirs else {
            debug!("refresher disabled; skipping pass");
            return Ok(RefreshReport::default());
        };

        let (assets, watermark, partials) = {
            let mut registry = self.registry();
            let found = discover(self.fs.as_ref(), dirs, &mut registry)?;
            if !found.new_assets.is_empty() {
                debug!(new = found.new_assets.len(), "registered new stylesheets");
            }
            let assets: Vec<Asset> = registry.assets().cloned().collect();
            (assets, registry.partials_watermark(), registry.partial_count())
        };

        let mut report = RefreshReport {
            assets: assets.len(),
            partials,
            compiled: Vec::new(),
        };

        for asset in &assets {
            if self.refresh_if_stale(asset, watermark)? {
                report.compiled.push(asset.dest_path.clone());
            }
        }

        debug!(
            assets = report.assets,
            compiled = report.compiled.len(),
            "refresh pass finished"
        );
        Ok(report)
    }

    /// Staleness is decided while holding the output's lock, so a concurrent
    /// pass that just rebuilt the file is observed and not repeated.
    fn refresh_if_stale(&self, asset: &Asset, watermark: Option<SystemTime>) -> Result<bool> {
        let lock = self.locks.lock_for(&asset.dest_path);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let staleness = check_asset(self.fs.as_ref(), asset, watermark)?;
        if !staleness.is_stale() {
            return Ok(false);
        }

        debug!(src = ?asset.src_path, ?staleness, "output is stale");
        compile_asset(self.fs.as_ref(), self.compiler.as_ref(), asset)?;
        Ok(true)
    }
}
