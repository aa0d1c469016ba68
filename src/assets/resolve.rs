// src/assets/resolve.rs

//! Directory resolution.
//!
//! Each directory is chosen from a base path, in this order:
//! explicit option > host configuration value > convention. The base is then
//! narrowed to its `scss/` (sources) or `css/` (outputs) child when that
//! child exists. If neither the child nor the base exists the directory is
//! absent and the refresher stays disabled.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::fs::FileSystem;

/// Preferred child of the source base directory.
pub const ASSET_SUBDIR: &str = "scss";
/// Preferred child of the output base directory.
pub const STATIC_SUBDIR: &str = "css";
/// Conventional source base, relative to the application root.
pub const DEFAULT_ASSET_DIR: &str = "assets";

/// Both directories, once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDirs {
    pub asset_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl ResolvedDirs {
    /// `Some` only when both directories were found.
    pub fn from_parts(asset_dir: Option<PathBuf>, static_dir: Option<PathBuf>) -> Option<Self> {
        Some(Self {
            asset_dir: asset_dir?,
            static_dir: static_dir?,
        })
    }
}

/// Resolve the stylesheet source directory.
pub fn resolve_asset_dir(
    fs: &dyn FileSystem,
    explicit: Option<&Path>,
    configured: Option<&Path>,
    root_path: &Path,
) -> Option<PathBuf> {
    let base = explicit
        .or(configured)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root_path.join(DEFAULT_ASSET_DIR));
    narrow(fs, &base, ASSET_SUBDIR)
}

/// Resolve the compiled output directory.
///
/// `static_folder` is joined onto `root_path`, so an absolute folder is used
/// as is.
pub fn resolve_static_dir(
    fs: &dyn FileSystem,
    explicit: Option<&Path>,
    configured: Option<&Path>,
    root_path: &Path,
    static_folder: &Path,
) -> Option<PathBuf> {
    let base = explicit
        .or(configured)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root_path.join(static_folder));
    narrow(fs, &base, STATIC_SUBDIR)
}

fn narrow(fs: &dyn FileSystem, base: &Path, preferred: &str) -> Option<PathBuf> {
    let nested = base.join(preferred);
    if fs.is_dir(&nested) {
        debug!(dir = ?nested, "using nested conventional directory");
        return Some(nested);
    }
    if fs.is_dir(base) {
        debug!(dir = ?base, "using base directory");
        return Some(base.to_path_buf());
    }
    debug!(dir = ?base, "directory not found");
    None
}

/// Search paths handed to the compiler.
///
/// Explicit paths replace the configured ones rather than extending them.
/// The resolved asset directory always comes last so bare `@import "x"`
/// statements find partials next to the assets.
pub fn resolve_load_paths(
    explicit: Option<&[PathBuf]>,
    configured: &[PathBuf],
    asset_dir: Option<&Path>,
) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = explicit.unwrap_or(configured).to_vec();
    if let Some(dir) = asset_dir {
        if !paths.iter().any(|p| p == dir) {
            paths.push(dir.to_path_buf());
        }
    }
    paths
}
