// src/assets/discover.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::assets::registry::{Asset, AssetRegistry};
use crate::assets::resolve::ResolvedDirs;
use crate::errors::Result;
use crate::fs::FileSystem;

/// Extension of stylesheet sources (compared case-sensitively).
pub const STYLESHEET_EXTENSION: &str = "scss";
/// Extension given to compiled outputs.
pub const OUTPUT_EXTENSION: &str = "css";
/// Leading character of a partial's file name.
pub const PARTIAL_MARKER: char = '_';

/// How discovery treats a stylesheet source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Compiled to its own output file.
    Asset,
    /// Only ever included by other stylesheets.
    Partial,
}

/// Classify `path` by its file name alone. `None` for anything that is not
/// a stylesheet source.
pub fn classify(path: &Path) -> Option<SourceKind> {
    if path.extension().and_then(|e| e.to_str()) != Some(STYLESHEET_EXTENSION) {
        return None;
    }
    let name = path.file_name()?.to_str()?;
    if name.starts_with(PARTIAL_MARKER) {
        Some(SourceKind::Partial)
    } else {
        Some(SourceKind::Asset)
    }
}

/// Mirror `src_path` from `asset_dir` onto `static_dir`, swapping the
/// extension. `None` if `src_path` is not under `asset_dir`.
pub fn output_path_for(asset_dir: &Path, static_dir: &Path, src_path: &Path) -> Option<PathBuf> {
    let rel = src_path.strip_prefix(asset_dir).ok()?;
    Some(static_dir.join(rel).with_extension(OUTPUT_EXTENSION))
}

/// What a single discovery pass found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Sources registered as assets during this pass.
    pub new_assets: Vec<PathBuf>,
    /// Partials seen during this pass.
    pub partials_seen: usize,
}

/// Walk `dirs.asset_dir` recursively and merge what is found into `registry`.
///
/// Known assets are left untouched; partial timestamps are always refreshed
/// from disk. Symlinked directories below the asset directory are not
/// entered, so a link back up the tree cannot loop.
pub fn discover(
    fs: &dyn FileSystem,
    dirs: &ResolvedDirs,
    registry: &mut AssetRegistry,
) -> Result<DiscoveryReport> {
    let mut report = DiscoveryReport::default();
    let mut stack = vec![dirs.asset_dir.clone()];

    while let Some(dir) = stack.pop() {
        for path in fs.read_dir(&dir)? {
            if fs.is_dir(&path) {
                if fs.is_symlink(&path) {
                    debug!(dir = ?path, "skipping symlinked directory");
                } else {
                    stack.push(path);
                }
                continue;
            }
            if !fs.is_file(&path) {
                continue;
            }
            match classify(&path) {
                Some(SourceKind::Partial) => {
                    let modified = fs.modified(&path)?;
                    registry.record_partial(&path, modified);
                    report.partials_seen += 1;
                }
                Some(SourceKind::Asset) if !registry.contains_asset(&path) => {
                    let Some(dest_path) =
                        output_path_for(&dirs.asset_dir, &dirs.static_dir, &path)
                    else {
                        continue;
                    };
                    debug!(src = ?path, dest = ?dest_path, "discovered stylesheet");
                    registry.insert_asset(Asset {
                        src_path: path.clone(),
                        dest_path,
                    });
                    report.new_assets.push(path);
                }
                _ => {}
            }
        }
    }

    report.new_assets.sort();
    Ok(report)
}
