// src/assets/registry.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A compilable stylesheet and the file it compiles to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub src_path: PathBuf,
    pub dest_path: PathBuf,
}

/// Everything discovery has seen so far.
///
/// Entries are only ever added: a source deleted from disk keeps its asset
/// entry, and a deleted partial keeps its last recorded time.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    assets: BTreeMap<PathBuf, Asset>,
    partials: BTreeMap<PathBuf, SystemTime>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `asset` unless its source is already known.
    ///
    /// Returns `true` if the asset was new.
    pub fn insert_asset(&mut self, asset: Asset) -> bool {
        if self.assets.contains_key(&asset.src_path) {
            return false;
        }
        self.assets.insert(asset.src_path.clone(), asset);
        true
    }

    pub fn contains_asset(&self, src_path: &Path) -> bool {
        self.assets.contains_key(src_path)
    }

    pub fn get(&self, src_path: &Path) -> Option<&Asset> {
        self.assets.get(src_path)
    }

    /// Known assets, ordered by source path.
    pub fn assets(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Record the latest on-disk modification time of a partial.
    pub fn record_partial(&mut self, path: &Path, modified: SystemTime) {
        self.partials.insert(path.to_path_buf(), modified);
    }

    pub fn partial_mtime(&self, path: &Path) -> Option<SystemTime> {
        self.partials.get(path).copied()
    }

    pub fn partials(&self) -> impl Iterator<Item = (&Path, SystemTime)> {
        self.partials.iter().map(|(p, t)| (p.as_path(), *t))
    }

    pub fn partial_count(&self) -> usize {
        self.partials.len()
    }

    /// Most recent modification time across all partials, `None` if there
    /// are none.
    pub fn partials_watermark(&self) -> Option<SystemTime> {
        self.partials.values().copied().max()
    }
}
