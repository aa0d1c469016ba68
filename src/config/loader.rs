// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Parse `ScssRefresh.toml` without anchoring or validating any path.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    Ok(toml::from_str(&contents)?)
}

/// Load a configuration file from path, anchor it and run basic validation.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Anchors `[app].root_path` at the config file's directory.
/// - Rejects empty paths.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let mut raw_config = load_from_path(path)?;

    let base = config_root_dir(path);
    raw_config.app.root_path = Some(match raw_config.app.root_path.take() {
        Some(root) => base.join(root),
        None => base,
    });

    ConfigFile::try_from(raw_config)
}

/// Directory that relative paths in a config file are anchored to.
///
/// - If the config path has a non-empty parent (e.g. "site/ScssRefresh.toml"),
///   we use that directory.
/// - If it's just a bare filename (parent = ""), we fall back to the current
///   working directory.
pub fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
