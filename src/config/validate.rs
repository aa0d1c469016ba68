// src/config/validate.rs

use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, HostConfig, RawConfigFile};
use crate::errors::{RefreshError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::RefreshError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;

        let root = raw.app.root_path.unwrap_or_else(|| PathBuf::from("."));
        let static_folder = root.join(&raw.app.static_folder);
        let config = resolve_host_paths(&root, raw.config);

        Ok(ConfigFile::new_unchecked(
            root,
            static_folder,
            raw.app.debug,
            raw.app.testing,
            config,
        ))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_app_section(cfg)?;
    validate_host_config(&cfg.config)?;
    Ok(())
}

fn validate_app_section(cfg: &RawConfigFile) -> Result<()> {
    if cfg.app.static_folder.as_os_str().is_empty() {
        return Err(RefreshError::ConfigError(
            "[app].static_folder must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_host_config(config: &HostConfig) -> Result<()> {
    // SCSS_OUTPUT_STYLE is strongly typed and validated during
    // deserialization, so we don't need to check it here.

    if let Some(dir) = &config.asset_dir {
        ensure_non_empty("SCSS_ASSET_DIR", dir)?;
    }
    if let Some(dir) = &config.static_dir {
        ensure_non_empty("SCSS_STATIC_DIR", dir)?;
    }
    for (idx, path) in config.load_paths.iter().enumerate() {
        ensure_non_empty(&format!("SCSS_LOAD_PATHS[{idx}]"), path)?;
    }
    Ok(())
}

fn ensure_non_empty(key: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(RefreshError::ConfigError(format!(
            "[config].{key} must not be an empty path"
        )));
    }
    Ok(())
}

/// Anchor relative directory values at the application root.
fn resolve_host_paths(root: &Path, config: HostConfig) -> HostConfig {
    HostConfig {
        asset_dir: config.asset_dir.map(|p| root.join(p)),
        static_dir: config.static_dir.map(|p| root.join(p)),
        load_paths: config.load_paths.into_iter().map(|p| root.join(p)).collect(),
        output_style: config.output_style,
    }
}
