#![allow(dead_code)]

use std::path::PathBuf;

use scss_refresh::config::HostConfig;
use scss_refresh::types::OutputStyle;

/// Builder for `HostConfig` to simplify test setup.
pub struct HostConfigBuilder {
    config: HostConfig,
}

impl HostConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: HostConfig::default(),
        }
    }

    pub fn asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.asset_dir = Some(dir.into());
        self
    }

    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.static_dir = Some(dir.into());
        self
    }

    pub fn load_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.load_paths.push(dir.into());
        self
    }

    pub fn output_style(mut self, style: OutputStyle) -> Self {
        self.config.output_style = Some(style);
        self
    }

    pub fn build(self) -> HostConfig {
        self.config
    }
}

impl Default for HostConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
