// src/config/options.rs

use std::path::PathBuf;

use crate::types::OutputStyle;

/// Explicit settings handed to the refresher at construction time.
///
/// Every `Some` value takes precedence over the matching host configuration
/// key; `None` defers to the host and then to convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshOptions {
    pub asset_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    /// Replaces `SCSS_LOAD_PATHS` entirely when set.
    pub load_paths: Option<Vec<PathBuf>>,
    pub output_style: Option<OutputStyle>,
}

impl RefreshOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = Some(dir.into());
        self
    }

    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    pub fn load_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.load_paths = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    pub fn output_style(mut self, style: OutputStyle) -> Self {
        self.output_style = Some(style);
        self
    }
}
