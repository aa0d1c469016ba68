// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::OutputStyle;

/// Top-level configuration of the standalone host, as read from a TOML file.
///
/// ```toml
/// [app]
/// root_path = "."
/// static_folder = "static"
/// debug = true
///
/// [config]
/// SCSS_ASSET_DIR = "assets/scss"
/// SCSS_STATIC_DIR = "static/css"
/// SCSS_LOAD_PATHS = ["vendor/scss"]
/// SCSS_OUTPUT_STYLE = "compressed"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Application layout and mode from `[app]`.
    #[serde(default)]
    pub app: AppSection,

    /// Host configuration values from `[config]`.
    #[serde(default)]
    pub config: HostConfig,
}

/// `[app]` section: what a web framework would know about the application.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
    /// Application root. Relative values are taken from the config file's
    /// directory; `None` means the config file's directory itself.
    #[serde(default)]
    pub root_path: Option<PathBuf>,

    /// Name (or path) of the static folder, relative to `root_path`.
    #[serde(default = "default_static_folder")]
    pub static_folder: PathBuf,

    #[serde(default = "default_debug")]
    pub debug: bool,

    #[serde(default)]
    pub testing: bool,
}

fn default_static_folder() -> PathBuf {
    PathBuf::from("static")
}

fn default_debug() -> bool {
    true
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            root_path: None,
            static_folder: default_static_folder(),
            debug: default_debug(),
            testing: false,
        }
    }
}

/// Host configuration keys understood by the refresher.
///
/// Key names follow the host framework's upper-case convention. Any other
/// key in the table is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostConfig {
    /// Overrides the conventional `<root>/assets` source directory.
    #[serde(rename = "SCSS_ASSET_DIR", default)]
    pub asset_dir: Option<PathBuf>,

    /// Overrides the conventional `<root>/<static_folder>` output directory.
    #[serde(rename = "SCSS_STATIC_DIR", default)]
    pub static_dir: Option<PathBuf>,

    /// Extra directories the compiler searches when resolving imports.
    #[serde(rename = "SCSS_LOAD_PATHS", default)]
    pub load_paths: Vec<PathBuf>,

    #[serde(rename = "SCSS_OUTPUT_STYLE", default)]
    pub output_style: Option<OutputStyle>,
}

/// Validated configuration with every path resolved against `root_path`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub root_path: PathBuf,
    pub static_folder: PathBuf,
    pub debug: bool,
    pub testing: bool,
    pub config: HostConfig,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        root_path: PathBuf,
        static_folder: PathBuf,
        debug: bool,
        testing: bool,
        config: HostConfig,
    ) -> Self {
        Self {
            root_path,
            static_folder,
            debug,
            testing,
            config,
        }
    }
}
