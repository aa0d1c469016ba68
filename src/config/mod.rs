// src/config/mod.rs

//! Configuration for the refresher.
//!
//! Responsibilities:
//! - Define the TOML-backed data model of the standalone host (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate and anchor relative paths (`validate.rs`).
//! - The constructor-level override surface (`options.rs`).

pub mod loader;
pub mod model;
pub mod options;
pub mod validate;

pub use loader::{config_root_dir, load_and_validate, load_from_path};
pub use model::{AppSection, ConfigFile, HostConfig, RawConfigFile};
pub use options::RefreshOptions;
