// src/assets/mod.rs

//! Stylesheet sources and what is known about them.
//!
//! - [`resolve`] picks the source and output directories.
//! - [`discover`] walks the source tree and classifies files.
//! - [`registry`] keeps the known assets and partial timestamps across passes.
//! - [`staleness`] decides whether an asset's output must be rebuilt.
//!
//! Nothing here compiles anything; see [`crate::compile`].

pub mod discover;
pub mod registry;
pub mod resolve;
pub mod staleness;

pub use discover::{
    classify, discover, output_path_for, DiscoveryReport, SourceKind, OUTPUT_EXTENSION,
    PARTIAL_MARKER, STYLESHEET_EXTENSION,
};
pub use registry::{Asset, AssetRegistry};
pub use resolve::{resolve_asset_dir, resolve_load_paths, resolve_static_dir, ResolvedDirs};
pub use staleness::{check_asset, Staleness};
