// src/assets/staleness.rs

//! Staleness rule.
//!
//! An output is stale when it is missing, older than its own source, or older
//! than the most recently modified partial. There is no include graph: any
//! partial newer than an output invalidates that output.

use std::time::SystemTime;

use crate::assets::registry::Asset;
use crate::errors::{RefreshError, Result};
use crate::fs::FileSystem;

/// Result of comparing an asset's timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    Fresh,
    /// The output file does not exist yet.
    MissingOutput,
    /// The source is newer than the output.
    SourceChanged,
    /// Some partial is newer than the output.
    PartialChanged,
}

impl Staleness {
    /// Pure decision over the three timestamps. `None` stands for
    /// "infinitely old".
    pub fn evaluate(
        source: SystemTime,
        output: Option<SystemTime>,
        partials: Option<SystemTime>,
    ) -> Self {
        match output {
            None => Staleness::MissingOutput,
            Some(out) if source > out => Staleness::SourceChanged,
            Some(out) if partials.is_some_and(|p| p > out) => Staleness::PartialChanged,
            Some(_) => Staleness::Fresh,
        }
    }

    pub fn is_stale(self) -> bool {
        !matches!(self, Staleness::Fresh)
    }
}

/// Read the asset's timestamps from `fs` and evaluate them against the
/// partial watermark.
pub fn check_asset(
    fs: &dyn FileSystem,
    asset: &Asset,
    partials_watermark: Option<SystemTime>,
) -> Result<Staleness> {
    if !fs.is_file(&asset.src_path) {
        return Err(RefreshError::SourceMissing(asset.src_path.clone()));
    }
    let source = fs.modified(&asset.src_path)?;
    let output = fs.modified_if_exists(&asset.dest_path)?;
    Ok(Staleness::evaluate(source, output, partials_watermark))
}
