// src/compile/invoker.rs

use tracing::info;

use crate::assets::Asset;
use crate::compile::StyleCompiler;
use crate::errors::{RefreshError, Result};
use crate::fs::FileSystem;

/// Rebuild one asset's output.
///
/// Creates the output's parent directories, reads the source, compiles it and
/// overwrites the output. Any failure is returned as is; the output is only
/// touched once compilation has succeeded.
pub fn compile_asset(
    fs: &dyn FileSystem,
    compiler: &dyn StyleCompiler,
    asset: &Asset,
) -> Result<()> {
    info!(dest = ?asset.dest_path, "refreshing stylesheet");

    if let Some(parent) = asset.dest_path.parent() {
        fs.create_dir_all(parent)?;
    }

    let source = fs.read_to_string(&asset.src_path)?;
    let css = compiler
        .compile(&source)
        .map_err(|e| RefreshError::CompileError {
            path: asset.src_path.clone(),
            message: format!("{e:#}"),
        })?;

    fs.write(&asset.dest_path, css.as_bytes())?;
    Ok(())
}
