// src/compile/mod.rs

//! Compilation layer.
//!
//! The refresher talks to a [`StyleCompiler`] instead of a concrete SCSS
//! implementation, so tests can swap in a recording fake while production
//! uses [`GrassCompiler`].
//!
//! - [`sass`] wraps the `grass` crate and adapts our [`crate::fs::FileSystem`]
//!   to the compiler's own import resolution.
//! - [`invoker`] turns one stale asset into a written output file.

pub mod sass;
pub mod invoker;

use std::fmt::Debug;

use anyhow::Result;

pub use sass::{GrassCompiler, GrassFs};
pub use invoker::compile_asset;

/// Translates stylesheet source text into CSS.
///
/// Search paths and output style are fixed when the implementation is
/// constructed, before the first compilation.
pub trait StyleCompiler: Send + Sync + Debug {
    fn compile(&self, source: &str) -> Result<String>;
}
