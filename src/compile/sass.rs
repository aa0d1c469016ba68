// src/compile/sass.rs

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::compile::StyleCompiler;
use crate::fs::FileSystem;
use crate::types::OutputStyle;

/// Adapter that lets grass resolve `@import`/`@use` through a [`FileSystem`].
#[derive(Debug)]
pub struct GrassFs<'a> {
    inner: &'a dyn FileSystem,
}

impl<'a> GrassFs<'a> {
    pub fn new(inner: &'a dyn FileSystem) -> Self {
        Self { inner }
    }
}

impl grass::Fs for GrassFs<'_> {
    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.inner
            .read_to_string(path)
            .map(String::into_bytes)
            .map_err(|e| io::Error::new(io_kind(&e), format!("{e:#}")))
    }
}

/// Kind of the `io::Error` behind `err`, or `Other` when there is none.
fn io_kind(err: &anyhow::Error) -> io::ErrorKind {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<io::Error>())
        .map_or(io::ErrorKind::Other, io::Error::kind)
}

/// SCSS compiler backed by the pure-Rust `grass` crate.
#[derive(Debug, Clone)]
pub struct GrassCompiler {
    fs: Arc<dyn FileSystem>,
    load_paths: Vec<PathBuf>,
    style: OutputStyle,
}

impl GrassCompiler {
    pub fn new(fs: Arc<dyn FileSystem>, load_paths: Vec<PathBuf>, style: OutputStyle) -> Self {
        Self {
            fs,
            load_paths,
            style,
        }
    }

    pub fn load_paths(&self) -> &[PathBuf] {
        &self.load_paths
    }

    pub fn style(&self) -> OutputStyle {
        self.style
    }
}

impl StyleCompiler for GrassCompiler {
    fn compile(&self, source: &str) -> Result<String> {
        let fs = GrassFs::new(self.fs.as_ref());
        let options = grass::Options::default()
            .fs(&fs)
            .load_paths(self.load_paths.as_slice())
            .style(self.style.into());

        grass::from_string(source.to_owned(), &options).map_err(|e| anyhow!("{e}"))
    }
}
