// src/fs/mod.rs

//! Filesystem seam.
//!
//! Discovery, staleness checks and the compiler's import resolution all go
//! through [`FileSystem`], so the whole refresh pass can run against
//! [`mock::MockFileSystem`] and its logical clock.

use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};

pub mod mock;

pub trait FileSystem: Send + Sync + Debug {
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Create or truncate `path`. Parent directories must already exist.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// `mkdir -p`.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;

    /// `path` itself is a symbolic link, whatever it points to.
    fn is_symlink(&self, path: &Path) -> bool;

    fn modified(&self, path: &Path) -> Result<SystemTime>;

    /// Full paths of the entries of `path`, in no particular order.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Modification time, or `None` when nothing exists at `path`.
    fn modified_if_exists(&self, path: &Path) -> Result<Option<SystemTime>> {
        if self.exists(path) {
            self.modified(path).map(Some)
        } else {
            Ok(None)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("reading stylesheet {:?}", path))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).with_context(|| format!("writing output {:?}", path))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).with_context(|| format!("creating output dir {:?}", path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
    }

    fn modified(&self, path: &Path) -> Result<SystemTime> {
        fs::metadata(path)
            .and_then(|meta| meta.modified())
            .with_context(|| format!("reading mtime of {:?}", path))
    }

    fn modified_if_exists(&self, path: &Path) -> Result<Option<SystemTime>> {
        match fs::metadata(path) {
            Ok(meta) => meta
                .modified()
                .map(Some)
                .with_context(|| format!("reading mtime of {:?}", path)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading metadata of {:?}", path)),
        }
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        fs::read_dir(path)
            .and_then(|entries| entries.map(|e| e.map(|e| e.path())).collect())
            .with_context(|| format!("listing {:?}", path))
    }
}
