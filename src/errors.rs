// src/errors.rs

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The compiler rejected a stylesheet. The previous output is untouched.
    #[error("Failed to compile {path:?}: {message}")]
    CompileError { path: PathBuf, message: String },

    /// A source registered by an earlier discovery pass no longer exists.
    #[error("Stylesheet source disappeared: {0:?}")]
    SourceMissing(PathBuf),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RefreshError {
    /// The stylesheet source this error is about, if any.
    pub fn source_path(&self) -> Option<&Path> {
        match self {
            RefreshError::CompileError { path, .. } | RefreshError::SourceMissing(path) => {
                Some(path)
            }
            _ => None,
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, RefreshError>;
