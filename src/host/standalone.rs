// src/host/standalone.rs

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{ConfigFile, HostConfig};
use crate::errors::Result;
use crate::host::{Host, RequestHook};

/// Minimal host used by the `scss-refresh` binary.
///
/// It has no HTTP server: every call to [`StandaloneHost::dispatch_request`]
/// stands for one incoming request and runs the registered hooks in order.
pub struct StandaloneHost {
    root_path: PathBuf,
    static_folder: PathBuf,
    config: HostConfig,
    debug: bool,
    testing: bool,
    hooks: Vec<RequestHook>,
}

impl fmt::Debug for StandaloneHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandaloneHost")
            .field("root_path", &self.root_path)
            .field("static_folder", &self.static_folder)
            .field("debug", &self.debug)
            .field("testing", &self.testing)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl StandaloneHost {
    /// Host rooted at `root_path` with a `static` folder, in debug mode.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            static_folder: PathBuf::from("static"),
            config: HostConfig::default(),
            debug: true,
            testing: false,
            hooks: Vec::new(),
        }
    }

    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self {
            root_path: cfg.root_path.clone(),
            static_folder: cfg.static_folder.clone(),
            config: cfg.config.clone(),
            debug: cfg.debug,
            testing: cfg.testing,
            hooks: Vec::new(),
        }
    }

    pub fn with_static_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.static_folder = folder.into();
        self
    }

    pub fn with_config(mut self, config: HostConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_testing(mut self, testing: bool) -> Self {
        self.testing = testing;
        self
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    /// Run every before-request hook. The first error fails the request.
    pub fn dispatch_request(&self) -> Result<()> {
        debug!(hooks = self.hooks.len(), "dispatching request");
        for hook in &self.hooks {
            hook()?;
        }
        Ok(())
    }
}

impl Host for StandaloneHost {
    fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn static_folder(&self) -> &Path {
        &self.static_folder
    }

    fn config(&self) -> &HostConfig {
        &self.config
    }

    fn is_debug(&self) -> bool {
        self.debug
    }

    fn is_testing(&self) -> bool {
        self.testing
    }

    fn before_request(&mut self, hook: RequestHook) {
        self.hooks.push(hook);
    }
}
