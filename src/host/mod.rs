// src/host/mod.rs

//! Integration with the host web framework.
//!
//! A host exposes its layout and configuration through [`Host`] and accepts
//! callbacks to run before each request. [`init_app`] builds a refresher from
//! the host and, when the host runs in debug or testing mode and both
//! directories were found, registers exactly one hook that runs a refresh
//! pass.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{HostConfig, RefreshOptions};
use crate::engine::ScssRefresher;
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

pub mod standalone;

pub use standalone::StandaloneHost;

/// Callback run before each request is dispatched. An error fails that
/// request.
pub type RequestHook = Box<dyn Fn() -> Result<()> + Send + Sync>;

/// What the refresher needs from the host framework.
pub trait Host {
    /// Application root directory.
    fn root_path(&self) -> &Path;

    /// Static folder; joined onto [`Host::root_path`] when relative.
    fn static_folder(&self) -> &Path;

    fn config(&self) -> &HostConfig;

    fn is_debug(&self) -> bool;

    fn is_testing(&self) -> bool;

    /// Register `hook` to run before every request.
    fn before_request(&mut self, hook: RequestHook);
}

/// Build a refresher for `host` and hook it up.
pub fn init_app<H: Host + ?Sized>(host: &mut H, options: RefreshOptions) -> Arc<ScssRefresher> {
    init_app_with_fs(host, options, Arc::new(RealFileSystem))
}

/// [`init_app`] over an arbitrary filesystem.
pub fn init_app_with_fs<H: Host + ?Sized>(
    host: &mut H,
    options: RefreshOptions,
    fs: Arc<dyn FileSystem>,
) -> Arc<ScssRefresher> {
    let refresher = Arc::new(ScssRefresher::from_host_with_fs(&*host, options, fs));

    if host.is_debug() || host.is_testing() {
        set_hooks(host, &refresher);
    } else {
        debug!("host is neither in debug nor testing mode; stylesheets will not be refreshed");
    }

    refresher
}

/// Register the refresh hook. Returns `false` (and registers nothing) when a
/// directory is missing.
fn set_hooks<H: Host + ?Sized>(host: &mut H, refresher: &Arc<ScssRefresher>) -> bool {
    if refresher.asset_dir().is_none() {
        warn!("the asset directory cannot be found; scss-refresh has been disabled");
        return false;
    }
    if refresher.static_dir().is_none() {
        warn!("the static directory cannot be found; scss-refresh has been disabled");
        return false;
    }

    info!(
        asset_dir = ?refresher.asset_dir(),
        static_dir = ?refresher.static_dir(),
        "scss-refresh loaded"
    );

    let refresher = Arc::clone(refresher);
    host.before_request(Box::new(move || refresher.update().map(|_| ())));
    true
}
