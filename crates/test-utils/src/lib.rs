//! Shared helpers for the scss-refresh integration tests.
//!
//! - [`fixtures`]: temp-dir and in-memory site layouts.
//! - [`builders`]: `HostConfig` construction.
//! - [`fake_compiler`]: a `StyleCompiler` that records its inputs.

pub mod builders;
pub mod fake_compiler;
pub mod fixtures;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use scss_refresh::logging::LOG_ENV_VAR;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// The filter comes from `SCSS_REFRESH_LOG` (e.g.
/// `SCSS_REFRESH_LOG=scss_refresh=debug cargo test`), defaulting to `info`.
/// Output is captured and only shown for failing tests.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, failing the test if it takes longer than five seconds.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    tokio::time::timeout(Duration::from_secs(5), f)
        .await
        .expect("runtime did not stop within 5 seconds")
}
