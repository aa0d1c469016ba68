// src/engine/mod.rs

//! Orchestration for scss-refresh.
//!
//! - [`refresher`] holds the synchronous discover-and-rebuild pass. It has no
//!   channels and no Tokio types.
//! - [`locks`] provides the per-output mutual exclusion used by that pass.
//! - [`runtime`] is the async shell used by the standalone binary: it turns
//!   timer ticks and Ctrl-C into requests and shutdown.

/// Events flowing into the runtime from the ticker and signal handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// A request is about to be served; run the before-request hooks.
    RequestArrived,
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

/// Runtime options for the async shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeOptions {
    /// If true, the first failed request stops the runtime with that error
    /// (used for `--once`).
    pub fail_fast: bool,
}

pub mod locks;
pub mod refresher;
pub mod runtime;

pub use locks::OutputLocks;
pub use refresher::{RefreshReport, ScssRefresher};
pub use runtime::{RequestDispatcher, Runtime, RuntimeSummary};
