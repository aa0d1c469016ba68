// src/engine/runtime.rs

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::errors::{Error, Result};
use crate::host::StandaloneHost;

use super::{RuntimeEvent, RuntimeOptions};

/// Something that can serve one request's worth of before-request work.
///
/// Production code uses [`StandaloneHost`]; tests can provide their own
/// implementation that records or fails on demand.
pub trait RequestDispatcher: Send + Sync + 'static {
    fn dispatch_request(&self) -> Result<()>;
}

impl RequestDispatcher for StandaloneHost {
    fn dispatch_request(&self) -> Result<()> {
        StandaloneHost::dispatch_request(self)
    }
}

/// Counters reported when the runtime stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeSummary {
    pub requests: usize,
    pub failures: usize,
}

/// Drives a [`RequestDispatcher`] in response to `RuntimeEvent`s.
///
/// Each request runs on Tokio's blocking pool so a slow compile never stalls
/// the event loop, but requests are still served one after another.
pub struct Runtime<D: RequestDispatcher> {
    dispatcher: Arc<D>,
    event_rx: mpsc::Receiver<RuntimeEvent>,
    options: RuntimeOptions,
}

impl<D: RequestDispatcher> fmt::Debug for Runtime<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<D: RequestDispatcher> Runtime<D> {
    pub fn new(
        dispatcher: Arc<D>,
        event_rx: mpsc::Receiver<RuntimeEvent>,
        options: RuntimeOptions,
    ) -> Self {
        Self {
            dispatcher,
            event_rx,
            options,
        }
    }

    /// Main event loop.
    ///
    /// - `RequestArrived` runs the dispatcher once.
    /// - `ShutdownRequested` (or a closed channel) stops the loop.
    ///
    /// A failed request is returned immediately when `fail_fast` is set and
    /// only logged otherwise.
    pub async fn run(mut self) -> Result<RuntimeSummary> {
        info!("scss-refresh runtime started");
        let mut summary = RuntimeSummary::default();

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            match event {
                RuntimeEvent::RequestArrived => {
                    summary.requests += 1;
                    if let Err(err) = self.serve_request().await {
                        summary.failures += 1;
                        if self.options.fail_fast {
                            return Err(err);
                        }
                        error!(source = ?err.source_path(), error = %err, "request failed");
                    }
                }
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested; stopping runtime");
                    break;
                }
            }
        }

        info!(
            requests = summary.requests,
            failures = summary.failures,
            "runtime exiting"
        );
        Ok(summary)
    }

    async fn serve_request(&self) -> Result<()> {
        let dispatcher = Arc::clone(&self.dispatcher);
        tokio::task::spawn_blocking(move || dispatcher.dispatch_request())
            .await
            .map_err(Error::from)?
    }
}
