// tests/runtime.rs

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::mpsc;

use scss_refresh::config::RefreshOptions;
use scss_refresh::engine::{
    RequestDispatcher, Runtime, RuntimeEvent, RuntimeOptions, RuntimeSummary,
};
use scss_refresh::errors::{RefreshError, Result as RefreshResult};
use scss_refresh::host::init_app;
use scss_refresh_test_utils::fixtures::SiteLayout;
use scss_refresh_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

/// Dispatcher that counts requests and fails every `fail_every`-th one.
#[derive(Default)]
struct CountingDispatcher {
    served: AtomicUsize,
    fail_every: Option<usize>,
}

impl RequestDispatcher for CountingDispatcher {
    fn dispatch_request(&self) -> RefreshResult<()> {
        let n = self.served.fetch_add(1, Ordering::SeqCst) + 1;
        match self.fail_every {
            Some(k) if n % k == 0 => Err(RefreshError::Other(anyhow!("request {n} failed"))),
            _ => Ok(()),
        }
    }
}

async fn send_all(tx: &mpsc::Sender<RuntimeEvent>, events: &[RuntimeEvent]) -> TestResult {
    for event in events {
        tx.send(*event).await?;
    }
    Ok(())
}

#[tokio::test]
async fn serves_requests_until_shutdown() -> TestResult {
    init_tracing();
    let dispatcher = Arc::new(CountingDispatcher::default());
    let (tx, rx) = mpsc::channel(8);

    send_all(
        &tx,
        &[
            RuntimeEvent::RequestArrived,
            RuntimeEvent::RequestArrived,
            RuntimeEvent::ShutdownRequested,
            RuntimeEvent::RequestArrived,
        ],
    )
    .await?;

    let runtime = Runtime::new(Arc::clone(&dispatcher), rx, RuntimeOptions::default());
    let summary = with_timeout(runtime.run()).await?;

    assert_eq!(
        summary,
        RuntimeSummary {
            requests: 2,
            failures: 0
        }
    );
    assert_eq!(dispatcher.served.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn closed_channel_stops_the_runtime() -> TestResult {
    init_tracing();
    let dispatcher = Arc::new(CountingDispatcher::default());
    let (tx, rx) = mpsc::channel(8);

    send_all(&tx, &[RuntimeEvent::RequestArrived]).await?;
    drop(tx);

    let summary = with_timeout(Runtime::new(dispatcher, rx, RuntimeOptions::default()).run())
        .await?;
    assert_eq!(summary.requests, 1);
    Ok(())
}

#[tokio::test]
async fn failures_are_counted_when_not_fail_fast() -> TestResult {
    init_tracing();
    let dispatcher = Arc::new(CountingDispatcher {
        fail_every: Some(2),
        ..Default::default()
    });
    let (tx, rx) = mpsc::channel(8);

    send_all(&tx, &[RuntimeEvent::RequestArrived; 4]).await?;
    drop(tx);

    let summary = with_timeout(Runtime::new(dispatcher, rx, RuntimeOptions::default()).run())
        .await?;
    assert_eq!(
        summary,
        RuntimeSummary {
            requests: 4,
            failures: 2
        }
    );
    Ok(())
}

#[tokio::test]
async fn fail_fast_returns_the_first_error() -> TestResult {
    init_tracing();
    let dispatcher = Arc::new(CountingDispatcher {
        fail_every: Some(1),
        ..Default::default()
    });
    let (tx, rx) = mpsc::channel(8);

    send_all(&tx, &[RuntimeEvent::RequestArrived; 3]).await?;
    drop(tx);

    let result = with_timeout(
        Runtime::new(Arc::clone(&dispatcher), rx, RuntimeOptions { fail_fast: true }).run(),
    )
    .await;

    match result {
        Err(RefreshError::Other(e)) => assert!(e.to_string().contains("request 1 failed")),
        other => panic!("Expected the first request's error, got: {:?}", other),
    }
    assert_eq!(dispatcher.served.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn standalone_host_compiles_on_request() -> TestResult {
    init_tracing();
    let site = SiteLayout::new();
    site.create_asset_file("app.scss");

    let mut host = site.host();
    init_app(&mut host, RefreshOptions::new());
    let host = Arc::new(host);

    let (tx, rx) = mpsc::channel(4);
    send_all(
        &tx,
        &[RuntimeEvent::RequestArrived, RuntimeEvent::ShutdownRequested],
    )
    .await?;

    let summary =
        with_timeout(Runtime::new(host, rx, RuntimeOptions { fail_fast: true }).run()).await?;

    assert_eq!(summary.requests, 1);
    assert!(site.static_dir().join("app.css").is_file());
    Ok(())
}
