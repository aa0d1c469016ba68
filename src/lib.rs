// src/lib.rs

pub mod assets;
pub mod cli;
pub mod compile;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod host;
pub mod logging;
pub mod types;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::{load_and_validate, RefreshOptions};
use crate::engine::{Runtime, RuntimeEvent, RuntimeOptions, ScssRefresher};
use crate::host::{init_app, StandaloneHost};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the standalone host and its refresh hook
/// - the runtime, fed by an interval ticker (or a single request in `--once`)
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    let mut host = StandaloneHost::from_config(&cfg);
    let refresher = init_app(&mut host, options_from_args(&args));

    if args.dry_run {
        print_dry_run(&refresher)?;
        return Ok(());
    }

    if host.hook_count() == 0 {
        warn!("no refresh hook registered; nothing to do");
        return Ok(());
    }

    let host = Arc::new(host);
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(4);

    if args.once {
        rt_tx.send(RuntimeEvent::RequestArrived).await?;
        rt_tx.send(RuntimeEvent::ShutdownRequested).await?;
    } else {
        spawn_ticker(rt_tx.clone(), Duration::from_millis(args.interval_ms));

        // Ctrl-C → graceful shutdown.
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }
    drop(rt_tx);

    let options = RuntimeOptions {
        fail_fast: args.once,
    };
    let summary = Runtime::new(host, rt_rx, options).run().await?;
    debug!(?summary, "runtime finished");
    Ok(())
}

/// Explicit overrides from the command line. An empty `--load-path` list
/// leaves `SCSS_LOAD_PATHS` in charge.
fn options_from_args(args: &CliArgs) -> RefreshOptions {
    RefreshOptions {
        asset_dir: args.asset_dir.clone(),
        static_dir: args.static_dir.clone(),
        load_paths: (!args.load_paths.is_empty()).then(|| args.load_paths.clone()),
        output_style: args.output_style,
    }
}

/// Emit `RequestArrived` every `period` until the runtime goes away.
fn spawn_ticker(tx: mpsc::Sender<RuntimeEvent>, period: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!(?period, "polling for stylesheet changes");
        loop {
            ticker.tick().await;
            if tx.send(RuntimeEvent::RequestArrived).await.is_err() {
                break;
            }
        }
    });
}

/// Simple dry-run output: resolved directories and discovered stylesheets.
fn print_dry_run(refresher: &ScssRefresher) -> Result<()> {
    println!("scss-refresh dry-run");
    println!("  asset_dir  = {:?}", refresher.asset_dir());
    println!("  static_dir = {:?}", refresher.static_dir());
    println!("  load_paths = {:?}", refresher.load_paths());
    println!();

    if !refresher.is_enabled() {
        println!("disabled: a directory could not be found");
        return Ok(());
    }

    refresher.discover()?;

    let assets = refresher.assets();
    println!("assets ({}):", assets.len());
    for asset in &assets {
        println!("  - {}", asset.src_path.display());
        println!("      -> {}", asset.dest_path.display());
    }

    let partials = refresher.partials();
    println!("partials ({}):", partials.len());
    for (path, _) in &partials {
        println!("  - {}", path.display());
    }

    debug!("dry-run complete (nothing compiled)");
    Ok(())
}
