use std::sync::mpsc::Sender;

use eframe::egui::Context;

use super::messages::{FetchOutcome, FetchRequest};

use crate::{data::SharedProvider, utils::AppInstant};

#[cfg(not(target_arch = "wasm32"))]
use tokio::runtime::Handle;

/// NATIVE ONLY: Runs the fetch on the feed's runtime and sends the tagged outcome back to the UI thread.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_fetch(
    runtime: &Handle,
    provider: SharedProvider,
    req: FetchRequest,
    tx: Sender<FetchOutcome>,
    repaint: Option<Context>,
) {
    runtime.spawn(run_fetch(provider, req, tx, repaint));
}

/// WASM ONLY: Browser event loop is the executor.
#[cfg(target_arch = "wasm32")]
pub fn spawn_fetch(
    provider: SharedProvider,
    req: FetchRequest,
    tx: Sender<FetchOutcome>,
    repaint: Option<Context>,
) {
    wasm_bindgen_futures::spawn_local(run_fetch(provider, req, tx, repaint));
}

async fn run_fetch(
    provider: SharedProvider,
    req: FetchRequest,
    tx: Sender<FetchOutcome>,
    repaint: Option<Context>,
) {
    let start = AppInstant::now();
    let result = provider.fetch_market_data(&req.pair).await;

    let outcome = FetchOutcome {
        seq: req.seq,
        pair: req.pair,
        duration_ms: start.elapsed().as_millis(),
        result,
    };

    // Receiver gone means the app is shutting down.
    if tx.send(outcome).is_ok() {
        if let Some(ctx) = repaint {
            ctx.request_repaint();
        }
    }
}
