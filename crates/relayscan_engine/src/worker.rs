use std::sync::Arc;

use relayscan_core::{Outcome, StatusTable};
use scan_logging::{scan_info, scan_warn};
use tokio_util::sync::CancellationToken;

use crate::{Listener, RenderSignal};

/// Everything a worker shares with the rest of the run.
#[derive(Debug, Clone)]
pub struct WorkerContext {
    pub target: Arc<str>,
    pub cancel: CancellationToken,
    pub table: Arc<StatusTable>,
    pub signal: RenderSignal,
}

/// Runs one host to completion, records its outcome in slot `index` and
/// requests a render.
pub async fn run_worker(
    listener: &dyn Listener,
    index: usize,
    host: &str,
    ctx: &WorkerContext,
) -> Outcome {
    let outcome = listener.listen(host, &ctx.target, &ctx.cancel).await;
    record(ctx, index, host, outcome.clone());
    outcome
}

/// The table write happens before the notification.
pub(crate) fn record(ctx: &WorkerContext, index: usize, host: &str, outcome: Outcome) {
    scan_info!("{}: {}", host, outcome);
    if let Err(err) = ctx.table.set(index, outcome) {
        scan_warn!("dropping status update for {}: {}", host, err);
    }
    ctx.signal.notify();
}
