use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use relayscan_core::{HostState, HostStatus, Outcome, ScanConfig, StatusTable};
use scan_logging::{scan_debug, scan_error, scan_info};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::worker::record;
use crate::{
    render_channel, run_worker, EngineError, Listener, Publisher, RenderSink, WebSocketListener,
    WorkerContext,
};

/// Final state of every host once all workers have joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub statuses: Vec<HostStatus>,
}

impl RunReport {
    pub fn count(&self, state: HostState) -> usize {
        self.statuses
            .iter()
            .filter(|status| status.state == state)
            .count()
    }

    pub fn all_resolved(&self) -> bool {
        self.statuses.iter().all(|status| status.state.is_terminal())
    }
}

/// Owns one run: the cancellation token, the deadline, the workers and the
/// publisher.
pub struct Controller {
    config: ScanConfig,
    listener: Arc<dyn Listener>,
}

impl Controller {
    pub fn new(config: ScanConfig) -> Self {
        Self::with_listener(config, Arc::new(WebSocketListener::new()))
    }

    pub fn with_listener(config: ScanConfig, listener: Arc<dyn Listener>) -> Self {
        Self { config, listener }
    }

    /// Runs every host to a terminal state and renders the final block.
    ///
    /// `interrupt` resolving has the same effect as the deadline expiring.
    /// Per-host failures never fail the run; only a broken sink or publisher
    /// does.
    pub async fn run<S, F>(self, sink: S, interrupt: F) -> Result<RunReport, EngineError>
    where
        S: RenderSink,
        F: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        spawn_deadline(cancel.clone(), self.config.timeout());
        spawn_interrupt_watcher(cancel.clone(), interrupt);

        let table = Arc::new(StatusTable::new(self.config.hosts()));
        let (signal, requests) = render_channel();
        let publisher = tokio::spawn(Publisher::new(Arc::clone(&table), sink).run(requests));
        signal.notify();

        let ctx = WorkerContext {
            target: Arc::from(self.config.target()),
            cancel: cancel.clone(),
            table: Arc::clone(&table),
            signal,
        };

        let workers: Vec<(usize, String, JoinHandle<Outcome>)> = self
            .config
            .hosts()
            .hosts()
            .iter()
            .enumerate()
            .map(|(index, host)| {
                let listener = Arc::clone(&self.listener);
                let ctx = ctx.clone();
                let worker_host = host.clone();
                let handle = tokio::spawn(async move {
                    run_worker(listener.as_ref(), index, &worker_host, &ctx).await
                });
                (index, host.clone(), handle)
            })
            .collect();
        scan_info!("started {} workers", workers.len());

        for (index, host, handle) in workers {
            if let Err(err) = handle.await {
                scan_error!("worker for {} failed: {}", host, err);
                record(
                    &ctx,
                    index,
                    &host,
                    Outcome::ConnectionError(format!("worker failed: {err}")),
                );
            }
        }
        scan_debug!("all workers joined");

        // Stops the watchers; every worker has already resolved.
        cancel.cancel();
        drop(ctx);

        let mut publisher = publisher
            .await
            .map_err(|err| EngineError::Publisher(err.to_string()))?;
        publisher.render_now()?;

        Ok(RunReport {
            statuses: table.snapshot(),
        })
    }
}

fn spawn_deadline(cancel: CancellationToken, timeout: Duration) {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = tokio::time::sleep(timeout) => {
                scan_info!("deadline of {:?} reached, cancelling", timeout);
                cancel.cancel();
            }
        }
    });
}

fn spawn_interrupt_watcher<F>(cancel: CancellationToken, interrupt: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = interrupt => {
                scan_info!("interrupt received, cancelling");
                cancel.cancel();
            }
        }
    });
}
