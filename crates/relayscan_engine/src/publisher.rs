use std::sync::Arc;

use relayscan_core::{render_lines, StatusTable};
use scan_logging::{scan_trace, scan_warn};

use crate::{EngineError, RenderRequests, RenderSink};

/// Turns status table snapshots into rendered blocks on a sink.
pub struct Publisher<S> {
    table: Arc<StatusTable>,
    sink: S,
    renders: usize,
}

impl<S: RenderSink> Publisher<S> {
    pub fn new(table: Arc<StatusTable>, sink: S) -> Self {
        Self {
            table,
            sink,
            renders: 0,
        }
    }

    /// Snapshots the table and writes one block. The table lock is released
    /// before the sink is touched.
    pub fn render_now(&mut self) -> Result<(), EngineError> {
        let lines = render_lines(&self.table.snapshot());
        self.sink.render(&lines)?;
        self.renders += 1;
        scan_trace!("rendered block #{} ({} hosts)", self.renders, lines.len());
        Ok(())
    }

    /// Renders once per pending request until every signal is dropped, then
    /// hands the publisher back for the final render.
    pub async fn run(mut self, mut requests: RenderRequests) -> Self {
        while requests.recv().await {
            if let Err(err) = self.render_now() {
                scan_warn!("status render failed: {}", err);
            }
        }
        self
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
