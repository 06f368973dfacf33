use tokio::sync::mpsc;

/// Sending half of the coalescing render channel.
///
/// At most one render request is ever pending. Signalling while one is
/// already queued is a no-op and never blocks.
#[derive(Debug, Clone)]
pub struct RenderSignal {
    tx: mpsc::Sender<()>,
}

impl RenderSignal {
    /// Requests a render, returning `false` if the request was coalesced
    /// into one already pending (or the publisher is gone).
    pub fn notify(&self) -> bool {
        self.tx.try_send(()).is_ok()
    }
}

#[derive(Debug)]
pub struct RenderRequests {
    rx: mpsc::Receiver<()>,
}

impl RenderRequests {
    /// Waits for the next pending request. Returns `false` once every
    /// [`RenderSignal`] has been dropped and nothing is pending.
    pub async fn recv(&mut self) -> bool {
        self.rx.recv().await.is_some()
    }
}

pub fn render_channel() -> (RenderSignal, RenderRequests) {
    let (tx, rx) = mpsc::channel(1);
    (RenderSignal { tx }, RenderRequests { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn burst_of_signals_leaves_one_pending_request() {
        let (signal, mut requests) = render_channel();

        let accepted = (0..50).filter(|_| signal.notify()).count();
        assert_eq!(accepted, 1);

        assert!(requests.recv().await);
        drop(signal);
        assert!(!requests.recv().await);
    }

    #[tokio::test]
    async fn signal_is_accepted_again_after_request_is_taken() {
        let (signal, mut requests) = render_channel();
        assert!(signal.notify());
        assert!(!signal.notify());
        assert!(requests.recv().await);
        assert!(signal.notify());
    }

    #[tokio::test]
    async fn signal_after_publisher_is_gone_does_not_block() {
        let (signal, requests) = render_channel();
        drop(requests);
        assert!(!signal.notify());
    }
}
