use std::time::Duration;

use futures_util::{Stream, StreamExt};
use relayscan_core::Outcome;
use scan_logging::{scan_debug, scan_trace};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_util::sync::CancellationToken;

/// Path appended to every host to reach its repository event stream.
pub const SUBSCRIBE_PATH: &str = "/xrpc/com.atproto.sync.subscribeRepos";

/// Upper bound on the closing handshake once a listener is done.
const CLOSE_GRACE: Duration = Duration::from_secs(1);

/// Connects to one host and watches its stream for the target.
///
/// Implementations resolve to exactly one [`Outcome`]: cancellation before a
/// match is [`Outcome::NotFound`], never an error.
#[async_trait::async_trait]
pub trait Listener: Send + Sync {
    async fn listen(&self, host: &str, target: &str, cancel: &CancellationToken) -> Outcome;
}

pub fn endpoint_url(host: &str) -> String {
    format!("{host}{SUBSCRIBE_PATH}")
}

/// Byte-level substring test. An empty target matches everything.
pub fn contains_target(payload: &[u8], target: &[u8]) -> bool {
    target.is_empty() || payload.windows(target.len()).any(|window| window == target)
}

#[derive(Debug, Clone, Default)]
pub struct WebSocketListener;

impl WebSocketListener {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Listener for WebSocketListener {
    async fn listen(&self, host: &str, target: &str, cancel: &CancellationToken) -> Outcome {
        let url = endpoint_url(host);
        scan_debug!("dialing {}", url);

        let dial = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                scan_debug!("dial to {} abandoned: cancelled", url);
                return Outcome::NotFound;
            }
            dial = connect_async(url.as_str()) => dial,
        };
        let mut stream = match dial {
            Ok((stream, _response)) => stream,
            Err(err) => return Outcome::ConnectionError(err.to_string()),
        };
        scan_debug!("connected to {}", url);

        let outcome = receive_until_match(&mut stream, target.as_bytes(), cancel).await;

        if tokio::time::timeout(CLOSE_GRACE, stream.close(None))
            .await
            .is_err()
        {
            scan_debug!("close handshake with {} timed out", url);
        }
        outcome
    }
}

async fn receive_until_match<S>(
    stream: &mut S,
    target: &[u8],
    cancel: &CancellationToken,
) -> Outcome
where
    S: Stream<Item = Result<Message, WsError>> + Unpin,
{
    loop {
        if cancel.is_cancelled() {
            return Outcome::NotFound;
        }
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Outcome::NotFound,
            next = stream.next() => next,
        };
        match next {
            Some(Ok(Message::Text(text))) => {
                if contains_target(text.as_bytes(), target) {
                    return Outcome::Found;
                }
            }
            Some(Ok(Message::Binary(data))) => {
                if contains_target(&data, target) {
                    return Outcome::Found;
                }
            }
            Some(Ok(Message::Close(frame))) => {
                let cause = match frame {
                    Some(frame) => format!(
                        "closed by peer (code {}): {}",
                        u16::from(frame.code),
                        frame.reason
                    ),
                    None => "closed by peer".to_string(),
                };
                return Outcome::ConnectionError(cause);
            }
            Some(Ok(other)) => scan_trace!("ignoring control frame ({} bytes)", other.len()),
            Some(Err(err)) => return Outcome::ConnectionError(err.to_string()),
            None => return Outcome::ConnectionError("connection closed".to_string()),
        }
    }
}
