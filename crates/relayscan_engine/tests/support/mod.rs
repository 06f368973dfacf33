#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use relayscan_engine::RenderSink;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::accept_hdr_async;
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tokio_tungstenite::tungstenite::Message;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scan_logging::initialize_for_tests);
}

/// What a test relay does with each accepted subscriber.
#[derive(Debug, Clone)]
pub enum Behaviour {
    /// Cycles through the messages every few milliseconds until the client
    /// goes away.
    Stream(Vec<Message>),
    /// Sends the messages once, then closes the connection.
    SendThenClose(Vec<Message>),
}

pub struct Relay {
    pub base_url: String,
    paths: Arc<Mutex<Vec<String>>>,
}

impl Relay {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

pub async fn spawn_relay(behaviour: Behaviour) -> Relay {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("ws://{}", listener.local_addr().unwrap());
    let paths = Arc::new(Mutex::new(Vec::new()));

    let accepted_paths = Arc::clone(&paths);
    tokio::spawn(async move {
        while let Ok((tcp, _)) = listener.accept().await {
            tokio::spawn(serve(tcp, behaviour.clone(), Arc::clone(&accepted_paths)));
        }
    });

    Relay { base_url, paths }
}

async fn serve(tcp: TcpStream, behaviour: Behaviour, paths: Arc<Mutex<Vec<String>>>) {
    let record_path = |request: &Request, response: Response| -> Result<Response, ErrorResponse> {
        paths.lock().unwrap().push(request.uri().path().to_string());
        Ok(response)
    };
    let Ok(ws) = accept_hdr_async(tcp, record_path).await else {
        return;
    };
    let (mut outgoing, mut incoming) = ws.split();

    match behaviour {
        Behaviour::Stream(messages) => {
            let mut ticker = tokio::time::interval(Duration::from_millis(10));
            let mut cycle = messages.into_iter().cycle();
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let Some(message) = cycle.next() else { break };
                        if outgoing.send(message).await.is_err() {
                            break;
                        }
                    }
                    incoming_message = incoming.next() => {
                        match incoming_message {
                            Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                            Some(Ok(_)) => {}
                        }
                    }
                }
            }
        }
        Behaviour::SendThenClose(messages) => {
            for message in messages {
                if outgoing.send(message).await.is_err() {
                    return;
                }
            }
            let _ = outgoing.send(Message::Close(None)).await;
        }
    }
}

/// Accepts TCP connections but never answers the upgrade request, so a
/// client dial stays pending.
pub async fn spawn_stalled_relay() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("ws://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((tcp, _)) = listener.accept().await {
            held.push(tcp);
        }
    });
    base_url
}

/// An address nothing listens on.
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("ws://{addr}")
}

pub fn text(payload: &str) -> Message {
    Message::Text(payload.to_string())
}

/// Records every rendered block.
#[derive(Clone, Default)]
pub struct RecordingSink {
    blocks: Arc<Mutex<Vec<Vec<String>>>>,
}

impl RecordingSink {
    pub fn blocks(&self) -> Vec<Vec<String>> {
        self.blocks.lock().unwrap().clone()
    }

    pub fn last_block(&self) -> Option<Vec<String>> {
        self.blocks.lock().unwrap().last().cloned()
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, lines: &[String]) -> std::io::Result<()> {
        self.blocks.lock().unwrap().push(lines.to_vec());
        Ok(())
    }
}
