//! Relayscan engine: per-host listeners, coalesced rendering and the run
//! lifecycle.
mod controller;
mod error;
mod listener;
mod notify;
mod publisher;
mod sink;
mod worker;

pub use controller::{Controller, RunReport};
pub use error::EngineError;
pub use listener::{contains_target, endpoint_url, Listener, WebSocketListener, SUBSCRIBE_PATH};
pub use notify::{render_channel, RenderRequests, RenderSignal};
pub use publisher::Publisher;
pub use sink::RenderSink;
pub use worker::{run_worker, WorkerContext};
