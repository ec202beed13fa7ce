//! Live incident stream.
//!
//! A persistent WebSocket feed of scenario progress events. The client
//! reconnects forever on a fixed delay and renders every lifecycle change
//! and payload as one log line.

pub mod client;
pub mod messages;

pub use client::{
    run_stream_loop, FixedDelay, IncidentStream, ReconnectPolicy, StreamState, WsError,
    DEFAULT_RECONNECT_DELAY,
};
pub use messages::{render_payload, IncidentEvent, StreamEvent, EVENT_LABEL, STREAM_PREFIX};
