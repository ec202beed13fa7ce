//! Live incident stream with automatic reconnection.
//!
//! The stream is a small state machine:
//!
//! ```text
//! Connecting --handshake--> Open --close/error--> Closed --delay--> Connecting
//!      \--------------handshake failed------------^
//! ```
//!
//! Reconnection is unconditional. The delay before each attempt comes from a
//! [`ReconnectPolicy`]; the default [`FixedDelay`] waits 1.5 seconds every
//! time and never gives up.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::messages::StreamEvent;
use crate::traits::{WsConnector, WsSession};

/// WebSocket connection errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WsError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Read failed: {0}")]
    ReadFailed(String),
}

impl WsError {
    /// Stream errors are always followed by a reconnect.
    pub fn is_retryable(&self) -> bool {
        match self {
            WsError::ConnectionFailed(_) | WsError::ReadFailed(_) => true,
        }
    }
}

/// Lifecycle state of the incident stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Connecting,
    Open,
    Closed,
}

impl StreamState {
    pub fn label(&self) -> &'static str {
        match self {
            StreamState::Connecting => "connecting",
            StreamState::Open => "live",
            StreamState::Closed => "disconnected",
        }
    }
}

/// Delay between a close and the next connection attempt.
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_millis(1500);

/// Decides how long to wait before each reconnect.
pub trait ReconnectPolicy: Send + Sync {
    /// Delay before reconnect number `attempt` (1-based, counted over the
    /// stream's lifetime), or `None` to stop reconnecting.
    fn next_delay(&self, attempt: u32) -> Option<Duration>;
}

/// The same delay before every reconnect, optionally capped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDelay {
    delay: Duration,
    max_attempts: Option<u32>,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            max_attempts: None,
        }
    }

    /// Stop after `max_attempts` reconnects.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(DEFAULT_RECONNECT_DELAY)
    }
}

impl ReconnectPolicy for FixedDelay {
    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        match self.max_attempts {
            Some(max) if attempt > max => None,
            _ => Some(self.delay),
        }
    }
}

/// Handle to the running incident stream.
///
/// The connection loop runs on its own task and reports every lifecycle
/// change and payload to the `on_event` handler given to
/// [`IncidentStream::connect`]. Dropping the handle stops the loop.
pub struct IncidentStream {
    state_rx: watch::Receiver<StreamState>,
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl IncidentStream {
    /// Spawn the connection loop against `url`.
    pub fn connect<F>(
        connector: Arc<dyn WsConnector>,
        url: impl Into<String>,
        policy: Arc<dyn ReconnectPolicy>,
        on_event: F,
    ) -> Self
    where
        F: Fn(StreamEvent) + Send + Sync + 'static,
    {
        let url = url.into();
        let (state_tx, state_rx) = watch::channel(StreamState::Connecting);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            run_stream_loop(connector, url, policy, on_event, state_tx, shutdown_rx).await;
        });

        Self {
            state_rx,
            shutdown_tx,
            handle,
        }
    }

    /// Get the current connection state
    pub fn state(&self) -> StreamState {
        *self.state_rx.borrow()
    }

    /// Subscribe to connection state changes
    pub fn state_receiver(&self) -> watch::Receiver<StreamState> {
        self.state_rx.clone()
    }

    /// Stop the loop, closing the socket if one is open.
    pub fn shutdown(&self) {
        info!("Shutting down incident stream");
        let _ = self.shutdown_tx.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the connection loop to end.
    pub async fn wait(&mut self) {
        let _ = (&mut self.handle).await;
    }
}

/// Run the connect / read / reconnect loop until shutdown or until the
/// policy stops it.
pub async fn run_stream_loop<F>(
    connector: Arc<dyn WsConnector>,
    url: String,
    policy: Arc<dyn ReconnectPolicy>,
    on_event: F,
    state_tx: watch::Sender<StreamState>,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    F: Fn(StreamEvent) + Send + Sync,
{
    let mut attempt: u32 = 0;

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        state_tx.send_replace(StreamState::Connecting);
        info!("Connecting to incident stream at {}", url);

        let connected = tokio::select! {
            result = connector.connect(&url) => result,
            _ = shutdown_rx.changed() => break,
        };

        match connected {
            Ok(mut session) => {
                info!("Connected to incident stream");
                state_tx.send_replace(StreamState::Open);
                on_event(StreamEvent::Connected);

                if read_until_closed(session.as_mut(), &on_event, &mut shutdown_rx).await {
                    session.close().await;
                    break;
                }
            }
            Err(e) => {
                warn!("Incident stream handshake failed: {}", e);
                on_event(StreamEvent::Error(e.to_string()));
            }
        }

        state_tx.send_replace(StreamState::Closed);
        on_event(StreamEvent::Disconnected);

        attempt = attempt.saturating_add(1);
        let Some(delay) = policy.next_delay(attempt) else {
            info!("Reconnect policy stopped after {} reconnects", attempt - 1);
            break;
        };
        debug!("Reconnect {} in {:?}", attempt, delay);

        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = shutdown_rx.changed() => break,
        }
    }

    state_tx.send_replace(StreamState::Closed);
    info!("Incident stream loop ended");
}

/// Forward payloads until the socket closes. Returns true on shutdown.
async fn read_until_closed<F>(
    session: &mut dyn WsSession,
    on_event: &F,
    shutdown_rx: &mut watch::Receiver<bool>,
) -> bool
where
    F: Fn(StreamEvent) + Send + Sync,
{
    loop {
        tokio::select! {
            frame = session.next_text() => match frame {
                Some(Ok(text)) => {
                    debug!("Incident stream payload: {}", text);
                    on_event(StreamEvent::Message(text));
                }
                Some(Err(e)) => {
                    warn!("Incident stream error: {}", e);
                    on_event(StreamEvent::Error(e.to_string()));
                    return false;
                }
                None => {
                    info!("Incident stream closed");
                    return false;
                }
            },
            _ = shutdown_rx.changed() => return true,
        }
    }
}
