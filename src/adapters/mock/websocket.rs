//! Mock WebSocket connector for testing.
//!
//! Each call to [`WsConnector::connect`] consumes the next scripted
//! outcome. With nothing scripted, the connection opens and closes
//! immediately.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

use super::lock;
use crate::traits::{WsConnector, WsSession};
use crate::websocket::WsError;

/// What a scripted session yields before it ends.
#[derive(Debug, Clone, Default)]
pub struct SessionScript {
    frames: VecDeque<Result<String, WsError>>,
    hold_open: bool,
}

impl SessionScript {
    /// Open, then close right away.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Deliver `messages`, then close.
    pub fn messages(messages: Vec<String>) -> Self {
        Self {
            frames: messages.into_iter().map(Ok).collect(),
            hold_open: false,
        }
    }

    /// Deliver `messages`, then signal `error`.
    pub fn failing_after(messages: Vec<String>, error: WsError) -> Self {
        let mut script = Self::messages(messages);
        script.frames.push_back(Err(error));
        script
    }

    /// Stay open until the client closes the socket.
    pub fn held_open() -> Self {
        Self {
            frames: VecDeque::new(),
            hold_open: true,
        }
    }
}

#[derive(Debug)]
enum Scripted {
    Session(SessionScript),
    Failure(WsError),
}

#[derive(Debug, Default)]
struct ConnectorState {
    script: VecDeque<Scripted>,
    urls: Vec<String>,
    times: Vec<Instant>,
}

/// Mock connector recording every connection attempt.
#[derive(Debug, Clone, Default)]
pub struct MockWsConnector {
    state: Arc<Mutex<ConnectorState>>,
    closed_sessions: Arc<AtomicUsize>,
}

impl MockWsConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful handshake.
    pub fn push_session(&self, script: SessionScript) {
        lock(&self.state).script.push_back(Scripted::Session(script));
    }

    /// Queue a failed handshake.
    pub fn push_failure(&self, error: WsError) {
        lock(&self.state).script.push_back(Scripted::Failure(error));
    }

    /// URLs of every connection attempt, in order.
    pub fn connect_urls(&self) -> Vec<String> {
        lock(&self.state).urls.clone()
    }

    /// Times of every connection attempt, in order.
    pub fn connect_times(&self) -> Vec<Instant> {
        lock(&self.state).times.clone()
    }

    pub fn connect_count(&self) -> usize {
        lock(&self.state).urls.len()
    }

    /// Number of sessions the client closed from its side.
    pub fn closed_sessions(&self) -> usize {
        self.closed_sessions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WsConnector for MockWsConnector {
    async fn connect(&self, url: &str) -> Result<Box<dyn WsSession>, WsError> {
        let next = {
            let mut state = lock(&self.state);
            state.urls.push(url.to_string());
            state.times.push(Instant::now());
            state.script.pop_front()
        };

        match next.unwrap_or(Scripted::Session(SessionScript::closed())) {
            Scripted::Session(script) => Ok(Box::new(MockSession {
                script,
                closed_sessions: self.closed_sessions.clone(),
            })),
            Scripted::Failure(error) => Err(error),
        }
    }
}

struct MockSession {
    script: SessionScript,
    closed_sessions: Arc<AtomicUsize>,
}

#[async_trait]
impl WsSession for MockSession {
    async fn next_text(&mut self) -> Option<Result<String, WsError>> {
        if let Some(frame) = self.script.frames.pop_front() {
            return Some(frame);
        }
        if self.script.hold_open {
            std::future::pending::<()>().await;
        }
        None
    }

    async fn close(&mut self) {
        self.closed_sessions.fetch_add(1, Ordering::SeqCst);
    }
}
