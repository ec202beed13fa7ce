//! WebSocket connection trait abstraction.
//!
//! The incident stream only ever reads. A [`WsConnector`] performs the
//! handshake and yields a [`WsSession`] that produces text frames until the
//! socket closes. Both are swapped for mocks in tests.

use async_trait::async_trait;

use crate::websocket::WsError;

/// One open socket.
#[async_trait]
pub trait WsSession: Send {
    /// Wait for the next text payload.
    ///
    /// Returns `None` once the socket is closed, normally or not. An
    /// `Err` is an error signal; callers treat the session as closing.
    async fn next_text(&mut self) -> Option<Result<String, WsError>>;

    /// Close the socket from our side.
    async fn close(&mut self);
}

/// Opens sockets.
#[async_trait]
pub trait WsConnector: Send + Sync {
    /// Perform the handshake against `url`.
    async fn connect(&self, url: &str) -> Result<Box<dyn WsSession>, WsError>;
}
