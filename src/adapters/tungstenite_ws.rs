//! Tungstenite-based WebSocket adapter.

use async_trait::async_trait;
use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::debug;

use crate::traits::{WsConnector, WsSession};
use crate::websocket::WsError;

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Opens incident stream sockets with tokio-tungstenite.
///
/// `wss://` URLs negotiate TLS through native-tls.
#[derive(Debug, Clone, Default)]
pub struct TungsteniteConnector;

impl TungsteniteConnector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WsConnector for TungsteniteConnector {
    async fn connect(&self, url: &str) -> Result<Box<dyn WsSession>, WsError> {
        let (socket, response) = connect_async(url)
            .await
            .map_err(|e| WsError::ConnectionFailed(e.to_string()))?;
        debug!("WebSocket handshake completed: {}", response.status());
        Ok(Box::new(TungsteniteSession { socket }))
    }
}

/// One open tokio-tungstenite socket.
pub struct TungsteniteSession {
    socket: Socket,
}

#[async_trait]
impl WsSession for TungsteniteSession {
    async fn next_text(&mut self) -> Option<Result<String, WsError>> {
        loop {
            match self.socket.next().await? {
                Ok(Message::Text(text)) => return Some(Ok(text)),
                Ok(Message::Binary(data)) => {
                    return Some(Ok(String::from_utf8_lossy(&data).into_owned()))
                }
                Ok(Message::Close(frame)) => {
                    debug!("Received close frame: {:?}", frame);
                    return None;
                }
                // Pongs to server pings are queued by tungstenite itself.
                Ok(_) => continue,
                Err(e) => return Some(Err(WsError::ReadFailed(e.to_string()))),
            }
        }
    }

    async fn close(&mut self) {
        if let Err(e) = self.socket.close(None).await {
            debug!("Error while closing socket: {}", e);
        }
    }
}
