//! Incident stream integration for the App.
//!
//! This module connects the stream client to the application, routing
//! every stream event and connection state change into [`AppMessage`]s.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use crate::traits::WsConnector;
use crate::websocket::{IncidentStream, ReconnectPolicy};

use super::AppMessage;

/// Start the incident stream against `events_url`.
///
/// Events become [`AppMessage::Stream`]; state changes are forwarded as
/// [`AppMessage::StreamStateChanged`] until the stream ends. The returned
/// handle owns the connection loop.
pub fn start_incident_stream(
    connector: Arc<dyn WsConnector>,
    events_url: &str,
    policy: Arc<dyn ReconnectPolicy>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) -> IncidentStream {
    info!("Starting incident stream for {}", events_url);

    let event_tx = message_tx.clone();
    let stream = IncidentStream::connect(connector, events_url, policy, move |event| {
        let _ = event_tx.send(AppMessage::Stream(event));
    });

    let mut state_rx = stream.state_receiver();
    tokio::spawn(async move {
        while state_rx.changed().await.is_ok() {
            let state = *state_rx.borrow_and_update();
            if message_tx.send(AppMessage::StreamStateChanged(state)).is_err() {
                break;
            }
        }
    });

    stream
}
