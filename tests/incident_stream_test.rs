//! Incident stream lifecycle and rendering.
//!
//! Reconnect timing runs on paused tokio time against scripted sessions;
//! the last test drives a real tungstenite server through the whole
//! pipeline into the dashboard log.

mod common;

use common::{log_entries, TestApp};
use devsim::adapters::mock::{MockWsConnector, SessionScript};
use devsim::adapters::TungsteniteConnector;
use devsim::app::{start_incident_stream, AppMessage};
use devsim::websocket::{FixedDelay, IncidentStream, StreamEvent, WsError};
use futures_util::SinkExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

const EVENTS_URL: &str = "ws://localhost/ws/events";

fn collect(rx: &mut mpsc::UnboundedReceiver<StreamEvent>) -> Vec<StreamEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn spawn_stream(
    connector: &MockWsConnector,
    policy: FixedDelay,
) -> (IncidentStream, mpsc::UnboundedReceiver<StreamEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = IncidentStream::connect(
        Arc::new(connector.clone()),
        EVENTS_URL,
        Arc::new(policy),
        move |event| {
            let _ = tx.send(event);
        },
    );
    (stream, rx)
}

#[tokio::test(start_paused = true)]
async fn test_immediate_close_reconnects_after_fixed_delay() {
    let connector = MockWsConnector::new();
    // Unscripted connects open and close immediately
    let policy = FixedDelay::default().with_max_attempts(4);
    let (mut stream, mut rx) = spawn_stream(&connector, policy);

    stream.wait().await;

    let times = connector.connect_times();
    assert_eq!(times.len(), 5);
    for pair in times.windows(2) {
        assert!(pair[1] - pair[0] >= Duration::from_millis(1500));
    }
    assert!(connector.connect_urls().iter().all(|u| u == EVENTS_URL));

    let events = collect(&mut rx);
    let connected = events.iter().filter(|e| **e == StreamEvent::Connected).count();
    let disconnected = events
        .iter()
        .filter(|e| **e == StreamEvent::Disconnected)
        .count();
    assert_eq!(connected, 5);
    assert_eq!(disconnected, 5);
}

#[tokio::test(start_paused = true)]
async fn test_default_policy_keeps_reconnecting() {
    let connector = MockWsConnector::new();
    let (stream, _rx) = spawn_stream(&connector, FixedDelay::default());

    // 30 s of closures at 1.5 s apart
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(connector.connect_count() >= 20);
    assert!(!stream.is_finished());

    stream.shutdown();
}

#[tokio::test(start_paused = true)]
async fn test_handshake_failure_warns_then_disconnects() {
    let connector = MockWsConnector::new();
    connector.push_failure(WsError::ConnectionFailed("refused".to_string()));
    connector.push_session(SessionScript::messages(vec!["after retry".to_string()]));

    let policy = FixedDelay::default().with_max_attempts(1);
    let (mut stream, mut rx) = spawn_stream(&connector, policy);
    stream.wait().await;

    let lines: Vec<String> = collect(&mut rx)
        .iter()
        .map(|e| e.to_log_line().message)
        .collect();
    assert_eq!(
        lines,
        vec![
            "⚠️ WebSocket error",
            "🔴 Live stream disconnected",
            "🟢 Connected to live incident stream",
            "after retry",
            "🔴 Live stream disconnected",
        ]
    );
}

#[tokio::test]
async fn test_live_events_reach_dashboard_log() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(socket).await.unwrap();
        ws.send(Message::Text(
            r#"{"scenario":"net-partition","step":2,"level":"warn","message":"link down"}"#
                .to_string(),
        ))
        .await
        .unwrap();
        ws.send(Message::Text("plain text".to_string())).await.unwrap();
        ws.close(None).await.unwrap();
    });

    let mut harness = TestApp::new();
    let app = &mut harness.app;
    let mut stream = start_incident_stream(
        Arc::new(TungsteniteConnector::new()),
        &format!("ws://{}/ws/events", addr),
        Arc::new(FixedDelay::new(Duration::from_millis(10)).with_max_attempts(0)),
        app.message_tx.clone(),
    );
    stream.wait().await;
    server.await.unwrap();

    let rx = app.message_rx.as_mut().unwrap();
    let mut messages = Vec::new();
    while let Ok(msg) = rx.try_recv() {
        messages.push(msg);
    }
    for msg in messages {
        if let AppMessage::Stream(_) = msg {
            app.handle_message(msg);
        }
    }

    assert_eq!(
        log_entries(app),
        vec![
            "Incident Stream · 🟢 Connected to live incident stream",
            "net-partition · step 2 · warn · link down",
            "Event · plain text",
            "Incident Stream · 🔴 Live stream disconnected",
        ]
    );
}
