//! Dashboard Integration Tests
//!
//! Render the full dashboard on a ratatui TestBackend and drive it with
//! key and mouse events, checking what lands in the event log.

mod common;

use common::{log_entries, pump_one, TestApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use devsim::adapters::mock::MockResponse;
use devsim::app::{App, AppMessage};
use devsim::scenario::Scenario;
use devsim::startup::DashboardConfig;
use devsim::ui::{self, ClickAction};
use devsim::websocket::{StreamEvent, StreamState};
use ratatui::{backend::TestBackend, Terminal};

fn draw(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(110, 26)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Screen position of the first hit area with `action`.
fn locate(app: &App, action: ClickAction) -> (u16, u16) {
    for y in 0..26 {
        for x in 0..110 {
            if app.hit_areas.hit_test(x, y) == Some(action) {
                return (x, y);
            }
        }
    }
    panic!("no hit area for {:?}", action);
}

#[tokio::test]
async fn test_click_flow_triggers_and_renders() {
    let mut harness = TestApp::new();
    harness
        .http
        .set_default_response(MockResponse::json(200, r#"{"run_id":"run-9"}"#));
    let app = &mut harness.app;

    draw(app);
    let (x, y) = locate(app, ClickAction::TriggerScenario(2));
    app.handle_mouse(click(x, y));
    pump_one(app).await;

    assert_eq!(
        log_entries(app),
        vec![
            "UI · ▶ Triggering scenario: memory_leak",
            "UI · ✅ Scenario started (run-9)",
        ]
    );

    let screen = draw(app);
    assert!(screen.contains("Triggering scenario: memory_leak"));
    assert!(screen.contains("Scenario started (run-9)"));
    assert_eq!(
        harness.http.posted_urls(),
        vec!["http://localhost/api/scenarios/memory_leak/start"]
    );
}

#[test]
fn test_dashboard_controls_by_mouse_and_key() {
    let mut harness = TestApp::with_config(
        DashboardConfig::default().with_base_url("http://sim.internal:8080"),
    );
    let app = &mut harness.app;

    draw(app);
    let (x, y) = locate(
        app,
        ClickAction::OpenDashboard(devsim::app::Dashboard::Grafana),
    );
    app.handle_mouse(click(x, y));
    app.handle_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE));

    assert_eq!(
        harness.browser.opened(),
        vec!["http://sim.internal:3000", "http://sim.internal:9090"]
    );
    assert_eq!(
        log_entries(&harness.app),
        vec![
            "UI · 📊 Opened Grafana → http://sim.internal:3000",
            "UI · 📈 Opened Prometheus → http://sim.internal:9090",
        ]
    );
}

#[test]
fn test_header_tracks_stream_state() {
    let mut harness = TestApp::new();
    let app = &mut harness.app;

    assert!(draw(app).contains("stream connecting"));

    app.handle_message(AppMessage::StreamStateChanged(StreamState::Open));
    app.handle_message(AppMessage::Stream(StreamEvent::Connected));
    let screen = draw(app);
    assert!(screen.contains("stream live"));
    assert!(screen.contains("Connected to live incident stream"));

    app.handle_message(AppMessage::StreamStateChanged(StreamState::Closed));
    assert!(draw(app).contains("stream disconnected"));
}

#[test]
fn test_custom_scenarios_render() {
    let mut harness = TestApp::with_config(DashboardConfig::default().with_scenarios(vec![
        Scenario::new("cpu_spike"),
        Scenario::new("net-partition"),
    ]));
    let screen = draw(&mut harness.app);

    assert!(screen.contains("CPU Spike"));
    assert!(screen.contains("Net Partition"));
    assert!(!screen.contains("DB Latency"));
    assert_eq!(harness.app.hit_areas.len(), 4);
}

#[test]
fn test_scrollback_survives_new_events() {
    let mut harness = TestApp::new();
    let app = &mut harness.app;
    for i in 0..60 {
        app.handle_message(AppMessage::Stream(StreamEvent::Message(format!(
            "{{\"scenario\":\"disk_full\",\"message\":\"tick {:02}\"}}",
            i
        ))));
    }
    draw(app);
    app.handle_key(KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE));
    let before = draw(app);
    assert!(!before.contains("tick 59"));

    app.handle_message(AppMessage::Stream(StreamEvent::Message("late".to_string())));
    let after = draw(app);
    assert!(!after.contains("late"));

    app.handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
    let followed = draw(app);
    assert!(followed.contains("late"));
    assert!(followed.contains("tick 59"));
}
