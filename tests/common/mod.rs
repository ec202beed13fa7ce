//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let harness = TestApp::new();
//! harness.app.open_grafana();
//! assert_eq!(harness.browser.opened(), vec!["http://localhost:3000"]);
//! ```

#![allow(dead_code)]

use devsim::adapters::mock::{MockHttpClient, RecordingBrowser};
use devsim::app::App;
use devsim::startup::DashboardConfig;
use devsim::traits::HttpClient;
use std::sync::Arc;

/// An App wired to mock adapters.
pub struct TestApp {
    pub app: App,
    pub http: MockHttpClient,
    pub browser: RecordingBrowser,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        let http = MockHttpClient::new();
        let browser = RecordingBrowser::new();
        let app = App::from_config(&config, Arc::new(http.clone()), Arc::new(browser.clone()))
            .expect("valid test config");
        Self { app, http, browser }
    }
}

/// An App using `http` for scenario starts.
pub fn app_with_http(config: &DashboardConfig, http: Arc<dyn HttpClient>) -> App {
    App::from_config(config, http, Arc::new(RecordingBrowser::new())).expect("valid test config")
}

/// Receive one message and hand it to the app.
pub async fn pump_one(app: &mut App) {
    let msg = app
        .message_rx
        .as_mut()
        .expect("receiver not taken")
        .recv()
        .await
        .expect("channel open");
    app.handle_message(msg);
}

/// `prefix · message` for every log line.
pub fn log_entries(app: &App) -> Vec<String> {
    app.log
        .lines()
        .iter()
        .map(|l| format!("{} · {}", l.prefix, l.message))
        .collect()
}
