//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AppMessage`] - Messages for async communication
//! - [`start_incident_stream`] - wiring of the live stream into the message channel
//!
//! The UI loop owns the `App`. Background work (scenario triggers and the
//! incident stream) reports back only through [`AppMessage`]s, so every log
//! line is appended on the UI task in arrival order.

mod actions;
mod handlers;
mod messages;
mod navigation;
mod websocket;

pub use actions::Dashboard;
pub use messages::AppMessage;
pub use websocket::start_incident_stream;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::ConfigError;
use crate::log_panel::LogPanel;
use crate::scenario::Scenario;
use crate::startup::{DashboardConfig, Endpoints};
use crate::traits::{BrowserOpener, HttpClient};
use crate::ui::HitAreaRegistry;
use crate::websocket::StreamState;

/// Main application state
pub struct App {
    /// Append-only event log
    pub log: LogPanel,
    /// Scenario controls, in display order
    pub scenarios: Vec<Scenario>,
    /// Index of the highlighted scenario
    pub selected: usize,
    /// URLs derived from the configured base URL
    pub endpoints: Endpoints,
    /// Last known incident stream state
    pub stream_state: StreamState,
    /// Start requests sent but not yet answered
    pub in_flight: usize,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Rows available to the event log in the last frame
    pub log_viewport_height: usize,
    /// Clickable regions registered during the last render
    pub hit_areas: HitAreaRegistry,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Client for scenario start requests (shared across trigger tasks)
    pub http: Arc<dyn HttpClient>,
    /// Opens dashboards in the system browser
    pub browser: Arc<dyn BrowserOpener>,
}

impl App {
    /// Create a new App from resolved endpoints.
    pub fn new(
        scenarios: Vec<Scenario>,
        endpoints: Endpoints,
        http: Arc<dyn HttpClient>,
        browser: Arc<dyn BrowserOpener>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            log: LogPanel::new(),
            scenarios,
            selected: 0,
            endpoints,
            stream_state: StreamState::Connecting,
            in_flight: 0,
            should_quit: false,
            needs_redraw: true,
            log_viewport_height: 0,
            hit_areas: HitAreaRegistry::new(),
            message_rx: Some(message_rx),
            message_tx,
            http,
            browser,
        }
    }

    /// Create a new App, validating `config` first.
    pub fn from_config(
        config: &DashboardConfig,
        http: Arc<dyn HttpClient>,
        browser: Arc<dyn BrowserOpener>,
    ) -> Result<Self, ConfigError> {
        let endpoints = config.resolve()?;
        Ok(Self::new(config.scenarios.clone(), endpoints, http, browser))
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Currently highlighted scenario.
    pub fn selected_scenario(&self) -> Option<&Scenario> {
        self.scenarios.get(self.selected)
    }
}
