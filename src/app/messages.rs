//! AppMessage enum for async communication within the application.

use crate::scenario::TriggerOutcome;
use crate::websocket::{StreamEvent, StreamState};

/// Messages received from async operations (triggers, the incident stream)
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A scenario start request finished
    ScenarioFinished {
        scenario: String,
        outcome: TriggerOutcome,
    },
    /// Lifecycle change or payload from the incident stream
    Stream(StreamEvent),
    /// Incident stream connection state changed
    StreamStateChanged(StreamState),
}
