//! Incident stream messages.
//!
//! The event pipeline publishes JSON objects such as
//! `{"scenario":"db_latency","step":3,"level":"warn","message":"..."}`.
//! Every field is optional and anything that is not such an object is shown
//! verbatim under the `Event` label.

use serde::Deserialize;
use serde_json::Value;

use crate::log_panel::{LogLine, SEPARATOR};
use crate::payload::truthy_text;

/// Prefix for stream lifecycle lines.
pub const STREAM_PREFIX: &str = "Incident Stream";

/// Label used when an event carries no scenario, step, or level.
pub const EVENT_LABEL: &str = "Event";

/// Something the incident stream reports to its handler.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Handshake completed.
    Connected,
    /// The socket closed; a reconnect will be scheduled.
    Disconnected,
    /// An error signal. The close that follows drives the state change.
    Error(String),
    /// A text payload, exactly as received.
    Message(String),
}

impl StreamEvent {
    /// The log line this event renders to.
    pub fn to_log_line(&self) -> LogLine {
        match self {
            StreamEvent::Connected => {
                LogLine::new(STREAM_PREFIX, "🟢 Connected to live incident stream")
            }
            StreamEvent::Disconnected => LogLine::new(STREAM_PREFIX, "🔴 Live stream disconnected"),
            StreamEvent::Error(_) => LogLine::new(STREAM_PREFIX, "⚠️ WebSocket error"),
            StreamEvent::Message(raw) => {
                let (prefix, message) = render_payload(raw);
                LogLine::new(prefix, message)
            }
        }
    }
}

/// A structured event from the pipeline.
///
/// Fields stay as raw JSON so a number where a string was expected (or the
/// reverse) still renders instead of failing the whole message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncidentEvent {
    #[serde(default)]
    pub scenario: Option<Value>,
    #[serde(default)]
    pub step: Option<Value>,
    #[serde(default)]
    pub level: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl IncidentEvent {
    /// Parse a payload, accepting only JSON objects.
    pub fn parse(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// `scenario · step N · level`, skipping absent parts.
    pub fn prefix(&self) -> Option<String> {
        let parts: Vec<String> = [
            self.scenario.as_ref().and_then(truthy_text),
            self.step
                .as_ref()
                .and_then(truthy_text)
                .map(|step| format!("step {}", step)),
            self.level.as_ref().and_then(truthy_text),
        ]
        .into_iter()
        .flatten()
        .collect();

        (!parts.is_empty()).then(|| parts.join(SEPARATOR))
    }

    pub fn message_text(&self) -> Option<String> {
        self.message.as_ref().and_then(truthy_text)
    }
}

/// Split a raw payload into the prefix and message to display.
pub fn render_payload(raw: &str) -> (String, String) {
    match IncidentEvent::parse(raw) {
        Some(event) => (
            event.prefix().unwrap_or_else(|| EVENT_LABEL.to_string()),
            event.message_text().unwrap_or_else(|| raw.to_string()),
        ),
        None => (EVENT_LABEL.to_string(), raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_event() {
        let raw = r#"{"scenario":"net-partition","step":2,"level":"warn","message":"link down"}"#;
        let (prefix, message) = render_payload(raw);
        assert_eq!(prefix, "net-partition · step 2 · warn");
        assert_eq!(message, "link down");
    }

    #[test]
    fn test_plain_text() {
        let (prefix, message) = render_payload("plain text");
        assert_eq!(prefix, "Event");
        assert_eq!(message, "plain text");
    }

    #[test]
    fn test_partial_prefix() {
        let (prefix, _) = render_payload(r#"{"level":"info","message":"m"}"#);
        assert_eq!(prefix, "info");

        let (prefix, _) = render_payload(r#"{"scenario":"disk_full","message":"m"}"#);
        assert_eq!(prefix, "disk_full");
    }

    #[test]
    fn test_step_zero_is_omitted() {
        let raw = r#"{"scenario":"bogus","step":0,"level":"error","message":"unknown"}"#;
        let (prefix, _) = render_payload(raw);
        assert_eq!(prefix, "bogus · error");
    }

    #[test]
    fn test_empty_object_falls_back() {
        let (prefix, message) = render_payload("{}");
        assert_eq!(prefix, "Event");
        assert_eq!(message, "{}");
    }

    #[test]
    fn test_missing_message_uses_raw_payload() {
        let raw = r#"{"scenario":"cpu_spike","step":1}"#;
        let (prefix, message) = render_payload(raw);
        assert_eq!(prefix, "cpu_spike · step 1");
        assert_eq!(message, raw);
    }

    #[test]
    fn test_non_object_json() {
        assert_eq!(render_payload("42"), ("Event".to_string(), "42".to_string()));
        assert_eq!(render_payload("null"), ("Event".to_string(), "null".to_string()));
        assert_eq!(
            render_payload(r#"["a"]"#),
            ("Event".to_string(), r#"["a"]"#.to_string())
        );
    }

    #[test]
    fn test_lifecycle_lines() {
        let line = StreamEvent::Connected.to_log_line();
        assert_eq!(line.prefix, STREAM_PREFIX);
        assert_eq!(line.message, "🟢 Connected to live incident stream");

        assert_eq!(
            StreamEvent::Disconnected.to_log_line().message,
            "🔴 Live stream disconnected"
        );
        assert_eq!(
            StreamEvent::Error("reset".to_string()).to_log_line().message,
            "⚠️ WebSocket error"
        );
    }

    #[test]
    fn test_message_event_line() {
        let line = StreamEvent::Message("plain text".to_string()).to_log_line();
        assert_eq!(line.prefix, "Event");
        assert_eq!(line.message, "plain text");
    }
}
