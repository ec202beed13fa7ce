//! Append-only event log.
//!
//! Every user-visible state change in the dashboard becomes exactly one
//! [`LogLine`] appended to the [`LogPanel`]. Lines are never edited, removed,
//! or reordered; the panel only tracks how far the user has scrolled back.

use chrono::{DateTime, Local};

/// Separator placed between the timestamp, prefix, and message.
pub const SEPARATOR: &str = " · ";

/// One immutable, timestamped entry in the event log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Local>,
    pub prefix: String,
    pub message: String,
}

impl LogLine {
    /// Create a line stamped with the current local time.
    pub fn new(prefix: impl Into<String>, message: impl Into<String>) -> Self {
        Self::at(Local::now(), prefix, message)
    }

    /// Create a line with an explicit timestamp.
    pub fn at(
        timestamp: DateTime<Local>,
        prefix: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            prefix: prefix.into(),
            message: message.into(),
        }
    }

    /// Wall-clock time formatted for display.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// Render as `HH:MM:SS · prefix · message`.
    pub fn render(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.time_label(),
            SEPARATOR,
            self.prefix,
            SEPARATOR,
            self.message
        )
    }
}

/// Scrolling panel of log lines.
///
/// `scroll_offset` counts lines between the bottom of the viewport and the
/// newest line. Zero means the panel follows new lines as they arrive.
#[derive(Debug, Default)]
pub struct LogPanel {
    lines: Vec<LogLine>,
    scroll_offset: usize,
}

impl LogPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new line built from `prefix` and `message`.
    pub fn append_line(&mut self, prefix: impl Into<String>, message: impl Into<String>) {
        self.push(LogLine::new(prefix, message));
    }

    /// Append an already-built line.
    ///
    /// While following, the newest line stays visible. While scrolled back,
    /// the offset grows so the viewport keeps showing the same lines.
    pub fn push(&mut self, line: LogLine) {
        self.lines.push(line);
        if self.scroll_offset > 0 {
            self.scroll_offset += 1;
        }
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&LogLine> {
        self.lines.last()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn is_following(&self) -> bool {
        self.scroll_offset == 0
    }

    /// Scroll towards older lines.
    pub fn scroll_up(&mut self, amount: usize) {
        let max = self.lines.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + amount).min(max);
    }

    /// Scroll towards newer lines; reaching the bottom resumes following.
    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Jump to the newest line and resume following.
    pub fn follow_tail(&mut self) {
        self.scroll_offset = 0;
    }

    /// Lines visible in a viewport of `height` rows.
    pub fn visible(&self, height: usize) -> &[LogLine] {
        let end = self.lines.len().saturating_sub(self.scroll_offset);
        let start = end.saturating_sub(height);
        &self.lines[start..end]
    }
}
