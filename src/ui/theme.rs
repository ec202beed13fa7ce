//! Color theme constants for the dashboard
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

use crate::websocket::StreamState;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the title
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected row background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 35, 55);

/// Hovered control foreground
pub const COLOR_HOVER: Color = Color::Cyan;

// ============================================================================
// Status Colors
// ============================================================================

/// Live / success - green
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Pending / warning - yellow
pub const COLOR_WARNING: Color = Color::Yellow;

/// Failure / disconnected - red
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Log Prefix Colors
// ============================================================================

/// Dashboard actions
pub const COLOR_PREFIX_UI: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Stream lifecycle lines
pub const COLOR_PREFIX_STREAM: Color = Color::Magenta;

/// Incident events
pub const COLOR_PREFIX_EVENT: Color = Color::Cyan;

/// Color of the stream state indicator.
pub fn stream_state_color(state: StreamState) -> Color {
    match state {
        StreamState::Open => COLOR_SUCCESS,
        StreamState::Connecting => COLOR_WARNING,
        StreamState::Closed => COLOR_ERROR,
    }
}
