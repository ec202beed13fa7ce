//! UI rendering for the devsim dashboard
//!
//! Layout:
//! - Header: simulator location, stream state, pending triggers
//! - Left column: scenario list and dashboard controls
//! - Right pane: the event log
//! - Bottom: keybind hints
//!
//! Rendering also records the clickable regions of the frame in
//! [`App::hit_areas`] and the log viewport height used for paging.

mod interaction;
mod log_view;
mod panels;
mod theme;

pub use interaction::{ClickAction, HitArea, HitAreaRegistry};
pub use theme::{
    stream_state_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_HOVER, COLOR_SUCCESS, COLOR_WARNING,
};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

/// Height reserved for the dashboard controls block.
const DASHBOARDS_HEIGHT: u16 = 4;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole dashboard.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    panels::render_header(frame, rows[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(panels::left_column_width(app)),
            Constraint::Min(20),
        ])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(DASHBOARDS_HEIGHT)])
        .split(columns[0]);

    panels::render_scenarios(frame, left[0], app);
    panels::render_dashboards(frame, left[1], app);
    log_view::render_log(frame, columns[1], app);
    panels::render_footer(frame, rows[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, RecordingBrowser};
    use crate::startup::DashboardConfig;
    use crate::websocket::StreamState;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    fn test_app() -> App {
        App::from_config(
            &DashboardConfig::default(),
            Arc::new(MockHttpClient::new()),
            Arc::new(RecordingBrowser::new()),
        )
        .unwrap()
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn screen_text(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| row_text(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_initial_dashboard() {
        let mut app = test_app();
        let buffer = draw(&mut app, 100, 24);
        let screen = screen_text(&buffer);

        assert!(screen.contains("DevOps Simulator"));
        assert!(screen.contains("http://localhost"));
        assert!(screen.contains("stream connecting"));
        assert!(screen.contains("DB Latency"));
        assert!(screen.contains("Secrets Expired"));
        assert!(screen.contains("Grafana"));
        assert!(screen.contains("Prometheus"));
        assert!(screen.contains("No events yet"));
    }

    #[test]
    fn test_render_log_lines_and_state() {
        let mut app = test_app();
        app.stream_state = StreamState::Open;
        app.log.append_line("UI", "▶ Triggering scenario: cpu_spike");
        app.log.append_line("db_latency · step 3 · warn", "p99 above 800ms");

        let screen = screen_text(&draw(&mut app, 120, 24));
        assert!(screen.contains("stream live"));
        assert!(screen.contains("Triggering scenario: cpu_spike"));
        assert!(screen.contains("db_latency · step 3 · warn"));
        assert!(screen.contains("p99 above 800ms"));
    }

    #[test]
    fn test_render_registers_hit_areas() {
        let mut app = test_app();
        draw(&mut app, 100, 24);

        // 8 scenario rows + 2 dashboard controls
        assert_eq!(app.hit_areas.len(), 10);
        // First row of the scenario block sits below the header and border
        assert_eq!(app.hit_areas.hit_test(2, 4), Some(ClickAction::TriggerScenario(0)));
        assert_eq!(app.hit_areas.hit_test(2, 5), Some(ClickAction::TriggerScenario(1)));
        // Clicks in the log pane do nothing
        assert_eq!(app.hit_areas.hit_test(80, 10), None);
    }

    #[test]
    fn test_render_records_log_viewport() {
        let mut app = test_app();
        draw(&mut app, 100, 24);
        // 24 rows - header 3 - footer 1 - log borders 2
        assert_eq!(app.log_viewport_height, 18);
    }

    #[test]
    fn test_render_follows_newest_line() {
        let mut app = test_app();
        for i in 0..100 {
            app.log.append_line("Event", format!("event number {:03}", i));
        }
        let screen = screen_text(&draw(&mut app, 100, 24));
        assert!(screen.contains("event number 099"));
        assert!(!screen.contains("event number 000"));

        app.log.scroll_up(90);
        let screen = screen_text(&draw(&mut app, 100, 24));
        assert!(screen.contains("event number 009"));
        assert!(!screen.contains("event number 099"));
        assert!(screen.contains("end to follow"));
    }

    fn mouse_move(column: u16, row: u16) -> crossterm::event::MouseEvent {
        crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Moved,
            column,
            row,
            modifiers: crossterm::event::KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_hovered_controls_are_highlighted() {
        let mut app = test_app();
        draw(&mut app, 100, 24);

        // Third scenario row; its label starts after marker and digit.
        app.handle_mouse(mouse_move(6, 6));
        assert!(app.needs_redraw);
        let buffer = draw(&mut app, 100, 24);
        assert_eq!(buffer[(6, 6)].fg, COLOR_HOVER);
        assert_eq!(buffer[(6, 7)].fg, COLOR_ACCENT);

        let grafana_row = (0..24)
            .find(|&y| {
                app.hit_areas.hit_test(2, y)
                    == Some(ClickAction::OpenDashboard(crate::app::Dashboard::Grafana))
            })
            .unwrap();
        app.handle_mouse(mouse_move(2, grafana_row));
        let buffer = draw(&mut app, 100, 24);
        assert_eq!(buffer[(5, grafana_row)].fg, COLOR_HOVER);
        assert_eq!(buffer[(6, 6)].fg, COLOR_ACCENT);

        // Leaving every control clears the highlight.
        app.handle_mouse(mouse_move(80, 10));
        let buffer = draw(&mut app, 100, 24);
        assert_eq!(buffer[(5, grafana_row)].fg, COLOR_ACCENT);
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let mut app = test_app();
        app.log.append_line("UI", "x");
        draw(&mut app, 20, 5);
        draw(&mut app, 1, 1);
    }
}
