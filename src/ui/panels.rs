//! Header, scenario list, dashboard controls, and footer.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Dashboard};
use crate::log_panel::SEPARATOR;

use super::interaction::ClickAction;
use super::theme::{
    stream_state_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_HOVER,
    COLOR_SELECTED_BG, COLOR_WARNING,
};

/// Width of the left column for the current scenario labels.
pub fn left_column_width(app: &App) -> u16 {
    let widest = app
        .scenarios
        .iter()
        .map(|s| s.label.width())
        .max()
        .unwrap_or(0);
    // marker + digit + padding + borders
    u16::try_from(widest)
        .unwrap_or(u16::MAX)
        .saturating_add(10)
        .clamp(28, 40)
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
}

// ============================================================================
// Header
// ============================================================================

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.stream_state;
    let sep = Span::styled(SEPARATOR, Style::default().fg(COLOR_DIM));

    let mut spans = vec![
        Span::styled(
            "DevOps Simulator",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled(app.endpoints.origin.clone(), Style::default().fg(COLOR_ACCENT)),
        sep.clone(),
        Span::styled("● ", Style::default().fg(stream_state_color(state))),
        Span::styled(
            format!("stream {}", state.label()),
            Style::default().fg(stream_state_color(state)),
        ),
    ];
    if app.in_flight > 0 {
        spans.push(sep);
        spans.push(Span::styled(
            format!("{} pending", app.in_flight),
            Style::default().fg(COLOR_WARNING),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(panel_block("devsim"));
    frame.render_widget(header, area);
}

// ============================================================================
// Scenario List
// ============================================================================

pub fn render_scenarios(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = panel_block("Scenarios");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = inner.height as usize;
    if height == 0 || inner.width == 0 {
        return;
    }

    // Keep the selection in view
    let first = app.selected.saturating_sub(height - 1);
    let hover = Style::default().fg(COLOR_HOVER);

    for (row, index) in (first..app.scenarios.len()).take(height).enumerate() {
        let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        let selected = index == app.selected;

        let mut style = if selected {
            Style::default()
                .fg(COLOR_HEADER)
                .bg(COLOR_SELECTED_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };
        if let Some(hover_style) = app.hit_areas.hover_style(rect) {
            style = style.patch(hover_style);
        }

        let marker = if selected { "▶" } else { " " };
        let digit = if index < 9 {
            format!("{}", index + 1)
        } else {
            " ".to_string()
        };
        let line = Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::styled(format!("{}  ", digit), Style::default().fg(COLOR_DIM)),
            Span::styled(app.scenarios[index].label.clone(), style),
        ]);
        frame.render_widget(Paragraph::new(line).style(style), rect);

        app.hit_areas
            .register(rect, ClickAction::TriggerScenario(index), Some(hover));
    }
}

// ============================================================================
// Dashboard Controls
// ============================================================================

pub fn render_dashboards(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = panel_block("Dashboards");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hover = Style::default().fg(COLOR_HOVER).add_modifier(Modifier::BOLD);

    for (row, dashboard) in [Dashboard::Grafana, Dashboard::Prometheus]
        .into_iter()
        .enumerate()
        .take(inner.height as usize)
    {
        let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        let mut style = Style::default().fg(COLOR_ACCENT);
        if let Some(hover_style) = app.hit_areas.hover_style(rect) {
            style = style.patch(hover_style);
        }

        let line = Line::from(vec![
            Span::styled(format!("[{}] ", dashboard.key()), Style::default().fg(COLOR_DIM)),
            Span::styled(format!("{} {}", dashboard.icon(), dashboard.name()), style),
        ]);
        frame.render_widget(Paragraph::new(line), rect);

        app.hit_areas
            .register(rect, ClickAction::OpenDashboard(dashboard), Some(hover));
    }
}

// ============================================================================
// Footer
// ============================================================================

const KEY_HINTS: &[(&str, &str)] = &[
    ("↑↓", "select"),
    ("enter/1-9", "trigger"),
    ("g", "grafana"),
    ("p", "prometheus"),
    ("pgup/pgdn", "scroll"),
    ("end", "follow"),
    ("q", "quit"),
];

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(KEY_HINTS.len() * 3);
    for (key, action) in KEY_HINTS {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(*action, Style::default().fg(COLOR_DIM)));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
