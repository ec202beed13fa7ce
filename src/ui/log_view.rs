//! Event log pane.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::log_panel::{LogLine, SEPARATOR};
use crate::scenario::UI_PREFIX;
use crate::websocket::STREAM_PREFIX;

use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_PREFIX_EVENT,
    COLOR_PREFIX_STREAM, COLOR_PREFIX_UI, COLOR_WARNING,
};

pub fn render_log(frame: &mut Frame, area: Rect, app: &mut App) {
    let mut title = vec![Span::styled(
        " Event Log ",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if !app.log.is_following() {
        title.push(Span::styled(
            format!("↑{} · end to follow ", app.log.scroll_offset()),
            Style::default().fg(COLOR_WARNING),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Line::from(title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = inner.height as usize;
    app.log_viewport_height = height;

    if app.log.is_empty() {
        let hint = Paragraph::new(Span::styled(
            "No events yet. Trigger a scenario to get started.",
            Style::default().fg(COLOR_DIM),
        ));
        frame.render_widget(hint, inner);
        return;
    }

    // One row per line; long lines are clipped so rows map to lines
    let lines: Vec<Line> = app.log.visible(height).iter().map(render_line).collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_line(line: &LogLine) -> Line<'static> {
    let sep = Span::styled(SEPARATOR, Style::default().fg(COLOR_DIM));
    Line::from(vec![
        Span::styled(line.time_label(), Style::default().fg(COLOR_DIM)),
        sep.clone(),
        Span::styled(
            line.prefix.clone(),
            Style::default()
                .fg(prefix_color(&line.prefix))
                .add_modifier(Modifier::BOLD),
        ),
        sep,
        Span::styled(line.message.clone(), message_style(&line.message)),
    ])
}

fn prefix_color(prefix: &str) -> ratatui::style::Color {
    match prefix {
        UI_PREFIX => COLOR_PREFIX_UI,
        STREAM_PREFIX => COLOR_PREFIX_STREAM,
        _ => COLOR_PREFIX_EVENT,
    }
}

fn message_style(message: &str) -> Style {
    if message.starts_with('❌') || message.starts_with('🔴') {
        Style::default().fg(COLOR_ERROR)
    } else if message.starts_with('⚠') {
        Style::default().fg(COLOR_WARNING)
    } else {
        Style::default().fg(COLOR_ACCENT)
    }
}
