//! Message, keyboard, and mouse handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::ui::ClickAction;

use super::actions::Dashboard;
use super::navigation::WHEEL_SCROLL_LINES;
use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::ScenarioFinished { scenario, outcome } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                for line in outcome.log_lines(&scenario) {
                    self.log.push(line);
                }
            }
            AppMessage::Stream(event) => {
                self.log.push(event.to_log_line());
            }
            AppMessage::StreamStateChanged(state) => {
                debug!("Incident stream state: {:?}", state);
                self.stream_state = state;
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.quit();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter => self.trigger_selected(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < self.scenarios.len() {
                    self.selected = index;
                    self.trigger_scenario(index);
                }
            }
            KeyCode::Char('g') => self.open_dashboard(Dashboard::Grafana),
            KeyCode::Char('p') => self.open_dashboard(Dashboard::Prometheus),
            KeyCode::PageUp => self.page_log_up(),
            KeyCode::PageDown => self.page_log_down(),
            KeyCode::Home => self.scroll_log_to_top(),
            KeyCode::End => self.follow_log(),
            _ => {}
        }
    }

    /// Handle a mouse event against the hit areas of the last frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row) {
                    self.handle_click(action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_areas.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollUp => self.scroll_log_up(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollDown => self.scroll_log_down(WHEEL_SCROLL_LINES),
            _ => {}
        }
    }

    pub fn handle_click(&mut self, action: ClickAction) {
        match action {
            ClickAction::TriggerScenario(index) => {
                self.selected = index;
                self.trigger_scenario(index);
            }
            ClickAction::OpenDashboard(dashboard) => self.open_dashboard(dashboard),
        }
    }
}
