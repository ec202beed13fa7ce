//! Scenario selection and event log scrolling.

use super::App;

/// Lines moved per mouse wheel notch.
pub const WHEEL_SCROLL_LINES: usize = 3;

impl App {
    pub fn select_next(&mut self) {
        if self.scenarios.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.scenarios.len();
        self.mark_dirty();
    }

    pub fn select_previous(&mut self) {
        if self.scenarios.is_empty() {
            return;
        }
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.scenarios.len() - 1);
        self.mark_dirty();
    }

    /// Rows moved by PageUp / PageDown.
    fn page_size(&self) -> usize {
        self.log_viewport_height.saturating_sub(1).max(1)
    }

    pub fn scroll_log_up(&mut self, lines: usize) {
        self.log.scroll_up(lines);
        self.mark_dirty();
    }

    pub fn scroll_log_down(&mut self, lines: usize) {
        self.log.scroll_down(lines);
        self.mark_dirty();
    }

    pub fn page_log_up(&mut self) {
        self.scroll_log_up(self.page_size());
    }

    pub fn page_log_down(&mut self) {
        self.scroll_log_down(self.page_size());
    }

    /// Jump to the oldest line.
    pub fn scroll_log_to_top(&mut self) {
        self.scroll_log_up(self.log.len());
    }

    /// Jump to the newest line and resume following.
    pub fn follow_log(&mut self) {
        self.log.follow_tail();
        self.mark_dirty();
    }
}
