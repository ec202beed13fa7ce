//! Clickable regions of the dashboard.
//!
//! Components register hit areas while rendering, and the event loop queries
//! the registry to decide what a mouse click does.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::app::Dashboard;

/// Action triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Trigger the scenario at this index of the list
    TriggerScenario(usize),
    /// Open an external dashboard
    OpenDashboard(Dashboard),
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry of the hit areas of the last rendered frame.
///
/// Cleared at the start of each render. Later registrations win where areas
/// overlap.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    /// Area under the mouse as of the last move. Survives `clear` so the
    /// next frame can style it before the area is registered again.
    hovered: Option<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all areas. Hover is kept so a redraw does not flicker; it is
    /// re-resolved on the next mouse move.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action)
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hover state changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let hovered = self.find_index(x, y).map(|i| self.areas[i].clone());
        let changed = hovered.as_ref().map(|a| (a.rect, a.action))
            != self.hovered.as_ref().map(|a| (a.rect, a.action));
        self.hovered = hovered;
        changed
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    /// Hover style for `rect` if it is the hovered area.
    pub fn hover_style(&self, rect: Rect) -> Option<Style> {
        let area = self.hovered.as_ref()?;
        if area.rect == rect {
            area.hover_style
        } else {
            None
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
