//! Mouse interaction for the dashboard.

mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
