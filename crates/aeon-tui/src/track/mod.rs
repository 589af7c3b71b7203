//! Timeline track rendering and geometry.

mod layout;
mod widget;

pub use layout::{TrackLayout, UNITS_PER_CELL};
pub use widget::TrackWidget;
