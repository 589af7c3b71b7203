//! Shared layout helpers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum terminal width required to render the timeline.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height required to render the timeline.
pub const MIN_HEIGHT: u16 = 12;

/// Split the screen into a content area and a one-row status bar.
pub fn main_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Center a fixed-size rectangle within `area`, shrinking to fit.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
