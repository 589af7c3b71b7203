//! Screen rendering.
//!
//! [`render_app`] composes the whole frame: the timeline screen, the epoch
//! panel overlay when the viewer is open, the status bar, and the help
//! overlay on top. The terminal loop, the headless harness, and the tests
//! all draw through it.

use aeon_core::track::DEFAULT_WIDTH;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::app::App;
use crate::layout::{centered_fixed, main_layout, MIN_HEIGHT, MIN_WIDTH};
use crate::widgets::{KeyHint, StatusBar};

pub(crate) mod browser;
pub(crate) mod detail;

pub use browser::BrowserScreen;
pub use detail::DetailScreen;

/// A renderable screen.
pub trait Screen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render one full frame of the application.
pub(crate) fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(app, area, buf);
        return;
    }

    let (content, status_area) = main_layout(area);
    BrowserScreen.render(app, content, buf);
    if app.viewer.is_open() {
        DetailScreen.render(app, content, buf);
    }
    render_status_bar(app, status_area, buf);

    if app.show_help {
        render_help_overlay(app, area, buf);
    }
}

fn render_status_bar(app: &App, area: Rect, buf: &mut Buffer) {
    let right = match &app.notification {
        Some(text) => format!("{} {text}", app.icons.info()),
        None => format!("Zoom {:.0}%", app.track.width() / DEFAULT_WIDTH * 100.0),
    };
    let (mode, hints) = if app.viewer.is_open() {
        (
            "Epoch",
            vec![
                KeyHint::new("h/l", "Prev/Next"),
                KeyHint::new("y", "Copy"),
                KeyHint::new("Esc", "Close"),
            ],
        )
    } else {
        (
            "Browse",
            vec![
                KeyHint::new("Enter", "Open"),
                KeyHint::new("+/-", "Zoom"),
                KeyHint::new("t", "Theme"),
                KeyHint::new("?", "Help"),
            ],
        )
    };
    StatusBar::new(mode, &app.theme)
        .hints(hints)
        .right(right)
        .render(area, buf);
}

fn render_too_small(app: &App, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{} Terminal too small", app.icons.warning()),
            Style::default().fg(app.theme.warning),
        )),
        Line::from(Span::styled(
            format!("Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}"),
            Style::default().fg(app.theme.subtext),
        )),
    ];
    let rect = centered_fixed(area.width, 2, area);
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(rect, buf);
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn render_help_overlay(app: &App, area: Rect, buf: &mut Buffer) {
    let help = "\
Timeline
  Enter       open the selected epoch
  1-9         open an epoch by number
  j/k, arrows move the selection
  +/-         zoom the track in or out
  0           reset zoom and scroll
  t           toggle dark mode

Epoch panel
  h/l         previous or next epoch
  j/k         scroll the description
  y           copy the description
  Esc         close the panel

General
  ?           toggle this help
  q, Ctrl+C   quit

[Press any key to close]";

    let height = help.lines().count() as u16 + 2;
    let rect = centered_fixed(46, height, area);
    Clear.render(rect, buf);
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_set(app.borders.focused())
        .border_style(Style::default().fg(app.theme.border_focused))
        .style(Style::default().bg(app.theme.base));
    let inner = block.inner(rect);
    block.render(rect, buf);
    Paragraph::new(help)
        .style(Style::default().fg(app.theme.text))
        .render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_frame(app: &App, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        render_app(app, area, &mut buf);
        (0..height)
            .map(|y| {
                let row: String = (0..width).map(|x| buf[(x, y)].symbol()).collect();
                row.trim_end().to_string() + "\n"
            })
            .collect()
    }

    #[test]
    fn test_frame_shows_timeline_and_status() {
        let app = App::new_for_test();
        let screen = render_frame(&app, 80, 24);
        assert!(screen.contains("Timeline"));
        assert!(screen.contains(" Browse "));
        assert!(screen.contains("Zoom 100%"));
    }

    #[test]
    fn test_frame_overlays_open_panel() {
        let mut app = App::new_for_test();
        app.open_epoch("planck-epoch");
        let screen = render_frame(&app, 80, 24);
        assert!(screen.contains("Planck Epoch (1/12)"));
        assert!(screen.contains(" Epoch "));
        assert!(screen.contains("[Esc] Close"));
    }

    #[test]
    fn test_frame_shows_notification_over_zoom() {
        let mut app = App::new_for_test();
        app.set_notification("Unknown epoch id: nope");
        let screen = render_frame(&app, 80, 24);
        assert!(screen.contains("Unknown epoch id: nope"));
        assert!(!screen.contains("Zoom 100%"));
    }

    #[test]
    fn test_frame_too_small_guard() {
        let app = App::new_for_test();
        let screen = render_frame(&app, 30, 8);
        assert!(screen.contains("Terminal too small"));
        assert!(screen.contains("Resize to at least 40x12"));
        assert!(!screen.contains("Timeline"));
    }

    #[test]
    fn test_frame_help_overlay_on_top() {
        let mut app = App::new_for_test();
        app.show_help = true;
        let screen = render_frame(&app, 80, 24);
        assert!(screen.contains("[Press any key to close]"));
        assert!(screen.contains("toggle this help"));
    }
}
