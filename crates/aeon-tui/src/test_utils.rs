//! Shared helpers for rendering tests.

use ratatui::{backend::TestBackend, Terminal};

use crate::app::App;
use crate::screens;

pub use crate::headless::buffer_to_string;

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub fn create_test_app() -> App {
    App::new_for_test()
}

pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("test terminal")
}

/// Render a full frame at the default test size.
pub fn render_screen_to_string(app: &App) -> String {
    render_screen_to_string_sized(app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render a full frame at an explicit size.
pub fn render_screen_to_string_sized(app: &App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|frame| {
            screens::render_app(app, frame.area(), frame.buffer_mut());
        })
        .expect("draw");
    buffer_to_string(terminal.backend().buffer())
}
