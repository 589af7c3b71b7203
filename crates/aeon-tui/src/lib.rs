//! Terminal UI for the aeon cosmic timeline browser.
//!
//! The timeline screen shows a zoomable horizontal track of cosmic history
//! with an epoch list under it; opening an epoch raises a modal panel with
//! its description and stats. All state changes flow through
//! [`Action`]s, so the same logic runs against a real terminal
//! ([`run_tui`]) or an in-memory one ([`headless`]).

mod app;
mod event;
mod layout;
mod screens;
mod text;
mod theme;
mod track;
mod widgets;

pub mod headless;

#[cfg(test)]
pub mod test_utils;

pub use aeon_core;
pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};

use std::io;
use std::path::PathBuf;

use aeon_core::Catalog;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Event poll interval in milliseconds (4 ticks per second).
const TICK_RATE_MS: u64 = 250;

/// Puts the terminal into raw mode for the TUI and restores it on drop,
/// including on panic and early error returns.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            crossterm::cursor::Show
        );
    }
}

/// Run the timeline browser on the attached terminal until the user quits.
pub async fn run_tui(catalog: Catalog, prefs_path: PathBuf) -> io::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(catalog, prefs_path);
    let size = terminal.size()?;
    app.terminal_size = (size.width, size.height);

    let mut events = EventHandler::new(TICK_RATE_MS);
    run_loop(&mut terminal, &mut app, &mut events).await
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| {
            screens::render_app(app, frame.area(), frame.buffer_mut());
        })?;

        match events.next().await {
            Some(Event::Key(key)) => app.handle_action(key_to_action(key)),
            Some(Event::Mouse(mouse)) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    app.handle_click(mouse.column, mouse.row);
                }
                MouseEventKind::ScrollUp => app.handle_wheel(mouse.column, mouse.row, true),
                MouseEventKind::ScrollDown => app.handle_wheel(mouse.column, mouse.row, false),
                _ => {}
            },
            Some(Event::Resize(width, height)) => app.terminal_size = (width, height),
            Some(Event::Tick) => app.tick(),
            None => break,
        }
    }
    Ok(())
}

/// Returns the TUI crate version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}


#[cfg(test)]
mod navigation_tests {
    use aeon_core::track::{DEFAULT_WIDTH, MAX_WIDTH, MIN_WIDTH};
    use ratatui::style::Color;

    use crate::event::Action;
    use crate::test_utils::create_test_app;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_enter_opens_selected_epoch() {
        let mut app = create_test_app();
        app.handle_action(Action::Select);
        assert_eq!(app.viewer.current_id(), Some("planck-epoch"));
    }

    #[test]
    fn test_escape_closes_panel_then_quits() {
        let mut app = create_test_app();
        app.handle_action(Action::Select);
        app.handle_action(Action::Back);
        assert!(!app.viewer.is_open());
        assert!(!app.should_quit);

        app.handle_action(Action::Back);
        assert!(app.should_quit);
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut app = create_test_app();
        app.open_epoch("inflation");
        let viewer = app.viewer.clone();
        let selected = app.selected;
        app.open_epoch("inflation");
        assert_eq!(app.viewer, viewer);
        assert_eq!(app.selected, selected);
    }

    #[test]
    fn test_unknown_id_notifies_and_keeps_state() {
        let mut app = create_test_app();
        app.open_epoch("quantum-foam");
        assert!(!app.viewer.is_open());
        assert_eq!(
            app.notification.as_deref(),
            Some("Unknown epoch id: quantum-foam")
        );

        app.open_epoch("hadron-epoch");
        app.open_epoch("quantum-foam");
        assert_eq!(app.viewer.current_id(), Some("hadron-epoch"));
    }

    #[test]
    fn test_arrows_do_nothing_while_closed() {
        let mut app = create_test_app();
        app.handle_action(Action::Right);
        app.handle_action(Action::Left);
        assert!(!app.viewer.is_open());
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_arrows_step_and_clamp_while_open() {
        let mut app = create_test_app();
        app.open_epoch("planck-epoch");

        app.handle_action(Action::Left);
        assert_eq!(app.viewer.current_id(), Some("planck-epoch"));

        app.handle_action(Action::Right);
        assert_eq!(app.viewer.current_id(), Some("grand-unification"));

        app.open_epoch("dark-energy-era");
        app.handle_action(Action::Right);
        assert_eq!(app.viewer.current_id(), Some("dark-energy-era"));
    }

    #[test]
    fn test_navigation_syncs_selection_and_centers_track() {
        let mut app = create_test_app();
        app.open_epoch("dark-energy-era");
        assert_eq!(app.selected, 11);
        // Track viewport is 78 cells (780 units); centering on the last
        // slot clamps to max scroll, 1000 - 780.
        assert_close(app.track.scroll(), 220.0);
    }

    #[test]
    fn test_zoom_clamps_and_is_idempotent_at_bounds() {
        let mut app = create_test_app();
        app.handle_action(Action::ZoomOut);
        assert_close(app.track.width(), MIN_WIDTH);
        app.handle_action(Action::ZoomOut);
        assert_close(app.track.width(), MIN_WIDTH);

        for _ in 0..10 {
            app.handle_action(Action::ZoomIn);
        }
        assert_close(app.track.width(), MAX_WIDTH);
        app.handle_action(Action::ZoomIn);
        assert_close(app.track.width(), MAX_WIDTH);
    }

    #[test]
    fn test_reset_restores_zoom_and_scroll() {
        let mut app = create_test_app();
        app.handle_action(Action::ZoomIn);
        app.open_epoch("dark-energy-era");
        assert!(app.track.scroll() > 0.0);

        app.handle_action(Action::ResetView);
        assert_close(app.track.width(), DEFAULT_WIDTH);
        assert_close(app.track.scroll(), 0.0);
    }

    #[test]
    fn test_zoom_works_while_panel_is_open() {
        let mut app = create_test_app();
        app.open_epoch("quark-epoch");
        app.handle_action(Action::ZoomIn);
        assert_close(app.track.width(), 1200.0);
        assert!(app.viewer.is_open());
    }

    #[test]
    fn test_digit_jump_opens_nth_epoch() {
        let mut app = create_test_app();
        app.handle_action(Action::Epoch(3));
        assert_eq!(app.viewer.current_id(), Some("quark-epoch"));
        assert_eq!(app.selected, 3);
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut app = create_test_app();
        app.handle_action(Action::Up);
        assert_eq!(app.selected, 0);

        for _ in 0..20 {
            app.handle_action(Action::Down);
        }
        assert_eq!(app.selected, 11);
    }

    #[test]
    fn test_detail_scroll_is_bounded() {
        let mut app = create_test_app();
        app.open_epoch("recombination");

        for _ in 0..100 {
            app.handle_action(Action::Down);
        }
        let bottom = app.detail_scroll;
        assert!(bottom < 100);
        app.handle_action(Action::Down);
        assert_eq!(app.detail_scroll, bottom);

        for _ in 0..200 {
            app.handle_action(Action::Up);
        }
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn test_navigating_resets_detail_scroll() {
        let mut app = create_test_app();
        app.open_epoch("recombination");
        app.handle_action(Action::Down);
        app.handle_action(Action::Down);
        assert!(app.detail_scroll > 0);

        app.handle_action(Action::Right);
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn test_help_closes_before_quit() {
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        assert!(app.show_help);

        app.handle_action(Action::Quit);
        assert!(!app.show_help);
        assert!(!app.should_quit);

        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_any_key_dismisses_help_without_acting() {
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        app.handle_action(Action::Down);
        assert!(!app.show_help);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_theme_toggle_flips_prefs_and_palette() {
        let mut app = create_test_app();
        assert!(app.prefs.dark_mode);

        app.handle_action(Action::ToggleTheme);
        assert!(!app.prefs.dark_mode);
        assert_eq!(app.theme.base, Color::Rgb(239, 241, 245));

        app.handle_action(Action::ToggleTheme);
        assert!(app.prefs.dark_mode);
        assert_eq!(app.theme.base, Color::Rgb(30, 30, 46));
    }

    #[test]
    fn test_click_outside_panel_closes_it() {
        let mut app = create_test_app();
        app.open_epoch("planck-epoch");
        app.handle_click(0, 0);
        assert!(!app.viewer.is_open());
    }

    #[test]
    fn test_click_inside_panel_keeps_it_open() {
        let mut app = create_test_app();
        app.open_epoch("planck-epoch");
        app.handle_click(40, 10);
        assert!(app.viewer.is_open());
    }

    #[test]
    fn test_click_on_track_opens_epoch_under_cursor() {
        let mut app = create_test_app();
        app.handle_click(5, 2);
        assert_eq!(app.viewer.current_id(), Some("planck-epoch"));
    }

    #[test]
    fn test_click_on_list_row_opens_it() {
        let mut app = create_test_app();
        app.handle_click(5, 7);
        assert_eq!(app.viewer.current_id(), Some("grand-unification"));
    }

    #[test]
    fn test_wheel_over_track_pans() {
        let mut app = create_test_app();
        app.handle_wheel(5, 2, false);
        assert!(app.track.scroll() > 0.0);

        for _ in 0..100 {
            app.handle_wheel(5, 2, true);
        }
        assert_close(app.track.scroll(), 0.0);
    }

    #[test]
    fn test_notification_expires_after_ticks() {
        let mut app = create_test_app();
        app.open_epoch("quantum-foam");
        assert!(app.notification.is_some());

        for _ in 0..12 {
            app.tick();
        }
        assert!(app.notification.is_none());
    }
}
