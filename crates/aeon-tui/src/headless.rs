//! Headless runner: the full application loop against an in-memory
//! terminal, driven by actions instead of key events.
//!
//! Integration tests (and scripts) send [`Action`]s through the returned
//! handle and observe rendered frames plus a snapshot of the interesting
//! state after every draw. Must be called from within a tokio runtime.

use std::path::PathBuf;
use std::time::Duration;

use aeon_core::Catalog;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use tokio::sync::{mpsc, watch};

use crate::app::App;
use crate::event::Action;
use crate::screens;

pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// Snapshot of the application published after each frame.
#[derive(Debug, Clone, Default)]
pub struct HeadlessState {
    /// The rendered frame, rows joined with newlines, trailing blanks trimmed.
    pub screen_contents: String,
    /// Id of the epoch the viewer is open on, if any.
    pub open_epoch: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    pub width: u16,
    pub height: u16,
    /// How long to wait for an action before emitting a tick.
    pub tick_rate: Duration,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate: Duration::from_millis(50),
        }
    }
}

/// Control handle for a headless session.
pub struct HeadlessHandle {
    action_tx: mpsc::UnboundedSender<Action>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Queue an action. Returns `false` once the session has ended.
    pub fn send_action(&self, action: Action) -> bool {
        self.action_tx.send(action).is_ok()
    }

    /// The most recently published state.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Wait for the next published state.
    pub async fn wait_for_change(&mut self) -> Option<HeadlessState> {
        self.state_rx.changed().await.ok()?;
        Some(self.state_rx.borrow().clone())
    }

    /// Wait until `condition` holds, checking the current state first.
    pub async fn wait_for(
        &mut self,
        mut condition: impl FnMut(&HeadlessState) -> bool,
    ) -> Option<HeadlessState> {
        loop {
            {
                let state = self.state_rx.borrow();
                if condition(&state) {
                    return Some(state.clone());
                }
            }
            self.state_rx.changed().await.ok()?;
        }
    }

    /// Wait until the rendered frame contains `needle`.
    pub async fn wait_for_text(&mut self, needle: &str) -> Option<HeadlessState> {
        self.wait_for(|state| state.screen_contents.contains(needle))
            .await
    }

    pub fn has_quit(&self) -> bool {
        self.state_rx.borrow().should_quit
    }
}

/// Start the application loop on a [`TestBackend`] terminal.
pub fn run_tui_headless(
    catalog: Catalog,
    prefs_path: impl Into<PathBuf>,
    config: HeadlessConfig,
) -> std::io::Result<HeadlessHandle> {
    let backend = TestBackend::new(config.width, config.height);
    let mut terminal = Terminal::new(backend)?;
    let mut app = App::new(catalog, prefs_path);
    app.terminal_size = (config.width, config.height);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    tokio::spawn(async move {
        loop {
            let drew = terminal.draw(|frame| {
                let area = frame.area();
                screens::render_app(&app, area, frame.buffer_mut());
            });
            if drew.is_err() {
                break;
            }

            let state = HeadlessState {
                screen_contents: buffer_to_string(terminal.backend().buffer()),
                open_epoch: app.viewer.current_id().map(String::from),
                show_help: app.show_help,
                should_quit: app.should_quit,
            };
            if state_tx.send(state).is_err() {
                break;
            }
            if app.should_quit {
                break;
            }

            let action = tokio::select! {
                Some(action) = action_rx.recv() => action,
                () = tokio::time::sleep(config.tick_rate) => Action::None,
            };
            if action == Action::None {
                app.tick();
            } else {
                app.handle_action(action);
            }
        }
    });

    Ok(HeadlessHandle {
        action_tx,
        state_rx,
    })
}

/// Flatten a buffer to text, trimming trailing spaces on each row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        let row: String = (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out.trim_end_matches('\n').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_headless_open_navigate_close_quit() {
        let dir = tempfile::tempdir().unwrap();
        let mut handle = run_tui_headless(
            Catalog::builtin(),
            dir.path().join("prefs.json"),
            HeadlessConfig::default(),
        )
        .unwrap();

        handle.wait_for_text("Planck Epoch").await.unwrap();

        handle.send_action(Action::Epoch(0));
        let state = handle
            .wait_for(|s| s.open_epoch.as_deref() == Some("planck-epoch"))
            .await
            .unwrap();
        assert!(state.screen_contents.contains("Planck Epoch (1/12)"));

        handle.send_action(Action::Right);
        handle
            .wait_for(|s| s.open_epoch.as_deref() == Some("grand-unification"))
            .await
            .unwrap();

        handle.send_action(Action::Back);
        handle.wait_for(|s| s.open_epoch.is_none()).await.unwrap();

        handle.send_action(Action::Quit);
        handle.wait_for(|s| s.should_quit).await.unwrap();
        assert!(handle.has_quit());
    }

    #[tokio::test]
    async fn test_headless_zoom_reflected_in_status_bar() {
        let dir = tempfile::tempdir().unwrap();
        let mut handle = run_tui_headless(
            Catalog::builtin(),
            dir.path().join("prefs.json"),
            HeadlessConfig::default(),
        )
        .unwrap();

        handle.wait_for_text("Zoom 100%").await.unwrap();
        handle.send_action(Action::ZoomIn);
        handle.wait_for_text("Zoom 120%").await.unwrap();
        handle.send_action(Action::ResetView);
        handle.wait_for_text("Zoom 100%").await.unwrap();
    }

    #[tokio::test]
    async fn test_headless_help_overlay_toggles() {
        let dir = tempfile::tempdir().unwrap();
        let mut handle = run_tui_headless(
            Catalog::builtin(),
            dir.path().join("prefs.json"),
            HeadlessConfig::default(),
        )
        .unwrap();

        handle.send_action(Action::Help);
        let state = handle.wait_for(|s| s.show_help).await.unwrap();
        assert!(state.screen_contents.contains("[Press any key to close]"));

        // Any key closes the overlay without acting on the timeline
        handle.send_action(Action::Down);
        let state = handle.wait_for(|s| !s.show_help).await.unwrap();
        assert!(state.open_epoch.is_none());
    }
}
