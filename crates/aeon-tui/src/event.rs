//! Terminal event handling.
//!
//! A background thread polls crossterm and forwards events over a channel,
//! emitting [`Event::Tick`] at the configured rate when the terminal is
//! idle. Key events are mapped to [`Action`]s so the application logic can
//! be driven without a terminal (see [`crate::headless`]).

use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use tokio::sync::mpsc;

/// Events delivered to the main loop.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// A mouse click, scroll, or drag.
    Mouse(MouseEvent),
    /// Terminal resized to (width, height).
    Resize(u16, u16),
    /// Nothing happened for one tick interval.
    Tick,
}

/// Polls crossterm on a dedicated thread and forwards events.
#[derive(Debug)]
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Spawn the polling thread with the given tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);
        std::thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                let forwarded = match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                    Ok(CrosstermEvent::Resize(width, height)) => Some(Event::Resize(width, height)),
                    _ => None,
                };
                if let Some(event) = forwarded {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            } else if tx.send(Event::Tick).is_err() {
                break;
            }
        });
        Self { rx }
    }

    /// Receive the next event; `None` once the polling thread has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Application-level actions, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    /// Close the epoch panel, or quit from the timeline.
    Back,
    /// Open the selected epoch.
    Select,
    Up,
    Down,
    Left,
    Right,
    ZoomIn,
    ZoomOut,
    ResetView,
    ToggleTheme,
    /// Copy the open epoch description to the clipboard.
    Copy,
    /// Jump directly to the epoch at this catalog index.
    Epoch(usize),
    None,
}

/// Map a key event to an action.
pub fn key_to_action(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::Back,
        KeyCode::Enter => Action::Select,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Left | KeyCode::Char('h') => Action::Left,
        KeyCode::Right | KeyCode::Char('l') => Action::Right,
        KeyCode::Char('+' | '=') => Action::ZoomIn,
        KeyCode::Char('-') => Action::ZoomOut,
        KeyCode::Char('0') => Action::ResetView,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('y') => Action::Copy,
        KeyCode::Char('1') => Action::Epoch(0),
        KeyCode::Char('2') => Action::Epoch(1),
        KeyCode::Char('3') => Action::Epoch(2),
        KeyCode::Char('4') => Action::Epoch(3),
        KeyCode::Char('5') => Action::Epoch(4),
        KeyCode::Char('6') => Action::Epoch(5),
        KeyCode::Char('7') => Action::Epoch(6),
        KeyCode::Char('8') => Action::Epoch(7),
        KeyCode::Char('9') => Action::Epoch(8),
        _ => Action::None,
    }
}
