//! Application state and action handling.

use std::path::PathBuf;

use aeon_core::{Catalog, Direction, EpochRecord, Prefs, TrackView, Viewer};
use ratatui::layout::{Position, Rect};

use crate::event::Action;
use crate::layout::main_layout;
use crate::screens::{browser, detail};
use crate::theme::{BorderSet, IconMode, IconSet, Theme};
use crate::track::{TrackLayout, UNITS_PER_CELL};

/// How long a notification stays up, in ticks (4 ticks per second).
const NOTIFICATION_TICKS: u8 = 12;

/// Wheel scroll step over the track, in track units.
const WHEEL_STEP: f64 = 4.0 * UNITS_PER_CELL;

/// Top-level application state.
pub struct App {
    pub should_quit: bool,
    pub show_help: bool,
    /// The immutable epoch catalog.
    pub catalog: Catalog,
    /// Modal viewer state: closed, or open on one epoch.
    pub viewer: Viewer,
    /// Zoom/pan state of the timeline track.
    pub track: TrackView,
    /// Index of the highlighted epoch in catalog order.
    pub selected: usize,
    /// Scroll offset (in display rows) inside the open epoch panel.
    pub detail_scroll: usize,
    pub theme: Theme,
    pub icons: IconSet,
    pub borders: BorderSet,
    pub prefs: Prefs,
    /// Transient message shown in the status bar.
    pub notification: Option<String>,
    /// Last known terminal size, updated on resize events.
    pub terminal_size: (u16, u16),
    notification_ttl: u8,
    prefs_path: PathBuf,
}

impl App {
    pub fn new(catalog: Catalog, prefs_path: impl Into<PathBuf>) -> Self {
        let prefs_path = prefs_path.into();
        let prefs = Prefs::load_or_default(&prefs_path);
        let mode = IconMode::detect();
        Self {
            should_quit: false,
            show_help: false,
            catalog,
            viewer: Viewer::new(),
            track: TrackView::new(),
            selected: 0,
            detail_scroll: 0,
            theme: Self::theme_for(prefs),
            icons: IconSet::new(mode),
            borders: BorderSet::new(mode),
            prefs,
            notification: None,
            terminal_size: (80, 24),
            notification_ttl: 0,
            prefs_path,
        }
    }

    /// Build an app with the builtin catalog and a throwaway prefs file,
    /// pinned to the Unicode icon set so renders do not depend on the host
    /// environment.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static SEQ: AtomicU64 = AtomicU64::new(0);

        let seq = SEQ.fetch_add(1, Ordering::Relaxed);
        let prefs_path = std::env::temp_dir()
            .join(format!("aeon-test-{}-{seq}", std::process::id()))
            .join("prefs.json");
        let mut app = Self::new(Catalog::builtin(), prefs_path);
        app.theme = Theme::mocha();
        app.icons = IconSet::new(IconMode::Unicode);
        app.borders = BorderSet::new(IconMode::Unicode);
        app
    }

    fn theme_for(prefs: Prefs) -> Theme {
        if std::env::var_os("AEON_HIGH_CONTRAST").is_some() {
            Theme::high_contrast()
        } else if prefs.dark_mode {
            Theme::mocha()
        } else {
            Theme::latte()
        }
    }

    /// The record the viewer is currently open on, if any.
    pub fn open_record(&self) -> Option<&EpochRecord> {
        self.viewer
            .current_id()
            .and_then(|id| self.catalog.lookup(id))
    }

    /// Open the epoch with `id`: syncs the selection, recenters the track,
    /// and resets the panel scroll. An unknown id is reported in the status
    /// bar and changes nothing else.
    pub fn open_epoch(&mut self, id: &str) {
        if self.viewer.open(&self.catalog, id) {
            self.detail_scroll = 0;
            self.sync_selection();
            self.center_track_on_selection();
        } else {
            self.set_notification(format!("Unknown epoch id: {id}"));
        }
    }

    /// Step the open epoch panel to a neighbor, clamped at both ends.
    pub fn navigate(&mut self, direction: Direction) {
        let before = self.viewer.current_id().map(String::from);
        self.viewer.navigate(&self.catalog, direction);
        if self.viewer.current_id() != before.as_deref() {
            self.detail_scroll = 0;
            self.sync_selection();
            self.center_track_on_selection();
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // Any other key dismisses the help overlay
        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Action::ToggleTheme => self.toggle_theme(),
            Action::ZoomIn => self.track.zoom_in(),
            Action::ZoomOut => self.track.zoom_out(),
            Action::ResetView => self.track.reset(),
            _ if self.viewer.is_open() => self.handle_panel_action(action),
            _ => self.handle_timeline_action(action),
        }
    }

    fn handle_panel_action(&mut self, action: Action) {
        match action {
            Action::Back => {
                self.viewer.close();
                self.detail_scroll = 0;
            }
            Action::Left => self.navigate(Direction::Previous),
            Action::Right => self.navigate(Direction::Next),
            Action::Up => self.detail_scroll = self.detail_scroll.saturating_sub(1),
            Action::Down => {
                self.detail_scroll = (self.detail_scroll + 1).min(self.max_detail_scroll());
            }
            Action::Copy => self.copy_description(),
            Action::Epoch(index) => self.open_by_index(index),
            _ => {}
        }
    }

    fn handle_timeline_action(&mut self, action: Action) {
        match action {
            Action::Select => {
                if let Some(record) = self.catalog.get(self.selected) {
                    let id = record.id.clone();
                    self.open_epoch(&id);
                }
            }
            Action::Up => {
                self.selected = self.selected.saturating_sub(1);
                self.ensure_selected_visible();
            }
            Action::Down => {
                let last = self.catalog.len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
                self.ensure_selected_visible();
            }
            Action::Epoch(index) => self.open_by_index(index),
            Action::Back => self.should_quit = true,
            // Left/Right step between epochs only while the panel is open
            Action::Left | Action::Right => {}
            _ => {}
        }
    }

    fn open_by_index(&mut self, index: usize) {
        if let Some(record) = self.catalog.get(index) {
            let id = record.id.clone();
            self.open_epoch(&id);
        } else {
            self.set_notification(format!("No epoch {}", index + 1));
        }
    }

    fn toggle_theme(&mut self) {
        self.prefs.dark_mode = !self.prefs.dark_mode;
        self.theme = Self::theme_for(self.prefs);
        if let Err(e) = self.prefs.save(&self.prefs_path) {
            self.set_notification(format!("Could not save preferences: {e}"));
        }
    }

    fn copy_description(&mut self) {
        let Some(record) = self.open_record() else {
            return;
        };
        let title = record.title.clone();
        let text = format!(
            "{}\n{} | {}\n\n{}",
            record.title, record.time, record.temperature, record.description
        );
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.set_text(text) {
                Ok(()) => self.set_notification(format!("Copied {title}")),
                Err(e) => self.set_notification(format!("Clipboard error: {e}")),
            },
            Err(e) => self.set_notification(format!("Clipboard unavailable: {e}")),
        }
    }

    /// Route a left-button press. Clicking outside the open panel closes
    /// it; on the timeline, clicks open the epoch under the cursor.
    pub fn handle_click(&mut self, x: u16, y: u16) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        let position = Position::new(x, y);
        if self.viewer.is_open() {
            if !detail::modal_area(self.content_area()).contains(position) {
                self.viewer.close();
                self.detail_scroll = 0;
            }
            return;
        }

        let rects = browser::browser_layout(self.content_area());
        if rects.track_inner.contains(position) {
            let cell = x - rects.track_inner.x;
            if let Some(index) = self.track_layout().hit_test(cell) {
                self.open_by_index(index);
            }
        } else if rects.list_inner.contains(position) {
            let row = usize::from(y - rects.list_inner.y);
            let offset = browser::list_offset(self.selected, rects.list_inner.height);
            if offset + row < self.catalog.len() {
                self.selected = offset + row;
                self.open_by_index(self.selected);
            }
        }
    }

    /// Route a wheel event: scrolls the open panel, pans the track, or
    /// moves the list selection depending on what is under the cursor.
    pub fn handle_wheel(&mut self, x: u16, y: u16, up: bool) {
        if self.viewer.is_open() {
            if up {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            } else {
                self.detail_scroll = (self.detail_scroll + 1).min(self.max_detail_scroll());
            }
            return;
        }

        let rects = browser::browser_layout(self.content_area());
        if rects.track_inner.contains(Position::new(x, y)) {
            let viewport = f64::from(rects.track_inner.width) * UNITS_PER_CELL;
            let delta = if up { -WHEEL_STEP } else { WHEEL_STEP };
            self.track.scroll_by(delta, viewport);
        } else if up {
            self.selected = self.selected.saturating_sub(1);
            self.ensure_selected_visible();
        } else {
            let last = self.catalog.len().saturating_sub(1);
            self.selected = (self.selected + 1).min(last);
            self.ensure_selected_visible();
        }
    }

    /// Advance time-based state by one tick.
    pub fn tick(&mut self) {
        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }

    pub fn set_notification(&mut self, text: impl Into<String>) {
        self.notification = Some(text.into());
        self.notification_ttl = NOTIFICATION_TICKS;
    }

    fn sync_selection(&mut self) {
        if let Some(index) = self.viewer.current_id().and_then(|id| self.catalog.index_of(id)) {
            self.selected = index;
        }
    }

    fn center_track_on_selection(&mut self) {
        let cells = self.track_viewport_cells();
        let layout = TrackLayout::new(&self.track, cells, self.catalog.len());
        let viewport = f64::from(cells) * UNITS_PER_CELL;
        self.track.center_on(layout.segment_center(self.selected), viewport);
    }

    /// Pan only when the selected slot has drifted off-screen.
    fn ensure_selected_visible(&mut self) {
        let cells = self.track_viewport_cells();
        let layout = TrackLayout::new(&self.track, cells, self.catalog.len());
        if layout.center_cell(self.selected).is_none() {
            let viewport = f64::from(cells) * UNITS_PER_CELL;
            self.track.center_on(layout.segment_center(self.selected), viewport);
        }
    }

    fn max_detail_scroll(&self) -> usize {
        let Some(record) = self.open_record() else {
            return 0;
        };
        let width = detail::body_width(self.content_area());
        detail::body_lines(record, width, &self.theme)
            .len()
            .saturating_sub(1)
    }

    pub(crate) fn track_layout(&self) -> TrackLayout {
        TrackLayout::new(&self.track, self.track_viewport_cells(), self.catalog.len())
    }

    fn track_viewport_cells(&self) -> u16 {
        browser::browser_layout(self.content_area()).track_inner.width
    }

    fn screen_area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_size.0, self.terminal_size.1)
    }

    fn content_area(&self) -> Rect {
        main_layout(self.screen_area()).0
    }
}
