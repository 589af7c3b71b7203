//! Bottom status bar with a mode badge, key hints, and right-aligned text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::text::visual_width;
use crate::theme::Theme;

/// A single key binding hint, rendered as `[key] action`.
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// One-row status bar: mode badge on the left, key hints after it, and a
/// free-form status string aligned to the right edge.
pub struct StatusBar<'a> {
    mode: &'a str,
    hints: Vec<KeyHint>,
    right: String,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: &'a str, theme: &'a Theme) -> Self {
        Self {
            mode,
            hints: Vec::new(),
            right: String::new(),
            theme,
        }
    }

    #[must_use]
    pub fn hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    #[must_use]
    pub fn right(mut self, right: impl Into<String>) -> Self {
        self.right = right.into();
        self
    }
}

impl Widget for StatusBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let y = area.y;

        for x in area.left()..area.right() {
            buf[(x, y)].set_char(' ').set_bg(self.theme.surface);
        }

        let mode_text = format!(" {} ", self.mode);
        let mode_style = Style::default()
            .fg(self.theme.base)
            .bg(self.theme.primary)
            .add_modifier(Modifier::BOLD);
        buf.set_stringn(area.x, y, &mode_text, area.width as usize, mode_style);

        let right_width = visual_width(&self.right) as u16;
        let right_x = area.right().saturating_sub(right_width + 1);

        let key_style = Style::default().fg(self.theme.primary);
        let action_style = Style::default().fg(self.theme.subtext);

        let mut x = area.x + (visual_width(&mode_text) as u16).min(area.width) + 1;
        for hint in &self.hints {
            let key = format!("[{}]", hint.key);
            let action = format!(" {}  ", hint.action);
            let needed = (visual_width(&key) + visual_width(&action)) as u16;
            if x.saturating_add(needed) >= right_x {
                break;
            }
            buf.set_string(x, y, &key, key_style);
            x += visual_width(&key) as u16;
            buf.set_string(x, y, &action, action_style);
            x += visual_width(&action) as u16;
        }

        if right_width > 0 && right_x >= x {
            buf.set_string(right_x, y, &self.right, action_style);
        }
    }
}
