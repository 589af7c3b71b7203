//! The horizontal timeline track.
//!
//! Three rows: an era-colored strip with one numbered slot per epoch, a
//! marker row pointing at the selected slot (with scroll indicators at the
//! edges), and a label row naming the selected epoch.

use aeon_core::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::text::{truncate_to_width, visual_width};
use crate::theme::{IconSet, Theme};

use super::layout::TrackLayout;

pub struct TrackWidget<'a> {
    catalog: &'a Catalog,
    layout: TrackLayout,
    selected: usize,
    theme: &'a Theme,
    icons: &'a IconSet,
}

impl<'a> TrackWidget<'a> {
    pub fn new(
        catalog: &'a Catalog,
        layout: TrackLayout,
        selected: usize,
        theme: &'a Theme,
        icons: &'a IconSet,
    ) -> Self {
        Self {
            catalog,
            layout,
            selected,
            theme,
            icons,
        }
    }

    fn render_strip(&self, area: Rect, buf: &mut Buffer) {
        for (index, record) in self.catalog.records().iter().enumerate() {
            let Some((start, end)) = self.layout.segment_span(index) else {
                continue;
            };
            let accent = self.theme.era(record.era);
            for x in start..end {
                buf[(area.x + x, area.y)].set_char(' ').set_bg(accent);
            }
            let mut style = Style::default().fg(self.theme.base).bg(accent);
            if index == self.selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            let number = format!("{}", index + 1);
            buf.set_stringn(area.x + start, area.y, &number, usize::from(end - start), style);
        }
    }

    fn render_markers(&self, area: Rect, buf: &mut Buffer) {
        let muted = Style::default().fg(self.theme.muted);
        if self.layout.overflow_left() {
            buf.set_string(area.x, area.y, self.icons.more_left(), muted);
        }
        if self.layout.overflow_right() {
            let x = area.x + area.width.saturating_sub(1);
            buf.set_string(x, area.y, self.icons.more_right(), muted);
        }
        if let Some(cell) = self.layout.center_cell(self.selected) {
            let style = Style::default().fg(self.theme.primary);
            buf.set_string(area.x + cell, area.y, self.icons.marker(), style);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_label(&self, area: Rect, buf: &mut Buffer) {
        let Some(record) = self.catalog.records().get(self.selected) else {
            return;
        };
        let sep = " \u{00b7} "; // ·
        let total = visual_width(&record.title) + visual_width(sep) + visual_width(&record.time);
        if total <= usize::from(area.width) {
            let mut x = area.x + ((usize::from(area.width) - total) / 2) as u16;
            let title_style = Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD);
            buf.set_string(x, area.y, &record.title, title_style);
            x += visual_width(&record.title) as u16;
            buf.set_string(x, area.y, sep, Style::default().fg(self.theme.muted));
            x += visual_width(sep) as u16;
            buf.set_string(x, area.y, &record.time, Style::default().fg(self.theme.subtext));
        } else {
            let text = format!("{}{sep}{}", record.title, record.time);
            let text = truncate_to_width(&text, usize::from(area.width));
            buf.set_string(area.x, area.y, &text, Style::default().fg(self.theme.text));
        }
    }
}

impl Widget for TrackWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.render_strip(Rect::new(area.x, area.y, area.width, 1), buf);
        if area.height >= 2 {
            self.render_markers(Rect::new(area.x, area.y + 1, area.width, 1), buf);
        }
        if area.height >= 3 {
            self.render_label(Rect::new(area.x, area.y + 2, area.width, 1), buf);
        }
    }
}
