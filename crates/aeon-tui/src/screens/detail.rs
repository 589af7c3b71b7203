//! Epoch panel: a centered modal over the timeline showing one epoch.

use aeon_core::EpochRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::app::App;
use crate::layout::centered_fixed;
use crate::text::{render_markdown, truncate_to_width, visual_width, wrap_text};
use crate::theme::Theme;

use super::Screen;

const PANEL_WIDTH: u16 = 64;
const PANEL_HEIGHT: u16 = 18;

/// Where the panel sits within the content area. Click routing treats
/// everything outside this rectangle as "outside".
pub(crate) fn modal_area(content: Rect) -> Rect {
    let width = PANEL_WIDTH.min(content.width.saturating_sub(4));
    let height = PANEL_HEIGHT.min(content.height.saturating_sub(2));
    centered_fixed(width, height, content)
}

/// Usable text width inside the panel (border plus one padding column per
/// side). Scroll bounds are computed against lines wrapped to this width.
pub(crate) fn body_width(content: Rect) -> usize {
    usize::from(modal_area(content).width.saturating_sub(4))
}

/// The scrollable panel body: header line, stat rows, then the rendered
/// markdown description.
pub(crate) fn body_lines(record: &EpochRecord, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let sep = || Span::styled("  \u{b7}  ", Style::default().fg(theme.muted)); // ·
    lines.push(Line::from(vec![
        Span::styled(record.time.clone(), Style::default().fg(theme.secondary)),
        sep(),
        Span::styled(record.temperature.clone(), Style::default().fg(theme.warning)),
        sep(),
        Span::styled(record.era.label(), Style::default().fg(theme.era(record.era))),
    ]));
    lines.push(Line::from(""));

    if !record.stats.is_empty() {
        let label_width = record
            .stats
            .iter()
            .map(|(label, _)| visual_width(label))
            .max()
            .unwrap_or(0);
        for (label, value) in &record.stats {
            let avail = width.saturating_sub(label_width + 2).max(16);
            for (row, part) in wrap_text(value, avail).into_iter().enumerate() {
                let lead = if row == 0 {
                    format!("{label:>label_width$}  ")
                } else {
                    " ".repeat(label_width + 2)
                };
                lines.push(Line::from(vec![
                    Span::styled(lead, Style::default().fg(theme.muted)),
                    Span::styled(part, Style::default().fg(theme.text)),
                ]));
            }
        }
        lines.push(Line::from(""));
    }

    lines.extend(render_markdown(&record.description, width, theme));
    lines
}

pub struct DetailScreen;

impl Screen for DetailScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let Some(record) = app.open_record() else {
            return;
        };
        let modal = modal_area(area);
        if modal.width < 8 || modal.height < 5 {
            return;
        }
        Clear.render(modal, buf);

        // Degrades to a bare title if the open id has no catalog position.
        let title = match app.catalog.index_of(&record.id) {
            Some(index) => format!(" {} ({}/{}) ", record.title, index + 1, app.catalog.len()),
            None => format!(" {} ", record.title),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_set(app.borders.focused())
            .border_style(Style::default().fg(app.theme.border_focused))
            .style(Style::default().bg(app.theme.base));
        let inner = block.inner(modal);
        block.render(modal, buf);

        let body = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(1),
        );
        let lines = body_lines(record, usize::from(body.width), &app.theme);
        let total = lines.len();
        let visible: Vec<Line<'static>> = lines
            .into_iter()
            .skip(app.detail_scroll)
            .take(usize::from(body.height))
            .collect();
        Paragraph::new(visible).render(body, buf);

        render_hint_row(app, inner, total, buf);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn render_hint_row(app: &App, inner: Rect, total_lines: usize, buf: &mut Buffer) {
    if inner.height < 2 {
        return;
    }
    let y = inner.bottom() - 1;
    let scrollable = total_lines > usize::from(inner.height.saturating_sub(1));
    let hint = if scrollable {
        "[h/l] epochs  [j/k] scroll  [y] copy  [Esc] close"
    } else {
        "[h/l] epochs  [y] copy  [Esc] close"
    };
    let hint = truncate_to_width(hint, usize::from(inner.width));
    let x = inner.x + (usize::from(inner.width).saturating_sub(visual_width(&hint)) / 2) as u16;
    buf.set_string(x, y, &hint, Style::default().fg(app.theme.muted));
}
