//! Timeline screen: the track strip on top, the epoch list below.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::App;
use crate::text::{truncate_to_width, visual_width};
use crate::track::{TrackLayout, TrackWidget};

use super::Screen;

/// Height of the bordered track pane (three content rows).
const TRACK_PANE_HEIGHT: u16 = 5;

/// Resolved pane rectangles for the timeline screen.
///
/// Mouse routing in [`App`] uses the same function as rendering, so hit
/// targets always line up with what is on screen.
pub(crate) struct BrowserLayout {
    pub track_pane: Rect,
    pub track_inner: Rect,
    pub list_pane: Rect,
    pub list_inner: Rect,
}

pub(crate) fn browser_layout(content: Rect) -> BrowserLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TRACK_PANE_HEIGHT), Constraint::Min(5)])
        .split(content);
    let pane_inner = |pane: Rect| Block::default().borders(Borders::ALL).inner(pane);
    BrowserLayout {
        track_pane: chunks[0],
        track_inner: pane_inner(chunks[0]),
        list_pane: chunks[1],
        list_inner: pane_inner(chunks[1]),
    }
}

/// First visible list row for a given selection, keeping the selection
/// inside a window of `visible` rows.
pub(crate) fn list_offset(selected: usize, visible: u16) -> usize {
    selected.saturating_sub(usize::from(visible).saturating_sub(1))
}

pub struct BrowserScreen;

impl Screen for BrowserScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let rects = browser_layout(area);

        let border_style = Style::default().fg(app.theme.border);
        Block::default()
            .title(" Timeline ")
            .borders(Borders::ALL)
            .border_set(app.borders.normal())
            .border_style(border_style)
            .render(rects.track_pane, buf);
        let layout = TrackLayout::new(&app.track, rects.track_inner.width, app.catalog.len());
        TrackWidget::new(&app.catalog, layout, app.selected, &app.theme, &app.icons)
            .render(rects.track_inner, buf);

        Block::default()
            .title(" Epochs ")
            .borders(Borders::ALL)
            .border_set(app.borders.normal())
            .border_style(border_style)
            .render(rects.list_pane, buf);
        render_list(app, rects.list_inner, buf);
    }
}

fn render_list(app: &App, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let offset = list_offset(app.selected, area.height);
    let width = usize::from(area.width);

    let mut lines = Vec::new();
    for (index, record) in app
        .catalog
        .records()
        .iter()
        .enumerate()
        .skip(offset)
        .take(usize::from(area.height))
    {
        let selected = index == app.selected;

        let prefix = if selected { app.icons.selected() } else { " " };
        let number = format!("{:>2}  ", index + 1);
        let era_label = record.era.label();

        let era_width = visual_width(era_label);
        let time_width = visual_width(&record.time);
        let fixed = 2 + number.len();
        let title_max = width.saturating_sub(fixed + time_width + era_width + 4);
        let title = truncate_to_width(&record.title, title_max);

        let left_width = fixed + visual_width(&title) + 2 + time_width;
        let pad = width.saturating_sub(left_width + era_width);

        let title_style = if selected {
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text)
        };

        let mut line = Line::from(vec![
            Span::styled(format!("{prefix} "), Style::default().fg(app.theme.primary)),
            Span::styled(number, Style::default().fg(app.theme.muted)),
            Span::styled(title, title_style),
            Span::raw("  "),
            Span::styled(record.time.clone(), Style::default().fg(app.theme.subtext)),
            Span::raw(" ".repeat(pad)),
            Span::styled(era_label, Style::default().fg(app.theme.era(record.era))),
        ]);
        if selected {
            line = line.style(Style::default().bg(app.theme.surface));
        }
        lines.push(line);
    }

    Paragraph::new(lines).render(area, buf);
}
