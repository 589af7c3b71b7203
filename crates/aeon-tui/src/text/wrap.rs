//! Width-aware wrapping for styled ratatui Lines.
//!
//! The detail modal scrolls by display row, so markdown output is wrapped
//! up front instead of relying on `Paragraph` wrapping at render time.

use ratatui::text::{Line, Span};

/// Wrap plain text to the given width.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

/// Wrap styled lines to the given width, preserving span styles.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return lines;
    }
    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Wrap a single styled line, rebuilding spans across the break points.
fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    let char_count: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
    if char_count <= width {
        return vec![line];
    }

    // Flatten to styled characters so textwrap can pick the break points on
    // the plain text, then re-attach styles row by row.
    let styled: Vec<(char, ratatui::style::Style)> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(move |ch| (ch, span.style)))
        .collect();
    let plain: String = styled.iter().map(|(ch, _)| ch).collect();

    let mut rows = Vec::new();
    let mut cursor = 0;

    for wrapped in textwrap::wrap(&plain, width) {
        // textwrap trims break-point whitespace; skip it in the styled stream
        while cursor < styled.len() && !wrapped.starts_with(styled[cursor].0) && styled[cursor].0.is_whitespace() {
            cursor += 1;
        }

        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut run = String::new();
        let mut run_style = None;

        for _ in wrapped.chars() {
            let Some(&(ch, style)) = styled.get(cursor) else {
                break;
            };
            cursor += 1;

            match run_style {
                Some(s) if s == style => run.push(ch),
                Some(s) => {
                    spans.push(Span::styled(std::mem::take(&mut run), s));
                    run_style = Some(style);
                    run.push(ch);
                }
                None => {
                    run_style = Some(style);
                    run.push(ch);
                }
            }
        }

        if let (false, Some(style)) = (run.is_empty(), run_style) {
            spans.push(Span::styled(run, style));
        }
        if !spans.is_empty() {
            rows.push(Line::from(spans));
        }
    }

    if rows.is_empty() {
        rows.push(Line::from(""));
    }
    rows
}
