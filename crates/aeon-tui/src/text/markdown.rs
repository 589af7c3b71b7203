//! Markdown rendering using pulldown-cmark.
//!
//! Epoch descriptions are markdown; [`render_markdown`] turns them into
//! styled ratatui lines, wrapped to the target width so callers can scroll
//! by display row.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::theme::Theme;

use super::styles::MarkdownStyles;
use super::wrap::wrap_lines;

/// Widest horizontal rule the renderer will draw.
const MAX_RULE_WIDTH: usize = 40;

/// Render markdown text to styled, width-wrapped ratatui lines.
pub fn render_markdown(input: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(input, options);
    let styles = MarkdownStyles::from_theme(theme);

    let mut renderer = MarkdownRenderer::new(styles, width);
    renderer.run(parser);

    if width == 0 {
        renderer.lines
    } else {
        wrap_lines(renderer.lines, width)
    }
}

/// Internal renderer that folds pulldown-cmark events into lines.
struct MarkdownRenderer {
    /// Accumulated output lines.
    lines: Vec<Line<'static>>,
    /// Style configuration.
    styles: MarkdownStyles,
    /// Target width, used for horizontal rules.
    width: usize,
    /// Stack of active inline styles for nested formatting.
    style_stack: Vec<Style>,
    /// Spans of the line currently being built.
    current_spans: Vec<Span<'static>>,
    /// Nesting depth of the surrounding lists.
    indent_level: usize,
    /// Whether we are inside a code block.
    in_code_block: bool,
    /// Whether we are inside a blockquote.
    in_blockquote: bool,
    /// List marker waiting to be attached to the next text.
    pending_list_marker: Option<String>,
    /// Task-list checkbox state for the current item.
    task_checkbox: Option<bool>,
}

impl MarkdownRenderer {
    fn new(styles: MarkdownStyles, width: usize) -> Self {
        Self {
            lines: Vec::new(),
            styles,
            width,
            style_stack: Vec::new(),
            current_spans: Vec::new(),
            indent_level: 0,
            in_code_block: false,
            in_blockquote: false,
            pending_list_marker: None,
            task_checkbox: None,
        }
    }

    fn run<'a>(&mut self, parser: impl Iterator<Item = Event<'a>>) {
        for event in parser {
            self.handle_event(event);
        }
        self.flush_line();
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.flush_line();
                self.style_stack.push(self.heading_style(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                self.flush_line();
                self.style_stack.pop();
            }

            Event::Start(Tag::Emphasis) => self.style_stack.push(self.styles.emphasis),
            Event::Start(Tag::Strong) => self.style_stack.push(self.styles.strong),
            Event::Start(Tag::Strikethrough) => self.style_stack.push(self.styles.strikethrough),
            Event::Start(Tag::Link { .. }) => self.style_stack.push(self.styles.link),
            Event::End(
                TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link,
            ) => {
                self.style_stack.pop();
            }

            Event::Start(Tag::CodeBlock(_)) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.flush_line();
                self.in_code_block = false;
            }

            Event::Start(Tag::List(_)) => {
                self.flush_line();
                self.indent_level += 1;
            }
            Event::End(TagEnd::List(_)) => {
                self.indent_level = self.indent_level.saturating_sub(1);
            }

            Event::Start(Tag::Item) => {
                self.flush_line();
                let indent = "  ".repeat(self.indent_level.saturating_sub(1));
                self.pending_list_marker = Some(format!("{indent}\u{2022} ")); // •
            }
            Event::End(TagEnd::Item) => {
                self.flush_line();
                self.task_checkbox = None;
            }
            Event::TaskListMarker(checked) => {
                self.task_checkbox = Some(checked);
            }

            Event::Start(Tag::BlockQuote) => {
                self.flush_line();
                self.in_blockquote = true;
            }
            Event::End(TagEnd::BlockQuote) => {
                self.flush_line();
                self.in_blockquote = false;
            }

            Event::End(TagEnd::Paragraph) => {
                self.flush_line();
                // Blank separator after each paragraph
                self.lines.push(Line::from(""));
            }

            Event::Text(text) => self.add_text(&text),
            Event::Code(code) => {
                let styled = Span::styled(format!("`{code}`"), self.styles.code);
                self.current_spans.push(styled);
            }

            Event::SoftBreak => self.add_text(" "),
            Event::HardBreak => self.flush_line(),

            Event::Rule => {
                self.flush_line();
                let rule = "\u{2500}".repeat(self.width.clamp(3, MAX_RULE_WIDTH)); // ─
                self.lines.push(Line::from(Span::styled(rule, self.styles.rule)));
            }

            // Tables, images, footnotes, and raw HTML are not expected in
            // epoch descriptions and render as nothing.
            _ => {}
        }
    }

    fn add_text(&mut self, text: &str) {
        if self.in_code_block {
            for line in text.lines() {
                let indent = "  ".repeat(self.indent_level.saturating_sub(1));
                self.current_spans.push(Span::styled(
                    format!("{indent}  {line}"),
                    self.styles.code_block,
                ));
                self.flush_line();
            }
            return;
        }

        if let Some(marker) = self.pending_list_marker.take() {
            self.current_spans
                .push(Span::styled(marker, self.styles.list_marker));
            if let Some(checked) = self.task_checkbox.take() {
                let checkbox = if checked { "[x] " } else { "[ ] " };
                self.current_spans
                    .push(Span::styled(checkbox, self.styles.list_marker));
            }
        }

        if self.in_blockquote && self.current_spans.is_empty() {
            self.current_spans
                .push(Span::styled("> ".to_string(), self.styles.blockquote));
        }

        let style = self.current_style();
        self.current_spans.push(Span::styled(text.to_string(), style));
    }

    /// Combine the style stack on top of the base text style.
    fn current_style(&self) -> Style {
        self.style_stack
            .iter()
            .fold(self.styles.text, |acc, s| acc.patch(*s))
    }

    fn heading_style(&self, level: HeadingLevel) -> Style {
        match level {
            HeadingLevel::H1 => self.styles.h1,
            HeadingLevel::H2 => self.styles.h2,
            _ => self.styles.h3,
        }
    }

    fn flush_line(&mut self) {
        if !self.current_spans.is_empty() {
            let spans = std::mem::take(&mut self.current_spans);
            self.lines.push(Line::from(spans));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                let row: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
                row + "\n"
            })
            .collect()
    }

    #[test]
    fn test_render_plain_paragraph() {
        let lines = render_markdown("Photons decouple from matter.", 80, &Theme::default());
        assert!(text_of(&lines).contains("Photons decouple"));
    }

    #[test]
    fn test_render_heading() {
        let lines = render_markdown("# Recombination", 80, &Theme::default());
        assert!(text_of(&lines).contains("Recombination"));
    }

    #[test]
    fn test_render_bullet_list() {
        let md = "Key processes:\n\n- Nuclei capture electrons\n- The universe turns transparent";
        let lines = render_markdown(md, 80, &Theme::default());
        let text = text_of(&lines);
        assert!(text.contains("• Nuclei capture electrons"));
        assert!(text.contains("• The universe turns transparent"));
    }

    #[test]
    fn test_render_inline_code_kept_verbatim() {
        let lines = render_markdown("the `H0` constant", 80, &Theme::default());
        assert!(text_of(&lines).contains("`H0`"));
    }

    #[test]
    fn test_render_task_list() {
        let lines = render_markdown("- [x] confirmed\n- [ ] conjectured", 80, &Theme::default());
        let text = text_of(&lines);
        assert!(text.contains("[x] confirmed"));
        assert!(text.contains("[ ] conjectured"));
    }

    #[test]
    fn test_render_blockquote_prefix() {
        let lines = render_markdown("> the surface of last scattering", 80, &Theme::default());
        assert!(text_of(&lines).contains("> the surface"));
    }

    #[test]
    fn test_render_rule_as_divider() {
        let lines = render_markdown("above\n\n---\n\nbelow", 80, &Theme::default());
        assert!(text_of(&lines).contains("────"));
    }

    #[test]
    fn test_render_wraps_to_width() {
        let md = "a fog of free electrons scatters light until electrons bind into neutral atoms";
        let lines = render_markdown(md, 20, &Theme::default());
        assert!(lines.len() > 1);
        for line in &lines {
            let row: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            assert!(row.chars().count() <= 20, "row too wide: {row:?}");
        }
    }

    #[test]
    fn test_render_width_zero_disables_wrapping() {
        let md = "a fog of free electrons scatters light until electrons bind into neutral atoms";
        let lines = render_markdown(md, 0, &Theme::default());
        // One content line plus the paragraph separator
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_render_empty_input() {
        let lines = render_markdown("", 80, &Theme::default());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_render_nested_emphasis() {
        let lines = render_markdown("**quark–gluon *plasma***", 80, &Theme::default());
        assert!(text_of(&lines).contains("plasma"));
    }
}
