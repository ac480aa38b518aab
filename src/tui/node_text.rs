//! Node tree → ratatui `Text` renderer.
//!
//! Walks a [`Node`] depth-first and emits styled `Line`/`Span` values.
//! Block tags (`section`, `h3`, `p`, `ul`, `li`) start lines; `em` and an
//! element's [`TextStyle`] only change the style of the text inside them.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::view::{Element, Node, Tag, TextStyle};

/// Render a tree into owned `Text` using the given base foreground.
pub fn render(node: &Node, base_fg: Color) -> Text<'static> {
    let mut w = Writer::new(base_fg);
    w.node(node);
    w.text
}

/// Same as [`render`] for a bare element (e.g. one list row).
pub fn render_element(element: &Element, base_fg: Color) -> Text<'static> {
    let mut w = Writer::new(base_fg);
    w.element(element);
    w.text
}

/// Style of an element's own emphasis, as a ratatui overlay.
pub fn emphasis(style: TextStyle) -> Style {
    let mut modifier = Modifier::empty();
    if style.italic {
        modifier |= Modifier::ITALIC;
    }
    if style.bold {
        modifier |= Modifier::BOLD;
    }
    Style::default().add_modifier(modifier)
}

// ── Writer ──────────────────────────────────────────────────────────────────

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline style stack. Styles compose via `patch` so nested emphasis works.
    styles: Vec<Style>,
    /// Nesting depth of `ul` elements, for item indentation.
    list_depth: usize,
    /// Whether the next block element should be preceded by a blank line.
    needs_newline: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            list_depth: 0,
            needs_newline: false,
        }
    }

    // ── Style helpers ───────────────────────────────────────────────────

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    // ── Line/span helpers ───────────────────────────────────────────────

    fn push_line(&mut self, line: Line<'static>) {
        self.text.lines.push(line);
    }

    fn push_span(&mut self, span: Span<'static>) {
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        } else {
            self.push_line(Line::from(vec![span]));
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
    }

    // ── Tree walk ───────────────────────────────────────────────────────

    fn node(&mut self, node: &Node) {
        match node {
            Node::Text(text) => {
                let style = self.style();
                self.push_span(Span::styled(text.clone(), style));
            }
            Node::Element(element) => self.element(element),
        }
    }

    fn element(&mut self, element: &Element) {
        self.open(element);
        for child in &element.children {
            self.node(child);
        }
        self.close(element);
    }

    fn open(&mut self, element: &Element) {
        match element.tag {
            Tag::Section => self.blank_line_if_needed(),
            Tag::H3 => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
                self.push_style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));
            }
            Tag::P => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
            }
            Tag::Ul => {
                if self.list_depth == 0 {
                    self.blank_line_if_needed();
                }
                self.list_depth += 1;
            }
            Tag::Li => {
                self.push_line(Line::default());
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                self.push_span(Span::styled(
                    format!("{indent}• "),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Tag::Em => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
        }
        self.push_style(emphasis(element.style));
    }

    fn close(&mut self, element: &Element) {
        self.pop_style();
        match element.tag {
            Tag::H3 => {
                self.pop_style();
                self.needs_newline = true;
            }
            Tag::P => self.needs_newline = true,
            Tag::Ul => {
                self.list_depth = self.list_depth.saturating_sub(1);
                self.needs_newline = true;
            }
            Tag::Em => self.pop_style(),
            Tag::Section | Tag::Li => {}
        }
    }
}
