//! # TitleBar Component
//!
//! Top line of the page: the page heading plus a short status.
//!
//! Stateless: it receives all data as props and renders a single line.
//!
//! 1. **Status present**: `"Party Planner | 12 events"`
//! 2. **Default**: `"Party Planner"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component showing the page heading and status.
pub struct TitleBar {
    /// Page heading (e.g., "Party Planner")
    pub title: String,
    /// Status text (e.g., "12 events")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(title: String, status_message: String) -> Self {
        Self {
            title,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
