//! # Event Details Component
//!
//! Right column: the mounted details tree (panel or placeholder), wrapped
//! to the column width. Stateless; the tree is the only prop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::node_text;
use crate::view::{Node, Region};

pub struct EventDetails<'a> {
    pub tree: Option<&'a Node>,
}

impl<'a> EventDetails<'a> {
    pub fn new(tree: Option<&'a Node>) -> Self {
        Self { tree }
    }
}

impl Component for EventDetails<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" {} ", Region::EventDetails.title()))
            .border_style(Style::default().fg(Color::DarkGray));

        let text = self
            .tree
            .map(|tree| node_text::render(tree, Color::Gray))
            .unwrap_or_default();

        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
