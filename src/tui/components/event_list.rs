//! # Event List Component
//!
//! Left column: the mounted `ul.lineup` tree, one line per row, with a
//! row cursor for keyboard navigation.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EventListState` lives in `TuiState` (cursor, scroll offset)
//! - `EventList` is created each frame with borrowed state and tree
//!
//! The cursor is presentation only. The selected event is whatever the
//! mounted tree marks as active (bold + italic); the cursor is drawn
//! reversed on top of that.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::node_text;
use crate::view::{Node, Region};

/// Persistent state for the list column.
#[derive(Debug, Default)]
pub struct EventListState {
    pub cursor: usize,
    /// Index of the first visible row.
    pub offset: usize,
    row_count: usize,
}

impl EventListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the cursor inside the mounted rows.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
        self.offset = self.offset.min(self.cursor);
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Adjust `offset` so the cursor row is inside a viewport of `height` rows.
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if height > 0 && self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }
}

/// Events emitted by the list column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// Activate the row at this index.
    Activate(usize),
}

impl EventHandler for EventListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if self.row_count > 0 {
                    self.cursor = (self.cursor + 1).min(self.row_count - 1);
                }
                None
            }
            TuiEvent::Activate if self.row_count > 0 => Some(ListEvent::Activate(self.cursor)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the list column.
pub struct EventList<'a> {
    state: &'a mut EventListState,
    tree: Option<&'a Node>,
}

impl<'a> EventList<'a> {
    pub fn new(state: &'a mut EventListState, tree: Option<&'a Node>) -> Self {
        Self { state, tree }
    }
}

impl Component for EventList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" {} ", Region::EventList.title()))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        self.state.scroll_to_cursor(inner.height as usize);

        let rows = self
            .tree
            .and_then(Node::as_element)
            .map(|list| list.child_elements().collect::<Vec<_>>())
            .unwrap_or_default();

        let lines: Vec<Line<'static>> = rows
            .iter()
            .enumerate()
            .skip(self.state.offset)
            .take(inner.height as usize)
            .map(|(index, row)| {
                let line = node_text::render_element(row, Color::Gray)
                    .lines
                    .into_iter()
                    .next()
                    .unwrap_or_default();
                if index == self.state.cursor {
                    line.patch_style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    line
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Row index under a screen position, given the list column's outer area.
pub fn hit_test_row(column: u16, row: u16, area: Rect, state: &EventListState) -> Option<usize> {
    let inner = Block::bordered().inner(area);
    let inside = column >= inner.x
        && column < inner.x + inner.width
        && row >= inner.y
        && row < inner.y + inner.height;
    if !inside {
        return None;
    }
    let index = state.offset + (row - inner.y) as usize;
    (index < state.row_count).then_some(index)
}
