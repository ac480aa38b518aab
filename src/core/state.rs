//! # Application State
//!
//! Everything the views are derived from. Presentation state (row cursor,
//! terminal layout) lives in the adapters, not here.
//!
//! ```text
//! AppState
//! ├── events: Vec<Event>            // list endpoint order
//! └── selected_event: Option<Event> // last detail fetch to complete
//! ```
//!
//! Both fields are replaced wholesale, never merged. The remote resource is
//! the only source of truth; the selected record may be richer than its
//! entry in `events` (e.g. it carries `guests`).
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::repository::Event;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppState {
    pub events: Vec<Event>,
    pub selected_event: Option<Event>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    /// `None` clears the selection.
    pub fn set_selected(&mut self, event: Option<Event>) {
        self.selected_event = event;
    }
}
