//! # Actions
//!
//! Everything that can happen in the planner becomes an `Action`.
//! User activates a row? That's `Action::Select(id)`.
//! The detail endpoint answers? That's `Action::EventLoaded(event)`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! caller must perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! Failed fetches leave the state untouched and ask for no re-render, so a
//! failed detail fetch never erases a valid selection and a failed list fetch
//! never erases a valid list.

use log::{debug, error, info};

use crate::core::state::AppState;
use crate::repository::{Event, EventId, RepositoryError};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The list endpoint answered.
    EventsLoaded(Vec<Event>),
    /// The list endpoint could not be read.
    EventsFailed(RepositoryError),
    /// The user activated the row for this event.
    Select(EventId),
    /// The detail endpoint answered.
    EventLoaded(Event),
    /// The detail endpoint could not be read.
    EventFailed { id: EventId, error: RepositoryError },
    Quit,
}

/// What the caller of `update()` has to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Rebuild both regions from the new state.
    Render,
    /// Start a detail fetch for this event.
    FetchEvent(EventId),
    Quit,
}

pub fn update(state: &mut AppState, action: Action) -> Effect {
    match action {
        Action::EventsLoaded(events) => {
            info!("Loaded {} events", events.len());
            state.set_events(events);
            Effect::Render
        }
        Action::EventsFailed(e) => {
            error!("Failed to load events: {}", e);
            Effect::None
        }
        Action::Select(id) => {
            debug!("Event {} selected, fetching details", id);
            Effect::FetchEvent(id)
        }
        Action::EventLoaded(event) => {
            info!("Showing event {} ({})", event.id, event.name);
            state.set_selected(Some(event));
            Effect::Render
        }
        Action::EventFailed { id, error } => {
            error!("Failed to load event {}: {}", id, error);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
