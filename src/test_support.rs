//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::repository::{Event, EventId, EventRepository, RepositoryError};
use crate::view::{Mount, Node, Region, SelectCallback};

/// A minimal event with only `id` and `name` worth looking at.
pub fn event(id: EventId, name: &str) -> Event {
    Event {
        id,
        name: name.to_string(),
        description: format!("About {name}"),
        date: "2025-01-01T18:00:00.000Z".to_string(),
        location: "Somewhere".to_string(),
        guests: None,
    }
}

/// The fully populated record used throughout the detail-panel tests.
pub fn gala() -> Event {
    Event {
        id: 1,
        name: "Gala".to_string(),
        description: "Fun".to_string(),
        date: "2025-01-01".to_string(),
        location: "Hall".to_string(),
        guests: Some(vec!["Ann".to_string(), "Bo".to_string()]),
    }
}

/// A select callback that records every id it is called with.
pub fn recording_callback() -> (SelectCallback, Rc<RefCell<Vec<EventId>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let callback: SelectCallback = Rc::new(move |id| sink.borrow_mut().push(id));
    (callback, seen)
}

/// Repository with canned answers.
///
/// List responses are consumed in order; once only one is left it is
/// repeated. Detail responses are looked up by id; unknown ids fail with a
/// transport error.
pub struct StubRepository {
    list: Mutex<VecDeque<Result<Vec<Event>, RepositoryError>>>,
    details: HashMap<EventId, Result<Event, RepositoryError>>,
}

impl StubRepository {
    pub fn new() -> Self {
        Self {
            list: Mutex::new(VecDeque::new()),
            details: HashMap::new(),
        }
    }

    pub fn with_list(self, response: Result<Vec<Event>, RepositoryError>) -> Self {
        self.list.lock().unwrap().push_back(response);
        self
    }

    pub fn with_detail(mut self, id: EventId, response: Result<Event, RepositoryError>) -> Self {
        self.details.insert(id, response);
        self
    }
}

#[async_trait]
impl EventRepository for StubRepository {
    async fn fetch_all_events(&self) -> Result<Vec<Event>, RepositoryError> {
        let mut list = self.list.lock().unwrap();
        if list.len() > 1 {
            list.pop_front().unwrap()
        } else {
            list.front()
                .cloned()
                .unwrap_or_else(|| Err(RepositoryError::Transport("no list stub".to_string())))
        }
    }

    async fn fetch_event_by_id(&self, id: EventId) -> Result<Event, RepositoryError> {
        self.details
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Err(RepositoryError::Transport(format!("no stub for {id}"))))
    }
}

/// Repository whose detail fetches block until the test releases them,
/// so tests decide the order in which responses arrive.
pub struct GatedRepository {
    events: Vec<Event>,
    gates: HashMap<EventId, Arc<Notify>>,
}

impl GatedRepository {
    pub fn new(events: Vec<Event>) -> Self {
        let gates = events
            .iter()
            .map(|event| (event.id, Arc::new(Notify::new())))
            .collect();
        Self { events, gates }
    }

    /// Handle that lets the pending fetch for `id` complete.
    pub fn gate(&self, id: EventId) -> Arc<Notify> {
        Arc::clone(&self.gates[&id])
    }
}

#[async_trait]
impl EventRepository for GatedRepository {
    async fn fetch_all_events(&self) -> Result<Vec<Event>, RepositoryError> {
        Ok(self.events.clone())
    }

    async fn fetch_event_by_id(&self, id: EventId) -> Result<Event, RepositoryError> {
        let gate = self.gates.get(&id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.events
            .iter()
            .find(|event| event.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::Transport(format!("unknown event {id}")))
    }
}

/// Mount target that remembers every tree it was given.
#[derive(Default)]
pub struct RecordingMount {
    pub mounts: Vec<(Region, Node)>,
}

impl RecordingMount {
    /// The tree currently occupying `region`.
    pub fn current(&self, region: Region) -> Option<&Node> {
        self.mounts
            .iter()
            .rev()
            .find(|(r, _)| *r == region)
            .map(|(_, node)| node)
    }

    pub fn render_count(&self) -> usize {
        self.mounts
            .iter()
            .filter(|(region, _)| *region == Region::EventList)
            .count()
    }
}

impl Mount for RecordingMount {
    fn mount(&mut self, region: Region, tree: Node) {
        self.mounts.push((region, tree));
    }
}
