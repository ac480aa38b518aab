//! # Planner
//!
//! Owns the [`AppState`], the repository and a [`Mount`], and ties them
//! together:
//!
//! ```text
//! init ──► fetch_all_events ──► update ──► render ──► Mount
//!                                  ▲                   │ row activated
//!                                  │                   ▼
//!               Action::EventLoaded ◄── task ◄── Action::Select(id)
//! ```
//!
//! Fetches run as tokio tasks and report back over an unbounded channel.
//! State is only touched by `dispatch()`, on whichever thread owns the
//! planner, one action at a time. Overlapping detail fetches are not
//! deduplicated or cancelled: the last response to arrive wins.

use std::rc::Rc;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::core::action::{Action, Effect, update};
use crate::core::state::AppState;
use crate::repository::{EventId, EventRepository};
use crate::view::{Mount, Region, SelectCallback, build_event_details, build_event_list};

/// Result of draining the action channel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Drained {
    pub actions: usize,
    pub quit: bool,
}

pub struct Planner<M: Mount> {
    state: AppState,
    repository: Arc<dyn EventRepository>,
    mount: M,
    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
}

impl<M: Mount> Planner<M> {
    pub fn new(repository: Arc<dyn EventRepository>, mount: M) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            repository,
            mount,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn mount(&self) -> &M {
        &self.mount
    }

    /// Sender for posting actions from outside (e.g. a quit key).
    pub fn sender(&self) -> UnboundedSender<Action> {
        self.tx.clone()
    }

    /// Loads the event list, then renders once whether or not it succeeded.
    pub async fn init(&mut self) {
        let action = load_events(self.repository.as_ref()).await;
        update(&mut self.state, action);
        self.render();
    }

    /// Non-blocking bootstrap: shows the empty page now and loads the list
    /// in the background. The result arrives through the action channel.
    pub fn start(&mut self) {
        self.render();
        let repository = Arc::clone(&self.repository);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let action = load_events(repository.as_ref()).await;
            if tx.send(action).is_err() {
                warn!("Failed to deliver event list: receiver dropped");
            }
        });
    }

    /// Fetches one event and applies the result before returning.
    pub async fn select(&mut self, id: EventId) {
        let action = load_event(self.repository.as_ref(), id).await;
        self.dispatch(action);
    }

    /// Rebuilds both regions from the current state and mounts them.
    pub fn render(&mut self) {
        let on_select: SelectCallback = {
            let tx = self.tx.clone();
            Rc::new(move |id| {
                if tx.send(Action::Select(id)).is_err() {
                    warn!("Failed to post selection of event {}: receiver dropped", id);
                }
            })
        };

        let selected = self.state.selected_event.as_ref();
        let list = build_event_list(&self.state.events, selected, &on_select);
        let details = build_event_details(selected);

        debug!(
            "Render: {} events, selected={:?}",
            self.state.events.len(),
            selected.map(|event| event.id)
        );
        self.mount.mount(Region::EventList, list);
        self.mount.mount(Region::EventDetails, details);
    }

    /// Applies an action and performs its effect.
    pub fn dispatch(&mut self, action: Action) -> Effect {
        debug!("Dispatch: {:?}", action);
        let effect = update(&mut self.state, action);
        match effect {
            Effect::Render => self.render(),
            Effect::FetchEvent(id) => self.spawn_fetch_event(id),
            Effect::None | Effect::Quit => {}
        }
        effect
    }

    /// Dispatches every action already waiting in the channel.
    pub fn drain(&mut self) -> Drained {
        let mut drained = Drained::default();
        while let Ok(action) = self.rx.try_recv() {
            drained.actions += 1;
            if self.dispatch(action) == Effect::Quit {
                drained.quit = true;
                break;
            }
        }
        drained
    }

    /// Waits for the next action from a background task without applying it.
    pub async fn next_action(&mut self) -> Option<Action> {
        self.rx.recv().await
    }

    fn spawn_fetch_event(&self, id: EventId) {
        info!("Spawning fetch for event {}", id);
        let repository = Arc::clone(&self.repository);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let action = load_event(repository.as_ref(), id).await;
            if tx.send(action).is_err() {
                warn!("Failed to deliver event {}: receiver dropped", id);
            }
        });
    }
}

async fn load_events(repository: &dyn EventRepository) -> Action {
    match repository.fetch_all_events().await {
        Ok(events) => Action::EventsLoaded(events),
        Err(e) => Action::EventsFailed(e),
    }
}

async fn load_event(repository: &dyn EventRepository, id: EventId) -> Action {
    match repository.fetch_event_by_id(id).await {
        Ok(event) => Action::EventLoaded(event),
        Err(error) => Action::EventFailed { id, error },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepositoryError;
    use crate::test_support::{GatedRepository, RecordingMount, StubRepository, event, gala};
    use crate::view::builders::{ACTIVE_ROW_STYLE, PLACEHOLDER_TEXT};
    use crate::view::{Element, Node, Tag};

    fn planner(repository: impl EventRepository + 'static) -> Planner<RecordingMount> {
        Planner::new(Arc::new(repository), RecordingMount::default())
    }

    fn list_rows(node: &Node) -> Vec<&Element> {
        node.as_element().unwrap().child_elements().collect()
    }

    fn current(planner: &Planner<RecordingMount>, region: Region) -> &Node {
        planner.mount().current(region).expect("region was never mounted")
    }

    #[tokio::test]
    async fn test_init_loads_list_in_order_and_renders() {
        let events = vec![event(2, "Brunch"), event(1, "Gala")];
        let mut planner = planner(StubRepository::new().with_list(Ok(events.clone())));

        planner.init().await;

        assert_eq!(planner.state().events, events);
        assert_eq!(planner.mount().render_count(), 1);
        let labels: Vec<String> = list_rows(current(&planner, Region::EventList))
            .iter()
            .map(|row| row.text_content())
            .collect();
        assert_eq!(labels, vec!["Brunch", "Gala"]);
    }

    #[tokio::test]
    async fn test_initial_scenario_single_plain_row_and_placeholder() {
        let mut planner = planner(StubRepository::new().with_list(Ok(vec![event(1, "Gala")])));

        planner.init().await;

        let rows = list_rows(current(&planner, Region::EventList));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text_content(), "Gala");
        assert!(rows[0].style.is_plain());
        assert_eq!(
            current(&planner, Region::EventDetails).text_content(),
            PLACEHOLDER_TEXT
        );
    }

    #[tokio::test]
    async fn test_init_failure_keeps_state_and_still_renders() {
        let mut planner = planner(
            StubRepository::new()
                .with_list(Ok(vec![event(1, "Gala")]))
                .with_list(Err(RepositoryError::Transport("offline".to_string()))),
        );

        planner.init().await;
        planner.init().await;

        assert_eq!(planner.state().events, vec![event(1, "Gala")]);
        assert_eq!(planner.mount().render_count(), 2);
    }

    #[tokio::test]
    async fn test_init_failure_from_empty_shows_empty_page() {
        let mut planner = planner(
            StubRepository::new().with_list(Err(RepositoryError::Decode("not json".to_string()))),
        );

        planner.init().await;

        assert!(planner.state().events.is_empty());
        assert!(list_rows(current(&planner, Region::EventList)).is_empty());
        assert_eq!(
            current(&planner, Region::EventDetails).text_content(),
            PLACEHOLDER_TEXT
        );
    }

    #[tokio::test]
    async fn test_select_overwrites_selection_and_highlights_row() {
        let mut planner = planner(
            StubRepository::new()
                .with_list(Ok(vec![event(1, "Gala"), event(2, "Picnic")]))
                .with_detail(1, Ok(gala()))
                .with_detail(2, Ok(event(2, "Picnic"))),
        );
        planner.init().await;

        planner.select(2).await;
        planner.select(1).await;

        assert_eq!(planner.state().selected_event, Some(gala()));
        let rows = list_rows(current(&planner, Region::EventList));
        assert_eq!(rows[0].style, ACTIVE_ROW_STYLE);
        assert!(rows[1].style.is_plain());
        assert_eq!(
            current(&planner, Region::EventDetails)
                .as_element()
                .unwrap()
                .find(Tag::H3)
                .unwrap()
                .text_content(),
            "Gala #1"
        );
    }

    #[tokio::test]
    async fn test_failed_detail_fetch_keeps_selection_without_render() {
        let mut planner = planner(
            StubRepository::new()
                .with_list(Ok(vec![event(1, "Gala")]))
                .with_detail(1, Ok(gala()))
                .with_detail(2, Err(RepositoryError::Transport("timeout".to_string()))),
        );
        planner.init().await;
        planner.select(1).await;
        let renders = planner.mount().render_count();

        planner.select(2).await;

        assert_eq!(planner.state().selected_event, Some(gala()));
        assert_eq!(planner.mount().render_count(), renders);
    }

    #[tokio::test]
    async fn test_row_activation_round_trip() {
        let mut planner = planner(
            StubRepository::new()
                .with_list(Ok(vec![event(1, "Gala"), event(2, "Picnic")]))
                .with_detail(2, Ok(event(2, "Picnic"))),
        );
        planner.init().await;

        let rows = list_rows(current(&planner, Region::EventList));
        assert!(rows[1].activate());

        let drained = planner.drain();
        assert_eq!(drained, Drained { actions: 1, quit: false });
        assert!(planner.state().selected_event.is_none());

        let action = planner.next_action().await.unwrap();
        assert_eq!(action, Action::EventLoaded(event(2, "Picnic")));
        assert_eq!(planner.dispatch(action), Effect::Render);

        let rows = list_rows(current(&planner, Region::EventList));
        assert_eq!(rows[1].style, ACTIVE_ROW_STYLE);
    }

    #[tokio::test]
    async fn test_last_response_wins_over_last_click() {
        let repository = GatedRepository::new(vec![event(1, "A"), event(2, "B")]);
        let gate_a = repository.gate(1);
        let gate_b = repository.gate(2);
        let mut planner = planner(repository);
        planner.init().await;

        assert_eq!(planner.dispatch(Action::Select(1)), Effect::FetchEvent(1));
        assert_eq!(planner.dispatch(Action::Select(2)), Effect::FetchEvent(2));

        gate_b.notify_one();
        let first = planner.next_action().await.unwrap();
        assert_eq!(first, Action::EventLoaded(event(2, "B")));
        planner.dispatch(first);

        gate_a.notify_one();
        let second = planner.next_action().await.unwrap();
        assert_eq!(second, Action::EventLoaded(event(1, "A")));
        planner.dispatch(second);

        assert_eq!(planner.state().selected_event.as_ref().map(|e| e.id), Some(1));
    }

    #[tokio::test]
    async fn test_start_renders_immediately_then_loads() {
        let mut planner = planner(StubRepository::new().with_list(Ok(vec![event(1, "Gala")])));

        planner.start();
        assert_eq!(planner.mount().render_count(), 1);
        assert!(planner.state().events.is_empty());

        let action = planner.next_action().await.unwrap();
        planner.dispatch(action);
        assert_eq!(planner.state().events, vec![event(1, "Gala")]);
        assert_eq!(planner.mount().render_count(), 2);
    }

    #[tokio::test]
    async fn test_drain_stops_at_quit() {
        let mut planner = planner(StubRepository::new());
        let sender = planner.sender();
        sender.send(Action::Quit).unwrap();
        sender.send(Action::EventsLoaded(vec![event(1, "Late")])).unwrap();

        let drained = planner.drain();

        assert!(drained.quit);
        assert_eq!(drained.actions, 1);
        assert!(planner.state().events.is_empty());
    }
}
