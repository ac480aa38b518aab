//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, draws the mounted
//! trees, and turns keys and clicks into row activations.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! planner only sees it as a [`Mount`](crate::view::Mount).
//!
//! ## Redraw Strategy
//!
//! The loop polls input for up to 100ms, then drains the planner's action
//! channel. A frame is drawn only when an input event arrived or at least
//! one action was applied, so an idle page costs nothing but the poll.

mod component;
mod components;
mod event;
mod mount;
pub mod node_text;
mod ui;

pub use mount::TuiMount;

use log::info;
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect};
use crate::planner::Planner;
use crate::repository::EventRepository;
use crate::tui::component::EventHandler;
use crate::tui::components::event_list::hit_test_row;
use crate::tui::components::{EventListState, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core state)
pub struct TuiState {
    pub event_list: EventListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            event_list: EventListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a cleanup closure when dropped, including on an early `?` return.
struct OnDrop<F: FnMut()>(F);

impl<F: FnMut()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}

/// Enables mouse capture; on drop, disables it and restores the terminal.
fn terminal_mode_guard() -> std::io::Result<OnDrop<impl FnMut()>> {
    execute!(stdout(), EnableMouseCapture)?;
    info!("Terminal modes enabled (mouse)");
    Ok(OnDrop(|| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
    }))
}

/// Runs the interactive page until the user quits.
///
/// Must be called from within a tokio runtime: fetches are spawned as tasks.
pub fn run(repository: Arc<dyn EventRepository>) -> std::io::Result<()> {
    let mut planner = Planner::new(repository, TuiMount::new());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let restore_guard = match terminal_mode_guard() {
        Ok(guard) => guard,
        Err(e) => {
            ratatui::restore();
            return Err(e);
        }
    };

    planner.start();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, planner.state(), planner.mount(), &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    if planner.dispatch(Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::MouseClick(column, row) => {
                    let list_area = ui::page_layout(terminal.get_frame().area()).list;
                    if let Some(index) = hit_test_row(column, row, list_area, &tui.event_list) {
                        tui.event_list.cursor = index;
                        planner.mount().activate_row(index);
                    }
                }
                other => {
                    if let Some(ListEvent::Activate(index)) = tui.event_list.handle_event(&other) {
                        planner.mount().activate_row(index);
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Apply selections posted by row handlers and results from fetch tasks
        let drained = planner.drain();
        if drained.actions > 0 {
            needs_redraw = true;
        }
        if drained.quit {
            break;
        }
    }

    info!("Shutting down");
    drop(restore_guard);
    Ok(())
}
