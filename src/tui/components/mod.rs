//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: page heading and status line
//! - `EventDetails`: right column, renders the mounted details tree
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `EventList`: left column with a row cursor; emits `ListEvent::Activate`
//!
//! Components receive external data as props, never by reaching into the
//! planner. Each file keeps its state, events, rendering and tests together.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Heading line)
//! ├── event_list.rs     (Selectable list column)
//! └── event_details.rs  (Detail column)
//! ```

pub mod event_details;
pub mod event_list;
mod title_bar;

pub use event_details::EventDetails;
pub use event_list::{EventList, EventListState, ListEvent};
pub use title_bar::TitleBar;
