//! # Core Application Logic
//!
//! The planner's state and the reducer that mutates it.
//! It knows nothing about HTTP, terminals or markup.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • AppState (data)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    HTML    │      │ Repository │
//!     │   Mount    │      │  Snapshot  │      │  (reqwest) │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `AppState` struct, the event list and the selection
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Endpoint configuration, file → env → CLI

pub mod action;
pub mod config;
pub mod state;
