use std::fmt;

use async_trait::async_trait;

use super::types::{Event, EventId};

/// Errors that can occur while reading from the events resource.
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryError {
    /// The request could not be completed (DNS, connection refused, non-2xx status).
    Transport(String),
    /// A response arrived but its body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::Transport(msg) => write!(f, "transport error: {msg}"),
            RepositoryError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Read-only access to the remote events resource.
///
/// Implementations do not cache, retry or time out.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Fetches the whole collection, in the order the server returns it.
    async fn fetch_all_events(&self) -> Result<Vec<Event>, RepositoryError>;

    /// Fetches a single event. The returned `id` is not checked against `id`.
    async fn fetch_event_by_id(&self, id: EventId) -> Result<Event, RepositoryError>;
}
