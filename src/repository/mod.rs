pub mod client;
pub mod http;
pub mod types;

pub use client::{EventRepository, RepositoryError};
pub use http::HttpEventRepository;
pub use types::{Envelope, Event, EventId};
