//! HTTP implementation of [`EventRepository`] backed by `reqwest`.
//!
//! Both endpoints answer with a `{ "data": ... }` envelope:
//!
//! ```text
//! GET {endpoint}        → { data: Event[] }
//! GET {endpoint}/{id}   → { data: Event }
//! ```
//!
//! Any non-2xx status is a transport failure; the status code is only logged.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::client::{EventRepository, RepositoryError};
use super::types::{Envelope, Event, EventId};

pub struct HttpEventRepository {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpEventRepository {
    /// `endpoint` is the collection URL, e.g. `https://host/api/cohort/events`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues a GET and decodes the `data` field of the envelope.
    async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<T, RepositoryError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Response status for {}: {}", url, status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unreadable body".to_string());
            warn!("Events API error: {} - {}", status.as_u16(), body);
            return Err(RepositoryError::Transport(format!(
                "HTTP {} from {}",
                status.as_u16(),
                url
            )));
        }

        let envelope = response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| RepositoryError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl EventRepository for HttpEventRepository {
    async fn fetch_all_events(&self) -> Result<Vec<Event>, RepositoryError> {
        let events: Vec<Event> = self.get_data(&self.endpoint).await?;
        info!("Fetched {} events from {}", events.len(), self.endpoint);
        Ok(events)
    }

    async fn fetch_event_by_id(&self, id: EventId) -> Result<Event, RepositoryError> {
        let url = format!("{}/{}", self.endpoint, id);
        let event: Event = self.get_data(&url).await?;
        if event.id != id {
            debug!("Requested event {} but server returned {}", id, event.id);
        }
        info!("Fetched event {} ({})", event.id, event.name);
        Ok(event)
    }
}
