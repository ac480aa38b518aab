use serde::{Deserialize, Serialize};

/// Identifier assigned to an event by the remote resource.
pub type EventId = i64;

/// A party or gathering as returned by the events resource.
///
/// `date` is kept as the raw ISO-8601 string; it is displayed verbatim and
/// never parsed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    /// The list endpoint may omit guests; the detail endpoint usually has them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<Vec<String>>,
}

impl Event {
    /// Guest names, if the record carries a non-empty guest list.
    pub fn guest_list(&self) -> Option<&[String]> {
        self.guests.as_deref().filter(|guests| !guests.is_empty())
    }
}

/// Response wrapper used by both endpoints: `{ "data": ... }`.
///
/// Any sibling fields (`success`, `error`) are ignored.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserializes_without_guests() {
        let json = r#"{"id":3,"name":"Gala","description":"Fun","date":"2025-01-01T00:00:00.000Z","location":"Hall"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 3);
        assert_eq!(event.date, "2025-01-01T00:00:00.000Z");
        assert!(event.guests.is_none());
        assert!(event.guest_list().is_none());
    }

    #[test]
    fn test_empty_guest_list_counts_as_absent() {
        let json = r#"{"id":1,"name":"A","description":"","date":"","location":"","guests":[]}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.guests, Some(vec![]));
        assert!(event.guest_list().is_none());
    }

    #[test]
    fn test_envelope_ignores_extra_fields() {
        let json = r#"{"success":true,"error":null,"data":[{"id":1,"name":"A","description":"d","date":"x","location":"y","guests":["Ann","Bo"]}]}"#;
        let envelope: Envelope<Vec<Event>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(
            envelope.data[0].guest_list(),
            Some(&["Ann".to_string(), "Bo".to_string()][..])
        );
    }

    #[test]
    fn test_event_missing_required_field_fails() {
        let json = r#"{"id":1,"name":"A"}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn test_serialization_omits_absent_guests() {
        let event = Event {
            id: 9,
            name: "Picnic".to_string(),
            description: "Outdoors".to_string(),
            date: "2025-06-01".to_string(),
            location: "Park".to_string(),
            guests: None,
        };
        let serialized = serde_json::to_string(&event).unwrap();
        assert!(!serialized.contains("guests"));
    }
}
