use serde::{Deserialize, Serialize};

/// A single event record from the published feed.
///
/// `start` is kept as the raw ISO-8601 text from the feed: day grouping and
/// in-group ordering are defined on the ISO string, and a malformed value
/// must degrade to rendered text instead of failing deserialization of the
/// whole feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The feed envelope written by the publisher pipeline.
///
/// A document without an `events` field deserializes to an empty list rather
/// than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFeed {
    #[serde(default)]
    pub generated: bool,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_with_events() {
        let feed: EventFeed = serde_json::from_str(
            r#"{"generated": true, "events": [{"title": "Job Fair", "start": "2024-05-01T10:00:00-06:00", "city": "Helena", "state": "MT"}]}"#,
        )
        .expect("should parse feed");

        assert!(feed.generated);
        assert_eq!(feed.events.len(), 1);
        assert_eq!(feed.events[0].title, "Job Fair");
        assert_eq!(feed.events[0].city.as_deref(), Some("Helena"));
        assert_eq!(feed.events[0].venue_name, None);
    }

    #[test]
    fn test_feed_missing_events_field() {
        let feed: EventFeed = serde_json::from_str(r#"{"generated": true}"#)
            .expect("should parse feed without events");

        assert!(feed.events.is_empty());
    }

    #[test]
    fn test_event_tolerates_unknown_fields() {
        let event: Event = serde_json::from_str(
            r#"{"title": "Hike", "start": "2024-06-14T09:00:00-06:00", "tags": ["veterans"], "lat": 46.6, "lon": -112.0}"#,
        )
        .expect("should parse event with extra fields");

        assert_eq!(event.title, "Hike");
        assert_eq!(event.state, None);
    }
}
