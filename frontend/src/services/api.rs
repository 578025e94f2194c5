use gloo_net::http::Request;
use shared::models::{Event, EventFeed};
use web_sys::RequestCache;

/// Public feed written by the publisher pipeline. The `.ics` companion is
/// published next to it for calendar subscriptions.
const FEED_URL: &str = "https://jackbrandt1995.github.io/vnn-events/events.json";
pub const ICS_URL: &str = "https://jackbrandt1995.github.io/vnn-events/events.ics";

pub struct ApiService;

impl ApiService {
    /// Fetch the event feed, bypassing the HTTP cache so a freshly published
    /// feed shows up on reload. One request, no retries, no timeout.
    pub async fn fetch_events() -> Result<Vec<Event>, String> {
        let response = Request::get(FEED_URL)
            .cache(RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| format!("Request failed: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let feed: EventFeed = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse feed: {:?}", e))?;

        Ok(feed.events)
    }
}
