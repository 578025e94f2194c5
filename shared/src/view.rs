//! Pure view pipeline for the event board.
//!
//! Everything here is a function of an event snapshot plus the current filter
//! selection. The frontend only adapts UI change events into a new
//! [`FilterSelection`] and re-renders the result of [`compute_view`].

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::Event;

/// The user-chosen (state, city) constraint pair.
///
/// An empty string means "All" for that dimension. Not persisted; reset on
/// reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub state: String,
    pub city: String,
}

/// Distinct non-empty filter values, each exactly once, sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub states: Vec<String>,
    pub cities: Vec<String>,
}

/// Events bucketed under one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    /// Group key: `YYYY-MM-DD` in UTC, or the raw start text when it does
    /// not parse.
    pub date: String,
    /// Human heading for the group, e.g. "Saturday, June 14".
    pub label: String,
    pub events: Vec<Event>,
}

/// The fully computed list region: day groups sorted ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub groups: Vec<DayGroup>,
}

/// Collect the distinct non-empty `state` and `city` values across the
/// snapshot, for populating the filter dropdowns.
pub fn filter_options(events: &[Event]) -> FilterOptions {
    FilterOptions {
        states: distinct_values(events.iter().filter_map(|e| e.state.as_deref())),
        cities: distinct_values(events.iter().filter_map(|e| e.city.as_deref())),
    }
}

fn distinct_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut values: Vec<String> = values
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Exact-match filter predicate. A non-empty selected value must equal the
/// event's field; a missing field never matches a non-empty selection.
pub fn matches(event: &Event, selection: &FilterSelection) -> bool {
    let field_matches = |selected: &str, value: Option<&str>| {
        selected.is_empty() || value == Some(selected)
    };
    field_matches(&selection.state, event.state.as_deref())
        && field_matches(&selection.city, event.city.as_deref())
}

/// UTC calendar date (`YYYY-MM-DD`) derived from an ISO-8601 start value.
///
/// Unparseable input is passed through as-is so a bad record shows up as
/// text in the rendered list instead of aborting the draw.
pub fn day_key(start: &str) -> String {
    match DateTime::parse_from_rfc3339(start) {
        Ok(dt) => dt.with_timezone(&Utc).format("%Y-%m-%d").to_string(),
        Err(_) => start.to_string(),
    }
}

/// Heading text for a day group, e.g. "Saturday, June 14". Keys that are not
/// calendar dates (malformed feed records) pass through unchanged.
pub fn day_label(key: &str) -> String {
    match NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        Ok(date) => date.format("%A, %B %-d").to_string(),
        Err(_) => key.to_string(),
    }
}

/// Card time text: the event's wall-clock start in the feed's stated offset,
/// e.g. "6:00 PM". Unparseable starts render as their raw text.
pub fn start_time_label(start: &str) -> String {
    match DateTime::parse_from_rfc3339(start) {
        Ok(dt) => dt.format("%-I:%M %p").to_string(),
        Err(_) => start.to_string(),
    }
}

/// Venue, city, and state joined by commas, absent parts omitted.
pub fn location_line(event: &Event) -> String {
    [
        event.venue_name.as_deref(),
        event.city.as_deref(),
        event.state.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

/// Filter the snapshot, bucket by UTC day, and order everything: groups
/// ascending by date string, events within a group by start then city.
pub fn compute_view(events: &[Event], selection: &FilterSelection) -> ViewModel {
    let mut buckets: BTreeMap<String, Vec<Event>> = BTreeMap::new();
    for event in events.iter().filter(|e| matches(e, selection)) {
        buckets
            .entry(day_key(&event.start))
            .or_default()
            .push(event.clone());
    }

    let groups = buckets
        .into_iter()
        .map(|(date, mut events)| {
            events.sort_by(|a, b| {
                a.start.cmp(&b.start).then_with(|| {
                    a.city
                        .as_deref()
                        .unwrap_or("")
                        .cmp(b.city.as_deref().unwrap_or(""))
                })
            });
            DayGroup {
                label: day_label(&date),
                date,
                events,
            }
        })
        .collect();

    ViewModel { groups }
}
