use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name under which the search tool is exposed.
pub const GOOGLE_SEARCH: &str = "google_search";

/// Name under which the calendar tool is exposed.
pub const GOOGLE_CALENDAR_LIST: &str = "google_calendar_list";

/// Calendar used when the caller does not name one.
pub const DEFAULT_CALENDAR_ID: &str = "primary";

/// A single hit returned by the search tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Output of the `google_search` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub tool: String,
    pub query: String,
    pub results: Vec<SearchResult>,
}

impl SearchResults {
    #[must_use]
    pub fn new(query: impl Into<String>, results: Vec<SearchResult>) -> Self {
        Self {
            tool: GOOGLE_SEARCH.to_string(),
            query: query.into(),
            results,
        }
    }
}

/// An event on a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Output of the `google_calendar_list` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarListing {
    pub tool: String,
    #[serde(rename = "calendarId")]
    pub calendar_id: String,
    pub events: Vec<CalendarEvent>,
}

impl CalendarListing {
    #[must_use]
    pub fn new(calendar_id: impl Into<String>, events: Vec<CalendarEvent>) -> Self {
        Self {
            tool: GOOGLE_CALENDAR_LIST.to_string(),
            calendar_id: calendar_id.into(),
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn search_results_serialize() {
        let results = SearchResults::new(
            "rust",
            vec![SearchResult {
                title: "Example result 1".to_string(),
                url: "https://www.google.com/search?q=rust".to_string(),
                snippet: "Fake search result for 'rust'.".to_string(),
            }],
        );

        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value["tool"], "google_search");
        assert_eq!(value["query"], "rust");
        assert_eq!(value["results"][0]["title"], "Example result 1");
    }

    #[test]
    fn calendar_listing_uses_camel_case_id_and_utc_times() {
        let listing = CalendarListing::new(
            "team",
            vec![CalendarEvent {
                id: "evt_1".to_string(),
                summary: "Fake Meeting".to_string(),
                start: Utc.with_ymd_and_hms(2026, 2, 6, 10, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2026, 2, 6, 11, 0, 0).unwrap(),
            }],
        );

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["tool"], "google_calendar_list");
        assert_eq!(value["calendarId"], "team");
        assert!(value.get("calendar_id").is_none());
        assert_eq!(value["events"][0]["start"], "2026-02-06T10:00:00Z");
        assert_eq!(value["events"][0]["end"], "2026-02-06T11:00:00Z");
    }
}
