use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use mcplab_core::error::Error;
use mcplab_core::traits::ToolBackend;
use mcplab_core::types::{CalendarEvent, CalendarListing, SearchResult, SearchResults};

/// Tool backend that answers with canned data.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoTools;

impl DemoTools {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolBackend for DemoTools {
    async fn search(&self, query: &str) -> Result<SearchResults, Error> {
        Ok(SearchResults::new(
            query,
            vec![SearchResult {
                title: "Example result 1".to_string(),
                url: format!("https://www.google.com/search?q={query}"),
                snippet: format!("Fake search result for '{query}'."),
            }],
        ))
    }

    async fn calendar_events(&self, calendar_id: &str) -> Result<CalendarListing, Error> {
        Ok(CalendarListing::new(
            calendar_id,
            vec![CalendarEvent {
                id: "evt_1".to_string(),
                summary: "Fake Meeting".to_string(),
                start: utc(2026, 2, 6, 10)?,
                end: utc(2026, 2, 6, 11)?,
            }],
        ))
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32) -> Result<DateTime<Utc>, Error> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .ok_or_else(|| Error::Internal(format!("invalid timestamp {year}-{month}-{day} {hour}h")))
}
