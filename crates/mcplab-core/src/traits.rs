use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;
use crate::types::{
    CalendarListing, SearchResults, DEFAULT_CALENDAR_ID, GOOGLE_CALENDAR_LIST, GOOGLE_SEARCH,
};

/// Executes the tools exposed over `tools/call`.
#[async_trait]
pub trait ToolBackend: Send + Sync {
    /// Run a web search.
    async fn search(&self, query: &str) -> Result<SearchResults, Error>;

    /// List the events of a calendar.
    async fn calendar_events(&self, calendar_id: &str) -> Result<CalendarListing, Error>;

    /// Dispatch a `tools/call` by tool name, pulling the tool's inputs out of
    /// `arguments`. Absent inputs fall back to their defaults.
    async fn call(&self, name: &str, arguments: &Value) -> Result<Value, Error> {
        let empty = serde_json::Map::new();
        let args = match arguments {
            Value::Null => &empty,
            Value::Object(map) => map,
            other => {
                return Err(Error::InvalidArguments {
                    tool: name.to_string(),
                    reason: format!("expected an object, got {other}"),
                })
            }
        };

        let result = match name {
            GOOGLE_SEARCH => {
                let query = string_arg(name, args, "query")?.unwrap_or_default();
                serde_json::to_value(self.search(query).await?)
            }
            GOOGLE_CALENDAR_LIST => {
                let calendar_id =
                    string_arg(name, args, "calendar_id")?.unwrap_or(DEFAULT_CALENDAR_ID);
                serde_json::to_value(self.calendar_events(calendar_id).await?)
            }
            _ => return Err(Error::UnknownTool(name.to_string())),
        };

        result.map_err(|e| Error::Internal(e.to_string()))
    }
}

fn string_arg<'a>(
    tool: &str,
    args: &'a serde_json::Map<String, Value>,
    key: &str,
) -> Result<Option<&'a str>, Error> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(Error::InvalidArguments {
            tool: tool.to_string(),
            reason: format!("'{key}' must be a string, got {other}"),
        }),
    }
}
