use serde::{Deserialize, Serialize};
use serde_json::Value;

use mcplab_core::types::{GOOGLE_CALENDAR_LIST, GOOGLE_SEARCH};

/// Definition of a tool advertised by `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Registry of the demo tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Return the list of tool definitions for the `tools/list` method.
    #[must_use]
    pub fn definitions() -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: GOOGLE_SEARCH.to_string(),
                description: "Search the web using Google (demo).".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "query": {"type": "string"}
                    },
                    "required": ["query"]
                }),
            },
            ToolDefinition {
                name: GOOGLE_CALENDAR_LIST.to_string(),
                description: "List events from a Google Calendar (demo).".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "calendar_id": {"type": "string"}
                    },
                    "required": ["calendar_id"]
                }),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tools_defined() {
        let tools = ToolRegistry::definitions();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names, vec!["google_search", "google_calendar_list"]);
    }

    #[test]
    fn tools_serialize_with_snake_case_schema_key() {
        let tools = ToolRegistry::definitions();
        let json = serde_json::to_string(&tools).unwrap();
        assert!(json.contains("google_search"));
        assert!(json.contains("input_schema"));
        assert!(!json.contains("inputSchema"));
    }

    #[test]
    fn search_requires_query() {
        let tools = ToolRegistry::definitions();
        let search = tools.iter().find(|t| t.name == "google_search").unwrap();
        let required = search.input_schema["required"].as_array().unwrap();

        let required_names: Vec<&str> = required.iter().filter_map(Value::as_str).collect();
        assert_eq!(required_names, vec!["query"]);
    }
}
