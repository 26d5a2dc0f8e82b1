use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version carried by every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Method that lists the available tools.
pub const TOOLS_LIST: &str = "tools/list";

/// Method that invokes a named tool.
pub const TOOLS_CALL: &str = "tools/call";

/// A JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default = "default_version")]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

fn default_version() -> String {
    JSONRPC_VERSION.to_string()
}

impl JsonRpcRequest {
    /// Create a request for `method` with the given params.
    pub fn new(id: impl Into<Value>, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            method: method.into(),
            params: Some(params),
        }
    }

    /// A `tools/list` request with empty params.
    pub fn tools_list(id: impl Into<Value>) -> Self {
        Self::new(id, TOOLS_LIST, serde_json::json!({}))
    }

    /// A `tools/call` request invoking `name` with `arguments`.
    pub fn tools_call(id: impl Into<Value>, name: impl Into<String>, arguments: Value) -> Self {
        Self::new(
            id,
            TOOLS_CALL,
            serde_json::json!({
                "name": name.into(),
                "arguments": arguments,
            }),
        )
    }

    /// Compact JSON text of the envelope, suitable as a request body.
    pub fn to_body(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
