use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use mcplab_core::Error;
use mcplab_mcp::jsonrpc::{TOOLS_CALL, TOOLS_LIST};
use mcplab_mcp::{JsonRpcRequest, JsonRpcResponse, ToolRegistry};

use crate::app_state::AppState;

type McpReply = (StatusCode, Json<Value>);

/// Handle a JSON-RPC request posted to the endpoint.
///
/// Successful calls answer 200 with a JSON-RPC envelope. Failures answer
/// with a bare `{"error": ...}` object: 400 for an unreadable body, 404 for
/// an unknown method and 500 when the tool fails.
pub async fn mcp_request(State(state): State<AppState>, body: String) -> McpReply {
    let body = if body.trim().is_empty() { "{}" } else { &body };

    let data: Value = match serde_json::from_str(body) {
        Ok(Value::Object(map)) => Value::Object(map),
        Ok(other) => return parse_error(format!("expected a JSON object, got {other}")),
        Err(e) => return parse_error(e.to_string()),
    };

    let method = data.get("method");
    tracing::info!(method = %label(method), id = %data.get("id").unwrap_or(&serde_json::Value::Null), "MCP request");

    match method.and_then(Value::as_str) {
        Some(TOOLS_LIST | TOOLS_CALL) => {}
        _ => {
            return error_reply(
                StatusCode::NOT_FOUND,
                format!("Unknown method: {}", label(method)),
            )
        }
    }

    let req: JsonRpcRequest = match serde_json::from_value(data) {
        Ok(req) => req,
        Err(e) => return parse_error(e.to_string()),
    };

    if req.method == TOOLS_LIST {
        handle_tools_list(&req)
    } else {
        handle_tools_call(&state, &req).await
    }
}

fn handle_tools_list(req: &JsonRpcRequest) -> McpReply {
    let tools = ToolRegistry::definitions();
    success_reply(req, serde_json::json!({ "tools": tools }))
}

async fn handle_tools_call(state: &AppState, req: &JsonRpcRequest) -> McpReply {
    let params = req.params.as_ref();

    let name = params.and_then(|p| p.get("name"));
    let Some(tool_name) = name.and_then(Value::as_str) else {
        let err = Error::UnknownTool(label(name));
        tracing::warn!("Tool call rejected: {err}");
        return error_reply(StatusCode::INTERNAL_SERVER_ERROR, err.to_string());
    };

    let arguments = params
        .and_then(|p| p.get("arguments"))
        .cloned()
        .unwrap_or(Value::Object(serde_json::Map::new()));

    match state.tools.call(tool_name, &arguments).await {
        Ok(result) => success_reply(req, result),
        Err(err) => {
            tracing::warn!("Tool call '{tool_name}' failed: {err}");
            error_reply(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

/// Render a request field for an error message: `None` when absent or null,
/// the bare text for strings, JSON otherwise.
fn label(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn success_reply(req: &JsonRpcRequest, result: Value) -> McpReply {
    let response = JsonRpcResponse::success(req.id.clone(), result);
    let value = serde_json::to_value(&response).unwrap_or_default();
    (StatusCode::OK, Json(value))
}

fn parse_error(detail: String) -> McpReply {
    tracing::warn!("Rejected unparseable MCP request: {detail}");
    error_reply(StatusCode::BAD_REQUEST, format!("Parse error: {detail}"))
}

fn error_reply(status: StatusCode, message: String) -> McpReply {
    (status, Json(serde_json::json!({ "error": message })))
}
