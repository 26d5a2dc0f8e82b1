use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::handlers;

/// Path the JSON-RPC endpoint is mounted at.
pub const MCP_PATH: &str = "/api/mcp";

/// Create the main application router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // JSON-RPC endpoint for tools/list and tools/call
        .route(MCP_PATH, post(handlers::mcp_request))
        // CORS: the browser playground calls the endpoint from any origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
