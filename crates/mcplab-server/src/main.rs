use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use mcplab_server::app_state::AppState;
use mcplab_server::demo::DemoTools;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = std::env::var("MCPLAB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("MCPLAB_PORT").unwrap_or_else(|_| "3000".to_string());

    let state = AppState {
        tools: Arc::new(DemoTools::new()),
    };

    let app = mcplab_server::router::create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!(
        "MCP demo server listening on {addr}{}",
        mcplab_server::router::MCP_PATH
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
