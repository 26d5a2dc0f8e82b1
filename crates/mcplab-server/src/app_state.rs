use std::sync::Arc;

use mcplab_core::traits::ToolBackend;

/// Shared application state with injected dependencies.
#[derive(Clone)]
pub struct AppState {
    pub tools: Arc<dyn ToolBackend>,
}
