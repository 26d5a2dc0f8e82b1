/// Core error type for tool execution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("internal error: {0}")]
    Internal(String),
}
