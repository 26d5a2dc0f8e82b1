use reqwest::StatusCode;

/// Failure while sending a JSON-RPC envelope.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("invalid endpoint url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request body is empty")]
    EmptyBody,

    #[error("could not serialize request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("connection to {url} failed: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("endpoint answered {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl SendError {
    /// Whether the failure happened before any HTTP exchange took place.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Connect { .. })
    }
}
