use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde_json::Value;

use mcplab_mcp::JsonRpcRequest;

use crate::error::SendError;

/// Posts JSON-RPC envelopes to a single endpoint and hands back the response
/// body as text.
///
/// Every call is one complete request/response exchange. Idle connections are
/// not kept around, so consecutive calls share nothing.
#[derive(Debug, Clone)]
pub struct RequestSender {
    client: Client,
    endpoint: Url,
}

impl RequestSender {
    /// Create a sender for `endpoint`, which must be an absolute http(s) URL.
    pub fn new(endpoint: &str) -> Result<Self, SendError> {
        let url = Url::parse(endpoint).map_err(|e| SendError::InvalidUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SendError::InvalidUrl {
                url: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(SendError::Transport)?;

        Ok(Self {
            client,
            endpoint: url,
        })
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Post `body` and return the response with every line trimmed and the
    /// lines joined without separators.
    ///
    /// Folding a multi-line (pretty-printed) JSON response this way can glue
    /// tokens together; use [`send_raw`](Self::send_raw) when the text must
    /// stay valid JSON.
    pub async fn send(&self, body: &str) -> Result<String, SendError> {
        let text = self.send_raw(body).await?;
        Ok(fold_lines(&text))
    }

    /// Post `body` and return the response body exactly as received.
    ///
    /// Any status outside 2xx is an error; the body read so far is kept in
    /// [`SendError::Status`].
    pub async fn send_raw(&self, body: &str) -> Result<String, SendError> {
        if body.trim().is_empty() {
            return Err(SendError::EmptyBody);
        }

        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "Sending JSON-RPC request");

        let resp = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_owned())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|e| self.classify(e))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();

        if !status.is_success() {
            tracing::warn!(endpoint = %self.endpoint, %status, "Endpoint rejected request");
            return Err(SendError::Status { status, body: text });
        }

        tracing::debug!(%status, bytes = text.len(), "Received response");
        Ok(text)
    }

    /// Send a serialized envelope through [`send`](Self::send).
    pub async fn send_request(&self, request: &JsonRpcRequest) -> Result<String, SendError> {
        let body = request.to_body()?;
        self.send(&body).await
    }

    /// Issue a `tools/list` call.
    pub async fn list_tools(&self, id: impl Into<Value>) -> Result<String, SendError> {
        self.send_request(&JsonRpcRequest::tools_list(id)).await
    }

    /// Issue a `tools/call` for `name` with `arguments`.
    pub async fn call_tool(
        &self,
        id: impl Into<Value>,
        name: &str,
        arguments: Value,
    ) -> Result<String, SendError> {
        self.send_request(&JsonRpcRequest::tools_call(id, name, arguments))
            .await
    }

    fn classify(&self, err: reqwest::Error) -> SendError {
        tracing::warn!(endpoint = %self.endpoint, "Request failed: {err}");
        if err.is_connect() {
            SendError::Connect {
                url: self.endpoint.to_string(),
                source: err,
            }
        } else {
            SendError::Transport(err)
        }
    }
}

/// Trim every line of `text` and concatenate them with nothing in between.
///
/// Only ASCII control characters and space (`<= ' '`) count as trimmable;
/// Unicode spaces such as U+00A0 are kept.
pub fn fold_lines(text: &str) -> String {
    text.split(['\n', '\r'])
        .map(|line| line.trim_matches(|c: char| c <= ' '))
        .collect()
}
