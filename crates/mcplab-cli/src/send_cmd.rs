use anyhow::Context;
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncReadExt};

use mcplab_client::RequestSender;
use mcplab_mcp::{JsonRpcRequest, JsonRpcResponse};

/// How response bodies are printed.
#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    /// Lines trimmed and joined.
    Folded,
    /// Exactly as received.
    Raw,
    /// Parsed as a JSON-RPC response; `result` pretty-printed.
    Pretty,
}

/// Send a prebuilt envelope and print the response.
pub async fn run_request(
    sender: &RequestSender,
    request: &JsonRpcRequest,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let body = request.to_body()?;
    println!("{}", render(sender, &body, mode).await?);
    Ok(())
}

/// Send `body` as-is and print the response. A body of `-` is read from stdin.
pub async fn run_body(sender: &RequestSender, body: &str, mode: OutputMode) -> anyhow::Result<()> {
    let body = read_body(body, tokio::io::stdin()).await?;
    println!("{}", render(sender, &body, mode).await?);
    Ok(())
}

/// Resolve the body argument, reading all of `input` when it is `-`.
pub async fn read_body<R>(body: &str, mut input: R) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    if body != "-" {
        return Ok(body.to_string());
    }

    let mut buf = String::new();
    input.read_to_string(&mut buf).await?;
    Ok(buf)
}

/// Send `body` and turn the response into the text to print.
///
/// In [`OutputMode::Pretty`] a JSON-RPC `error`, or a body that is not a
/// JSON-RPC response at all, is an error.
pub async fn render(sender: &RequestSender, body: &str, mode: OutputMode) -> anyhow::Result<String> {
    match mode {
        OutputMode::Folded => Ok(sender.send(body).await?),
        OutputMode::Raw => Ok(sender.send_raw(body).await?),
        OutputMode::Pretty => {
            let text = sender.send_raw(body).await?;
            let resp: JsonRpcResponse = serde_json::from_str(&text)
                .with_context(|| format!("response is not a JSON-RPC envelope: {text}"))?;

            if let Some(error) = resp.error {
                anyhow::bail!("JSON-RPC error {}: {}", error.code, error.message);
            }

            let Some(result) = resp.result else {
                anyhow::bail!("JSON-RPC response has neither result nor error");
            };

            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}

/// Parse a `KEY=VALUE` tool argument. The value is taken as JSON when it
/// parses, otherwise as a plain string.
pub fn parse_argument(s: &str) -> Result<(String, Value), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' found in '{s}'"))?;

    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in '{s}'"));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Collect parsed arguments into the `arguments` object of a `tools/call`.
pub fn arguments_object(args: Vec<(String, Value)>) -> Value {
    Value::Object(args.into_iter().collect())
}

/// Request id used when none is given on the command line.
pub fn generated_id() -> String {
    format!("mcplab-{}", uuid::Uuid::new_v4())
}

#[cfg(test)]
pub(crate) mod tests {
    use axum::{routing::post, Router};

    use super::*;

    /// Serve a fixed 200 reply on an ephemeral local port and return a sender for it.
    pub(crate) async fn stub_sender(reply: &'static str) -> RequestSender {
        let app = Router::new().route("/rpc", post(move || async move { reply }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        RequestSender::new(&format!("http://{addr}/rpc")).unwrap()
    }

    const BODY: &str = r#"{"jsonrpc":"2.0","id":1,"method":"tools/list","params":{}}"#;

    #[tokio::test]
    async fn pretty_prints_result() {
        let sender = stub_sender(r#"{"jsonrpc":"2.0","id":1,"result":{"tools":[]}}"#).await;

        let text = render(&sender, BODY, OutputMode::Pretty).await.unwrap();
        assert_eq!(text, "{\n  \"tools\": []\n}");
    }

    #[tokio::test]
    async fn pretty_fails_on_jsonrpc_error() {
        let sender = stub_sender(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"Method not found"}}"#,
        )
        .await;

        let err = render(&sender, BODY, OutputMode::Pretty).await.unwrap_err();
        assert_eq!(err.to_string(), "JSON-RPC error -32601: Method not found");
    }

    #[tokio::test]
    async fn pretty_fails_on_non_json_body() {
        let sender = stub_sender("<html>ok</html>").await;

        let err = render(&sender, BODY, OutputMode::Pretty).await.unwrap_err();
        assert!(err.to_string().starts_with("response is not a JSON-RPC envelope"));
        assert!(err.downcast_ref::<serde_json::Error>().is_some());
    }

    #[tokio::test]
    async fn folded_and_raw_modes() {
        let sender = stub_sender("{\n  \"a\": 1\n}").await;

        let folded = render(&sender, BODY, OutputMode::Folded).await.unwrap();
        assert_eq!(folded, r#"{"a": 1}"#);

        let raw = render(&sender, BODY, OutputMode::Raw).await.unwrap();
        assert_eq!(raw, "{\n  \"a\": 1\n}");
    }

    #[tokio::test]
    async fn dash_reads_body_from_input() {
        let input: &[u8] = BODY.as_bytes();
        assert_eq!(read_body("-", input).await.unwrap(), BODY);
    }

    #[tokio::test]
    async fn literal_body_ignores_input() {
        let input: &[u8] = b"ignored";
        assert_eq!(read_body(BODY, input).await.unwrap(), BODY);
    }

    #[test]
    fn plain_value_is_a_string() {
        let (key, value) = parse_argument("query=Model Context Protocol").unwrap();
        assert_eq!(key, "query");
        assert_eq!(value, Value::String("Model Context Protocol".to_string()));
    }

    #[test]
    fn json_value_is_parsed() {
        let (_, value) = parse_argument("limit=5").unwrap();
        assert_eq!(value, serde_json::json!(5));

        let (_, value) = parse_argument(r#"filter={"a":true}"#).unwrap();
        assert_eq!(value["a"], true);
    }

    #[test]
    fn value_may_contain_equals() {
        let (key, value) = parse_argument("query=a=b").unwrap();
        assert_eq!(key, "query");
        assert_eq!(value, "a=b");
    }

    #[test]
    fn missing_separator_or_key_is_rejected() {
        assert!(parse_argument("query").is_err());
        assert!(parse_argument("=value").is_err());
    }

    #[test]
    fn arguments_keep_order() {
        let args = arguments_object(vec![
            ("query".to_string(), serde_json::json!("x")),
            ("calendar_id".to_string(), serde_json::json!("primary")),
        ]);
        assert_eq!(
            serde_json::to_string(&args).unwrap(),
            r#"{"query":"x","calendar_id":"primary"}"#
        );
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = generated_id();
        assert!(a.starts_with("mcplab-"));
        assert_ne!(a, generated_id());
    }
}
