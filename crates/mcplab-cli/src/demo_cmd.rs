use mcplab_client::RequestSender;

use crate::send_cmd::{self, OutputMode};

/// Envelope for the `tools/list` example.
pub const LIST_PAYLOAD: &str =
    r#"{"jsonrpc":"2.0","id":"java-1","method":"tools/list","params":{}}"#;

/// Envelope for the `tools/call` example invoking `google_search`.
pub const CALL_PAYLOAD: &str = r#"{"jsonrpc":"2.0","id":"java-2","method":"tools/call","params":{"name":"google_search","arguments":{"query":"Model Context Protocol"}}}"#;

/// Run the two example calls one after the other and print each response.
pub async fn run(sender: &RequestSender, mode: OutputMode) -> anyhow::Result<()> {
    tracing::info!("Running demo against {}", sender.endpoint());

    println!("=== tools/list ===");
    println!("{}", send_cmd::render(sender, LIST_PAYLOAD, mode).await?);

    println!("=== tools/call google_search ===");
    println!("{}", send_cmd::render(sender, CALL_PAYLOAD, mode).await?);

    Ok(())
}
