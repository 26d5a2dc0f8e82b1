use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use mcplab_client::RequestSender;
use mcplab_mcp::JsonRpcRequest;

mod demo_cmd;
mod send_cmd;

use send_cmd::OutputMode;

const DEFAULT_ENDPOINT: &str = "https://your-vercel-domain.vercel.app/api/mcp";

#[derive(Parser)]
#[command(name = "mcplab", about = "mcplab CLI - JSON-RPC client for an MCP tools endpoint")]
struct Cli {
    /// MCP endpoint URL
    #[arg(long, env = "MCP_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    endpoint: String,

    /// Print response bodies exactly as received instead of joining trimmed lines
    #[arg(long, global = true, conflicts_with = "pretty")]
    raw: bool,

    /// Parse responses as JSON-RPC and pretty-print the result; a JSON-RPC error fails the run
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send the example tools/list and tools/call requests (the default)
    Demo,

    /// List the tools the endpoint offers
    ListTools {
        /// Request id (generated when omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Invoke a tool by name
    Call {
        /// Tool name
        name: String,

        /// Tool argument; repeat for several. VALUE is parsed as JSON when possible.
        #[arg(long = "arg", value_name = "KEY=VALUE", value_parser = send_cmd::parse_argument)]
        args: Vec<(String, Value)>,

        /// Request id (generated when omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Send a raw JSON body (`-` reads it from stdin)
    Send {
        /// JSON-RPC envelope
        body: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let sender = RequestSender::new(&cli.endpoint)?;

    let mode = if cli.raw {
        OutputMode::Raw
    } else if cli.pretty {
        OutputMode::Pretty
    } else {
        OutputMode::Folded
    };

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            demo_cmd::run(&sender, mode).await?;
        }
        Commands::ListTools { id } => {
            let id = id.unwrap_or_else(send_cmd::generated_id);
            send_cmd::run_request(&sender, &JsonRpcRequest::tools_list(id), mode).await?;
        }
        Commands::Call { name, args, id } => {
            let id = id.unwrap_or_else(send_cmd::generated_id);
            let request =
                JsonRpcRequest::tools_call(id, name, send_cmd::arguments_object(args));
            send_cmd::run_request(&sender, &request, mode).await?;
        }
        Commands::Send { body } => {
            send_cmd::run_body(&sender, &body, mode).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_demo_endpoint() {
        let cli = Cli::try_parse_from(["mcplab", "--endpoint", "http://localhost:3000/api/mcp"])
            .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.endpoint, "http://localhost:3000/api/mcp");
        assert!(!cli.raw);
    }

    #[test]
    fn call_collects_repeated_args() {
        let cli = Cli::try_parse_from([
            "mcplab",
            "call",
            "google_search",
            "--arg",
            "query=rust",
            "--arg",
            "limit=3",
            "--raw",
        ])
        .unwrap();

        assert!(cli.raw);
        match cli.command {
            Some(Commands::Call { name, args, id }) => {
                assert_eq!(name, "google_search");
                assert_eq!(args.len(), 2);
                assert_eq!(args[1], ("limit".to_string(), serde_json::json!(3)));
                assert!(id.is_none());
            }
            _ => panic!("expected call subcommand"),
        }
    }

    #[test]
    fn pretty_flag_without_subcommand() {
        let cli = Cli::try_parse_from(["mcplab", "--pretty"]).unwrap();
        assert!(cli.pretty);
        assert!(cli.command.is_none());
    }

    #[test]
    fn raw_and_pretty_conflict() {
        assert!(Cli::try_parse_from(["mcplab", "--raw", "--pretty", "demo"]).is_err());
    }
}
