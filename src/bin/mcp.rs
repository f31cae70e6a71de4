// src/bin/mcp.rs
// =============================================================================
// Entry point of the `katana-mcp` tool server.
//
// Reads KATANA_API_KEY (and friends) from the environment or a .env file,
// then speaks MCP over stdin/stdout until the client disconnects.
// stdout carries protocol frames only; all logging goes to stderr.
// =============================================================================

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;

use katana_client::config::Settings;
use katana_client::mcp::{serve_stdio, McpServer};
use katana_client::{logging, KatanaClient};

#[derive(Parser, Debug)]
#[command(
    name = "katana-mcp",
    version,
    about = "MCP server exposing Katana MRP tools over stdio"
)]
struct Args {
    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let settings = Settings::from_env().context("could not load Katana settings")?;
    let client = KatanaClient::from_settings(&settings).context("could not build Katana client")?;

    info!(base_url = %client.base_url(), "katana-mcp ready");
    let server = McpServer::new(client);
    serve_stdio(&server).await.context("MCP transport failed")?;
    Ok(())
}
