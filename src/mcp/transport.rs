// src/mcp/transport.rs
// =============================================================================
// Newline-delimited JSON-RPC over a pair of async streams (stdin/stdout in
// production, in-memory pipes in tests).
//
// One frame per line in, one reply per line out. Blank lines are ignored.
// The loop ends cleanly at EOF.
// =============================================================================

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use super::server::McpServer;
use crate::error::Result;

pub async fn serve<R, W>(server: &McpServer, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(bytes = line.len(), "frame received");

        if let Some(reply) = server.handle_line(line).await {
            writer.write_all(reply.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }

    info!("input closed, shutting down");
    Ok(())
}

/// Serves on the process's stdin/stdout until stdin closes
pub async fn serve_stdio(server: &McpServer) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve(server, stdin, stdout).await
}
