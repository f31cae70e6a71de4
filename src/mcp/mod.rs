// src/mcp/mod.rs
// =============================================================================
// MCP (Model Context Protocol) tool server.
//
// Exposes a handful of Katana client calls as tools an AI assistant can call.
// Transport is JSON-RPC 2.0, one frame per line, over stdio.
//
//   transport  -> reads/writes lines
//   server     -> dispatches initialize / tools/list / tools/call
//   tools      -> the tool implementations
//   render     -> markdown templates with JSON fallback
// =============================================================================

pub mod protocol;
pub mod render;
pub mod server;
pub mod tools;
pub mod transport;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, MCP_PROTOCOL_VERSION};
pub use render::Renderer;
pub use server::McpServer;
pub use tools::{default_tools, Tool, ToolError, ToolOutput};
pub use transport::{serve, serve_stdio};
