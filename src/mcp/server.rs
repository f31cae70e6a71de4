// src/mcp/server.rs
// =============================================================================
// MCP request handling.
//
// Supported methods:
//   initialize                 -> protocol version, capabilities, server info
//   notifications/initialized  -> no reply (notification)
//   ping                       -> {}
//   tools/list                 -> name, description, inputSchema per tool
//   tools/call                 -> { content: [text], structuredContent, isError }
//
// Tool failures (bad arguments, Katana errors) are reported inside a normal
// tools/call result with isError = true. Only protocol problems (unknown
// method, unknown tool, malformed frame) become JSON-RPC errors.
// =============================================================================

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, INVALID_PARAMS, INVALID_REQUEST,
    JSONRPC_VERSION, MCP_PROTOCOL_VERSION, METHOD_NOT_FOUND, PARSE_ERROR,
};
use super::render::Renderer;
use super::tools::{default_tools, Tool};
use crate::client::KatanaClient;

pub const SERVER_NAME: &str = "katana-mcp";

const INSTRUCTIONS: &str = "Tools for the Katana manufacturing ERP. \
Use search_products or check_inventory to look things up by name or SKU, \
list_low_stock_items to find what needs reordering, and the order tools to \
review or create orders.";

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

pub struct McpServer {
    client: KatanaClient,
    tools: Vec<Box<dyn Tool>>,
    renderer: Renderer,
}

impl McpServer {
    pub fn new(client: KatanaClient) -> Self {
        Self::with_tools(client, default_tools(), Renderer::builtin())
    }

    pub fn with_tools(client: KatanaClient, tools: Vec<Box<dyn Tool>>, renderer: Renderer) -> Self {
        Self {
            client,
            tools,
            renderer,
        }
    }

    /// Handles one raw frame. Returns the serialized reply, or None for
    /// notifications.
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let response = match serde_json::from_str::<Value>(line) {
            Err(e) => Some(JsonRpcResponse::failure(
                Value::Null,
                JsonRpcError::new(PARSE_ERROR, format!("parse error: {e}")),
            )),
            Ok(raw) => match serde_json::from_value::<JsonRpcRequest>(raw.clone()) {
                Ok(request) => self.handle_request(request).await,
                Err(e) => Some(JsonRpcResponse::failure(
                    raw.get("id").cloned().unwrap_or(Value::Null),
                    JsonRpcError::new(INVALID_REQUEST, format!("invalid request: {e}")),
                )),
            },
        }?;

        match serde_json::to_string(&response) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, "could not serialize response");
                None
            }
        }
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, "MCP request");

        if request.jsonrpc != JSONRPC_VERSION {
            return request.id.map(|id| {
                JsonRpcResponse::failure(
                    id,
                    JsonRpcError::new(INVALID_REQUEST, "jsonrpc must be \"2.0\""),
                )
            });
        }

        let Some(id) = request.id else {
            // Notifications never get a reply, even unknown ones
            if request.method == "notifications/initialized" {
                info!("client finished initialization");
            }
            return None;
        };

        let outcome = match request.method.as_str() {
            "initialize" => Ok(self.initialize_result()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.tools_list()),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(JsonRpcError::new(
                METHOD_NOT_FOUND,
                format!("method not found: {other}"),
            )),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        })
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": MCP_PROTOCOL_VERSION,
            "capabilities": { "tools": { "listChanged": false } },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION"),
            },
            "instructions": INSTRUCTIONS,
        })
    }

    fn tools_list(&self) -> Value {
        let tools: Vec<Value> = self
            .tools
            .iter()
            .map(|tool| {
                json!({
                    "name": tool.name(),
                    "description": tool.description(),
                    "inputSchema": tool.input_schema(),
                })
            })
            .collect();
        json!({ "tools": tools })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallParams = serde_json::from_value(params.unwrap_or(Value::Null))
            .map_err(|e| JsonRpcError::new(INVALID_PARAMS, format!("invalid params: {e}")))?;

        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == params.name)
            .ok_or_else(|| {
                JsonRpcError::new(INVALID_PARAMS, format!("unknown tool: {}", params.name))
            })?;

        info!(tool = %params.name, "calling tool");
        match tool.call(&self.client, params.arguments).await {
            Ok(output) => {
                let text = self
                    .renderer
                    .render_or_json(output.template, &output.structured);
                Ok(json!({
                    "content": [{ "type": "text", "text": text }],
                    "structuredContent": output.structured,
                    "isError": false,
                }))
            }
            Err(e) => {
                warn!(tool = %params.name, error = %e, "tool failed");
                Ok(json!({
                    "content": [{ "type": "text", "text": format!("Error: {e}") }],
                    "isError": true,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_for(uri: &str) -> McpServer {
        let client = KatanaClient::builder()
            .base_url(uri)
            .api_key("k")
            .build()
            .unwrap();
        McpServer::new(client)
    }

    async fn call(server: &McpServer, frame: Value) -> Value {
        let reply = server.handle_line(&frame.to_string()).await.unwrap();
        serde_json::from_str(&reply).unwrap()
    }

    #[tokio::test]
    async fn test_initialize() {
        let server = server_for("http://localhost:1");
        let reply = call(
            &server,
            json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {} }),
        )
        .await;
        assert_eq!(reply["id"], 1);
        assert_eq!(reply["result"]["protocolVersion"], MCP_PROTOCOL_VERSION);
        assert_eq!(reply["result"]["serverInfo"]["name"], SERVER_NAME);
    }

    #[tokio::test]
    async fn test_notification_gets_no_reply() {
        let server = server_for("http://localhost:1");
        let reply = server
            .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;
        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_parse_error() {
        let server = server_for("http://localhost:1");
        let reply: Value =
            serde_json::from_str(&server.handle_line("{oops").await.unwrap()).unwrap();
        assert_eq!(reply["error"]["code"], PARSE_ERROR);
        assert_eq!(reply["id"], Value::Null);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = server_for("http://localhost:1");
        let reply = call(
            &server,
            json!({ "jsonrpc": "2.0", "id": "a", "method": "resources/list" }),
        )
        .await;
        assert_eq!(reply["error"]["code"], METHOD_NOT_FOUND);
        assert_eq!(reply["id"], "a");
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = server_for("http://localhost:1");
        let reply = call(
            &server,
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
        )
        .await;
        let tools = reply["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), default_tools().len());
        assert!(tools.iter().any(|t| t["name"] == "check_inventory"));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_params() {
        let server = server_for("http://localhost:1");
        let reply = call(
            &server,
            json!({ "jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": { "name": "nope" } }),
        )
        .await;
        assert_eq!(reply["error"]["code"], INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tool_call_renders_markdown_and_structured() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sales_orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "id": 1, "customer_id": 2, "order_no": "SO-1", "status": "PENDING" }]
            })))
            .mount(&mock)
            .await;

        let server = server_for(&mock.uri());
        let reply = call(
            &server,
            json!({
                "jsonrpc": "2.0", "id": 4, "method": "tools/call",
                "params": { "name": "list_sales_orders", "arguments": {} }
            }),
        )
        .await;

        let result = &reply["result"];
        assert_eq!(result["isError"], false);
        assert_eq!(result["structuredContent"]["orders"][0]["order_no"], "SO-1");
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("# Sales orders"));
        assert!(text.contains("| SO-1 | 2 | PENDING | - | - |"));
    }

    #[tokio::test]
    async fn test_tool_call_falls_back_to_json_without_template() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/purchase_orders"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&mock)
            .await;

        let client = KatanaClient::builder()
            .base_url(mock.uri())
            .api_key("k")
            .build()
            .unwrap();
        let server =
            McpServer::with_tools(client, default_tools(), Renderer::with_templates(&[]).unwrap());
        let reply = call(
            &server,
            json!({
                "jsonrpc": "2.0", "id": 5, "method": "tools/call",
                "params": { "name": "list_purchase_orders" }
            }),
        )
        .await;

        let text = reply["result"]["content"][0]["text"].as_str().unwrap();
        let parsed: Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed, json!({ "count": 0, "orders": [] }));
    }

    #[tokio::test]
    async fn test_api_error_becomes_tool_error_result() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "statusCode": 401, "name": "UnauthorizedError", "message": "Unauthorized"
            })))
            .mount(&mock)
            .await;

        let server = server_for(&mock.uri());
        let reply = call(
            &server,
            json!({
                "jsonrpc": "2.0", "id": 6, "method": "tools/call",
                "params": { "name": "check_inventory", "arguments": { "sku": "X" } }
            }),
        )
        .await;

        assert!(reply.get("error").is_none());
        assert_eq!(reply["result"]["isError"], true);
        let text = reply["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("401"));
    }
}
