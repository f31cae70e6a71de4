// src/mcp/tools/mod.rs
// =============================================================================
// MCP tools: small wrappers around one or two client calls each.
//
// A tool gets the raw `arguments` object from tools/call, talks to Katana, and
// returns structured JSON plus the name of the template that turns it into
// markdown. Rendering happens in the server so every tool gets the same
// fallback behaviour.
// =============================================================================

mod catalog;
mod orders;

pub use catalog::{CheckInventory, ListLowStockItems, SearchProducts};
pub use orders::{CreateManufacturingOrderTool, ListPurchaseOrdersTool, ListSalesOrdersTool};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::client::KatanaClient;
use crate::error::KatanaError;

/// What a tool hands back to the server
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    /// Template used to render `structured` as markdown
    pub template: &'static str,
    pub structured: Value,
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Katana(#[from] KatanaError),
}

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON Schema of the `arguments` object
    fn input_schema(&self) -> Value;

    async fn call(&self, client: &KatanaClient, arguments: Value) -> Result<ToolOutput, ToolError>;
}

/// Every tool the server exposes, in tools/list order
pub fn default_tools() -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(SearchProducts),
        Box::new(CheckInventory),
        Box::new(ListLowStockItems::default()),
        Box::new(ListSalesOrdersTool),
        Box::new(ListPurchaseOrdersTool),
        Box::new(CreateManufacturingOrderTool),
    ]
}

// Missing `arguments` is treated like an empty object
pub(crate) fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::HashSet;

    #[derive(Debug, Deserialize)]
    struct Args {
        #[serde(default)]
        limit: Option<u32>,
    }

    #[test]
    fn test_null_arguments_mean_empty_object() {
        let args: Args = parse_arguments(Value::Null).unwrap();
        assert_eq!(args.limit, None);
    }

    #[test]
    fn test_wrong_type_is_invalid_arguments() {
        let err = parse_arguments::<Args>(json!({ "limit": "many" })).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_tool_names_are_unique_and_schemas_are_objects() {
        let tools = default_tools();
        let names: HashSet<&str> = tools.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), tools.len());
        for tool in &tools {
            assert_eq!(tool.input_schema()["type"], "object", "{}", tool.name());
        }
    }
}
