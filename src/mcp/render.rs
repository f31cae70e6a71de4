// src/mcp/render.rs
// =============================================================================
// Markdown rendering for tool results.
//
// Each tool names a Tera template; the template is rendered with the tool's
// structured JSON as context. If the template is missing or refers to a key
// the data doesn't have, the text falls back to the pretty-printed JSON so the
// caller still gets something readable.
// =============================================================================

use std::error::Error as _;

use serde_json::Value;
use tera::{Context, Tera};
use tracing::warn;

use crate::error::{KatanaError, Result};

// Built into the binary so the server has no runtime file dependencies
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "search_products.md",
        include_str!("../../templates/search_products.md"),
    ),
    (
        "check_inventory.md",
        include_str!("../../templates/check_inventory.md"),
    ),
    (
        "low_stock.md",
        include_str!("../../templates/low_stock.md"),
    ),
    (
        "sales_orders.md",
        include_str!("../../templates/sales_orders.md"),
    ),
    (
        "purchase_orders.md",
        include_str!("../../templates/purchase_orders.md"),
    ),
    (
        "manufacturing_order_created.md",
        include_str!("../../templates/manufacturing_order_created.md"),
    ),
];

#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Renderer {
    /// Renderer loaded with the templates shipped in templates/
    pub fn builtin() -> Self {
        let mut tera = Tera::default();
        for (name, source) in BUILTIN_TEMPLATES {
            // A broken template only costs us its pretty output
            if let Err(e) = tera.add_raw_template(name, source) {
                warn!(template = name, error = %e, "skipping template that failed to parse");
            }
        }
        Self { tera }
    }

    pub fn with_templates(templates: &[(&str, &str)]) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.iter().copied())
            .map_err(|e| KatanaError::Template(error_chain(&e)))?;
        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        let context =
            Context::from_value(data.clone()).map_err(|e| KatanaError::Template(error_chain(&e)))?;
        self.tera
            .render(template, &context)
            .map_err(|e| KatanaError::Template(error_chain(&e)))
    }

    /// Rendered markdown, or pretty JSON when rendering fails
    pub fn render_or_json(&self, template: &str, data: &Value) -> String {
        match self.render(template, data) {
            Ok(text) => text,
            Err(e) => {
                warn!(template, error = %e, "template failed, falling back to JSON");
                serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
            }
        }
    }
}

// Tera's top-level message is just "Failed to render 'x'"; the useful part
// (which variable was missing) is in the source chain.
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
