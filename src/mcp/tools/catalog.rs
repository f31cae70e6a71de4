// src/mcp/tools/catalog.rs
// =============================================================================
// Product and stock tools:
//   search_products       products by name, with their variant SKUs
//   check_inventory       stock for one SKU, per location and in total
//   list_low_stock_items  variants whose total stock is under a threshold
// =============================================================================

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::{parse_arguments, Tool, ToolError, ToolOutput};
use crate::api::{ListInventory, ListProducts, ListVariants};
use crate::client::KatanaClient;
use crate::models::InventoryItem;

// Upper bound on inventory pages walked by list_low_stock_items
pub const MAX_INVENTORY_PAGES: u32 = 20;

const INVENTORY_PAGE_SIZE: u32 = 250;

fn default_search_limit() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
struct SearchProductsArgs {
    query: String,
    #[serde(default = "default_search_limit")]
    limit: u32,
}

pub struct SearchProducts;

#[async_trait]
impl Tool for SearchProducts {
    fn name(&self) -> &'static str {
        "search_products"
    }

    fn description(&self) -> &'static str {
        "Search products by name and list their variants (SKU and sales price)."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": { "type": "string", "description": "Product name to search for" },
                "limit": { "type": "integer", "minimum": 1, "maximum": 250, "default": 10 }
            },
            "required": ["query"]
        })
    }

    async fn call(&self, client: &KatanaClient, arguments: Value) -> Result<ToolOutput, ToolError> {
        let args: SearchProductsArgs = parse_arguments(arguments)?;
        if args.query.trim().is_empty() {
            return Err(ToolError::InvalidArguments("query must not be empty".into()));
        }

        let products = client
            .fetch(&ListProducts {
                name: Some(args.query.trim().to_string()),
                limit: Some(args.limit.clamp(1, 250)),
                ..Default::default()
            })
            .await?;

        let products: Vec<Value> = products
            .data
            .iter()
            .map(|p| {
                json!({
                    "id": p.id,
                    "name": p.name,
                    "uom": p.uom.as_option(),
                    "category": p.category_name.as_option(),
                    "variants": p.variants().iter().map(|v| json!({
                        "id": v.id,
                        "sku": v.display_sku(),
                        "sales_price": v.sales_price.as_option().map(|q| q.value()),
                    })).collect::<Vec<_>>(),
                })
            })
            .collect();

        Ok(ToolOutput {
            template: "search_products.md",
            structured: json!({
                "query": args.query,
                "count": products.len(),
                "products": products,
            }),
        })
    }
}

#[derive(Debug, Deserialize)]
struct CheckInventoryArgs {
    sku: String,
}

pub struct CheckInventory;

#[async_trait]
impl Tool for CheckInventory {
    fn name(&self) -> &'static str {
        "check_inventory"
    }

    fn description(&self) -> &'static str {
        "Check stock for a SKU: in stock, committed, expected and available, per location."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "sku": { "type": "string", "description": "Variant SKU" }
            },
            "required": ["sku"]
        })
    }

    async fn call(&self, client: &KatanaClient, arguments: Value) -> Result<ToolOutput, ToolError> {
        let args: CheckInventoryArgs = parse_arguments(arguments)?;
        let sku = args.sku.trim().to_string();
        if sku.is_empty() {
            return Err(ToolError::InvalidArguments("sku must not be empty".into()));
        }

        // The filter is a hint; only an exact SKU match counts
        let variants = client.fetch(&ListVariants::by_sku(&sku)).await?;
        let variant = variants
            .data
            .into_iter()
            .find(|v| v.sku.as_option() == Some(&sku))
            .ok_or_else(|| ToolError::NotFound(format!("no variant with SKU {sku}")))?;
        debug!(sku = %sku, variant_id = variant.id, "resolved SKU");

        let stock = client
            .fetch(&ListInventory {
                variant_id: vec![variant.id],
                ..Default::default()
            })
            .await?;

        let locations: Vec<Value> = stock.data.iter().map(stock_row).collect();
        let totals = Totals::sum(&stock.data);

        Ok(ToolOutput {
            template: "check_inventory.md",
            structured: json!({
                "sku": sku,
                "variant_id": variant.id,
                "locations": locations,
                "totals": totals.to_json(),
            }),
        })
    }
}

fn stock_row(item: &InventoryItem) -> Value {
    json!({
        "location_id": item.location_id,
        "in_stock": item.in_stock(),
        "committed": item.committed(),
        "expected": item.expected(),
        "available": item.available(),
    })
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Totals {
    in_stock: f64,
    committed: f64,
    expected: f64,
}

impl Totals {
    fn sum(items: &[InventoryItem]) -> Self {
        items.iter().fold(Totals::default(), |acc, item| Totals {
            in_stock: acc.in_stock + item.in_stock(),
            committed: acc.committed + item.committed(),
            expected: acc.expected + item.expected(),
        })
    }

    fn to_json(self) -> Value {
        json!({
            "in_stock": self.in_stock,
            "committed": self.committed,
            "expected": self.expected,
            "available": self.in_stock - self.committed,
        })
    }
}

fn default_threshold() -> f64 {
    10.0
}

fn default_low_stock_limit() -> usize {
    50
}

#[derive(Debug, Deserialize)]
struct LowStockArgs {
    #[serde(default = "default_threshold")]
    threshold: f64,
    #[serde(default = "default_low_stock_limit")]
    limit: usize,
}

pub struct ListLowStockItems {
    max_pages: u32,
}

impl ListLowStockItems {
    /// Walks at most `max_pages` inventory pages; the output says when that
    /// limit cut the scan short
    pub fn with_max_pages(max_pages: u32) -> Self {
        Self { max_pages }
    }
}

impl Default for ListLowStockItems {
    fn default() -> Self {
        Self::with_max_pages(MAX_INVENTORY_PAGES)
    }
}

#[async_trait]
impl Tool for ListLowStockItems {
    fn name(&self) -> &'static str {
        "list_low_stock_items"
    }

    fn description(&self) -> &'static str {
        "List variants whose total stock across locations is below a threshold. \
         Only variants that have inventory rows are considered."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "threshold": { "type": "number", "default": 10 },
                "limit": { "type": "integer", "minimum": 1, "default": 50 }
            }
        })
    }

    async fn call(&self, client: &KatanaClient, arguments: Value) -> Result<ToolOutput, ToolError> {
        let args: LowStockArgs = parse_arguments(arguments)?;

        let inventory = client
            .fetch_all(
                &ListInventory {
                    limit: Some(INVENTORY_PAGE_SIZE),
                    ..Default::default()
                },
                self.max_pages,
            )
            .await?;
        if inventory.truncated {
            warn!(
                max_pages = self.max_pages,
                rows = inventory.items.len(),
                "inventory scan hit the page limit; low stock list is partial"
            );
        }

        // Stock is per location; low stock is judged on the variant total
        let mut per_variant: BTreeMap<i64, Totals> = BTreeMap::new();
        for item in &inventory.items {
            let entry = per_variant.entry(item.variant_id).or_default();
            entry.in_stock += item.in_stock();
            entry.committed += item.committed();
            entry.expected += item.expected();
        }

        let mut low: Vec<(i64, Totals)> = per_variant
            .into_iter()
            .filter(|(_, totals)| totals.in_stock < args.threshold)
            .collect();
        low.sort_by(|a, b| a.1.in_stock.total_cmp(&b.1.in_stock).then(a.0.cmp(&b.0)));
        low.truncate(args.limit.max(1));

        // One extra call to put SKUs on the rows
        let mut skus: BTreeMap<i64, String> = BTreeMap::new();
        if !low.is_empty() {
            let variants = client
                .fetch(&ListVariants {
                    ids: low.iter().map(|(id, _)| *id).collect(),
                    limit: Some(250),
                    ..Default::default()
                })
                .await?;
            for v in variants.data {
                skus.insert(v.id, v.display_sku());
            }
        }

        let items: Vec<Value> = low
            .iter()
            .map(|(variant_id, totals)| {
                json!({
                    "variant_id": variant_id,
                    "sku": skus.get(variant_id).cloned().unwrap_or_else(|| format!("#{variant_id}")),
                    "in_stock": totals.in_stock,
                    "expected": totals.expected,
                })
            })
            .collect();

        Ok(ToolOutput {
            template: "low_stock.md",
            structured: json!({
                "threshold": args.threshold,
                "count": items.len(),
                "truncated": inventory.truncated,
                "items": items,
            }),
        })
    }
}
