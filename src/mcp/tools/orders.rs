// src/mcp/tools/orders.rs
// =============================================================================
// Order tools: list sales orders, list purchase orders, create a
// manufacturing order.
// =============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{parse_arguments, Tool, ToolError, ToolOutput};
use crate::api::{CreateManufacturingOrder, ListPurchaseOrders, ListSalesOrders};
use crate::client::KatanaClient;
use crate::models::{CreateManufacturingOrderRequest, PurchaseOrderStatus, SalesOrderStatus};
use crate::types::{Field, Quantity};

fn default_order_limit() -> u32 {
    20
}

fn status_text<T: std::fmt::Display>(status: &Field<T>) -> Option<String> {
    status.as_option().map(|s| s.to_string())
}

#[derive(Debug, Deserialize)]
struct ListSalesOrdersArgs {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    customer_id: Option<i64>,
    #[serde(default = "default_order_limit")]
    limit: u32,
}

pub struct ListSalesOrdersTool;

#[async_trait]
impl Tool for ListSalesOrdersTool {
    fn name(&self) -> &'static str {
        "list_sales_orders"
    }

    fn description(&self) -> &'static str {
        "List recent sales orders, optionally filtered by status or customer."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "status": {
                    "type": "string",
                    "enum": ["NOT_SHIPPED", "PENDING", "PACKED", "DELIVERED"]
                },
                "customer_id": { "type": "integer" },
                "limit": { "type": "integer", "minimum": 1, "maximum": 250, "default": 20 }
            }
        })
    }

    async fn call(&self, client: &KatanaClient, arguments: Value) -> Result<ToolOutput, ToolError> {
        let args: ListSalesOrdersArgs = parse_arguments(arguments)?;
        let status = args.status.as_deref().map(SalesOrderStatus::from_wire);

        let orders = client
            .fetch(&ListSalesOrders {
                status,
                customer_id: args.customer_id,
                limit: Some(args.limit.clamp(1, 250)),
                ..Default::default()
            })
            .await?;

        let orders: Vec<Value> = orders
            .data
            .iter()
            .map(|o| {
                json!({
                    "id": o.id,
                    "order_no": o.order_no,
                    "customer_id": o.customer_id,
                    "status": status_text(&o.status),
                    "total": o.total.as_option().map(|t| t.value()),
                    "currency": o.currency.as_option(),
                    "delivery_date": o.delivery_date.as_option().map(|d| d.date_naive().to_string()),
                    "rows": o.rows().len(),
                })
            })
            .collect();

        Ok(ToolOutput {
            template: "sales_orders.md",
            structured: json!({ "count": orders.len(), "orders": orders }),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ListPurchaseOrdersArgs {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    supplier_id: Option<i64>,
    #[serde(default = "default_order_limit")]
    limit: u32,
}

pub struct ListPurchaseOrdersTool;

#[async_trait]
impl Tool for ListPurchaseOrdersTool {
    fn name(&self) -> &'static str {
        "list_purchase_orders"
    }

    fn description(&self) -> &'static str {
        "List purchase orders, optionally filtered by status or supplier."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "status": {
                    "type": "string",
                    "enum": ["NOT_RECEIVED", "PARTIALLY_RECEIVED", "RECEIVED"]
                },
                "supplier_id": { "type": "integer" },
                "limit": { "type": "integer", "minimum": 1, "maximum": 250, "default": 20 }
            }
        })
    }

    async fn call(&self, client: &KatanaClient, arguments: Value) -> Result<ToolOutput, ToolError> {
        let args: ListPurchaseOrdersArgs = parse_arguments(arguments)?;
        let status = args.status.as_deref().map(PurchaseOrderStatus::from_wire);

        let orders = client
            .fetch(&ListPurchaseOrders {
                status,
                supplier_id: args.supplier_id,
                limit: Some(args.limit.clamp(1, 250)),
                ..Default::default()
            })
            .await?;

        let orders: Vec<Value> = orders
            .data
            .iter()
            .map(|o| {
                json!({
                    "id": o.id,
                    "order_no": o.order_no,
                    "supplier_id": o.supplier_id,
                    "status": status_text(&o.status),
                    "total": o.total.as_option().map(|t| t.value()),
                    "currency": o.currency.as_option(),
                    "expected_arrival_date": o
                        .expected_arrival_date
                        .as_option()
                        .map(|d| d.date_naive().to_string()),
                })
            })
            .collect();

        Ok(ToolOutput {
            template: "purchase_orders.md",
            structured: json!({ "count": orders.len(), "orders": orders }),
        })
    }
}

#[derive(Debug, Deserialize)]
struct CreateManufacturingOrderArgs {
    variant_id: i64,
    location_id: i64,
    planned_quantity: f64,
    #[serde(default)]
    order_no: Option<String>,
    #[serde(default)]
    production_deadline_date: Option<DateTime<Utc>>,
    #[serde(default)]
    additional_info: Option<String>,
}

pub struct CreateManufacturingOrderTool;

#[async_trait]
impl Tool for CreateManufacturingOrderTool {
    fn name(&self) -> &'static str {
        "create_manufacturing_order"
    }

    fn description(&self) -> &'static str {
        "Create a manufacturing order for a product variant at a location."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "variant_id": { "type": "integer" },
                "location_id": { "type": "integer" },
                "planned_quantity": { "type": "number", "exclusiveMinimum": 0 },
                "order_no": { "type": "string" },
                "production_deadline_date": { "type": "string", "format": "date-time" },
                "additional_info": { "type": "string" }
            },
            "required": ["variant_id", "location_id", "planned_quantity"]
        })
    }

    async fn call(&self, client: &KatanaClient, arguments: Value) -> Result<ToolOutput, ToolError> {
        let args: CreateManufacturingOrderArgs = parse_arguments(arguments)?;
        if args.planned_quantity <= 0.0 {
            return Err(ToolError::InvalidArguments(
                "planned_quantity must be greater than zero".into(),
            ));
        }

        // Leave optional keys out entirely rather than sending nulls
        let unset_if_none = |value: Option<String>| value.map_or(Field::Unset, Field::Value);
        let body = CreateManufacturingOrderRequest {
            variant_id: args.variant_id,
            location_id: args.location_id,
            planned_quantity: Quantity::new(args.planned_quantity),
            order_no: unset_if_none(args.order_no),
            order_created_date: Field::Unset,
            production_deadline_date: args
                .production_deadline_date
                .map_or(Field::Unset, Field::Value),
            additional_info: unset_if_none(args.additional_info),
        };

        let order = client.fetch(&CreateManufacturingOrder { body }).await?;

        Ok(ToolOutput {
            template: "manufacturing_order_created.md",
            structured: json!({
                "id": order.id,
                "order_no": order.order_no.as_option(),
                "status": status_text(&order.status),
                "variant_id": order.variant_id,
                "location_id": order.location_id.as_option(),
                "planned_quantity": order.planned_quantity.as_option().map(|q| q.value()),
            }),
        })
    }
}
