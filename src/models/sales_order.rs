// src/models/sales_order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Field, Quantity};

string_enum! {
    /// Delivery status of a sales order
    pub enum SalesOrderStatus {
        NotShipped => "NOT_SHIPPED",
        Pending => "PENDING",
        Packed => "PACKED",
        Delivered => "DELIVERED",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderRow {
    pub id: i64,
    pub quantity: Quantity,
    pub variant_id: i64,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub price_per_unit: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tax_rate_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub location_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total_discount: Field<Quantity>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: i64,
    pub customer_id: i64,
    pub order_no: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<SalesOrderStatus>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub source: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub order_created_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub delivery_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub location_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total_in_base_currency: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub additional_info: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub customer_ref: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sales_order_rows: Field<Vec<SalesOrderRow>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl SalesOrder {
    /// Order lines; empty when the response left them out
    pub fn rows(&self) -> &[SalesOrderRow] {
        self.sales_order_rows.as_option().map_or(&[], Vec::as_slice)
    }
}
