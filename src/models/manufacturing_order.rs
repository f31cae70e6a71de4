// src/models/manufacturing_order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Field, Quantity};

string_enum! {
    pub enum ManufacturingOrderStatus {
        NotStarted => "NOT_STARTED",
        Blocked => "BLOCKED",
        InProgress => "IN_PROGRESS",
        Done => "DONE",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturingOrder {
    pub id: i64,
    pub variant_id: i64,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub order_no: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<ManufacturingOrderStatus>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub planned_quantity: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub actual_quantity: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub location_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub order_created_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub production_deadline_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub additional_info: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total_cost: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

/// Body for POST /manufacturing_orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateManufacturingOrderRequest {
    pub variant_id: i64,
    pub location_id: i64,
    pub planned_quantity: Quantity,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub order_no: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub order_created_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub production_deadline_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub additional_info: Field<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_manufacturing_order_round_trip() {
        let raw = json!({
            "id": 21,
            "variant_id": 5,
            "order_no": "MO-21",
            "status": "IN_PROGRESS",
            "planned_quantity": "12.00000",
            "actual_quantity": null,
            "location_id": 1,
            "production_deadline_date": "2024-09-01T16:00:00.001Z",
            "total_cost": 480,
            "ingredient_availability": "IN_STOCK"
        });
        let order: ManufacturingOrder = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(order.status.as_option(), Some(&ManufacturingOrderStatus::InProgress));
        assert_eq!(order.planned_quantity.as_option().map(|q| q.value()), Some(12.0));
        assert_eq!(serde_json::to_value(&order).unwrap(), raw);
    }

    #[test]
    fn test_create_request_round_trip() {
        let raw = json!({
            "variant_id": 5,
            "location_id": 1,
            "planned_quantity": 12,
            "order_no": "MO-22",
            "additional_info": null
        });
        let request: CreateManufacturingOrderRequest =
            serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&request).unwrap(), raw);
    }
}
