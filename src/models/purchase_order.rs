// src/models/purchase_order.rs
// =============================================================================
// Purchase orders (regular and outsourced) and the body for creating one.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Field, Quantity};

string_enum! {
    pub enum PurchaseOrderStatus {
        NotReceived => "NOT_RECEIVED",
        PartiallyReceived => "PARTIALLY_RECEIVED",
        Received => "RECEIVED",
    }
}

string_enum! {
    pub enum PurchaseOrderEntityType {
        Regular => "regular",
        Outsourced => "outsourced",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderRow {
    pub id: i64,
    pub quantity: Quantity,
    pub variant_id: i64,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub price_per_unit: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tax_rate_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub received_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub arrival_date: Field<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: i64,
    pub order_no: String,
    pub supplier_id: i64,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<PurchaseOrderStatus>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub entity_type: Field<PurchaseOrderEntityType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub location_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub order_created_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub expected_arrival_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub total: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub additional_info: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub purchase_order_rows: Field<Vec<PurchaseOrderRow>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl PurchaseOrder {
    pub fn rows(&self) -> &[PurchaseOrderRow] {
        self.purchase_order_rows.as_option().map_or(&[], Vec::as_slice)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePurchaseOrderRow {
    pub quantity: Quantity,
    pub variant_id: i64,
    pub price_per_unit: Quantity,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tax_rate_id: Field<i64>,
}

/// Body for POST /purchase_orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePurchaseOrderRequest {
    pub order_no: String,
    pub supplier_id: i64,
    pub location_id: i64,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub entity_type: Field<PurchaseOrderEntityType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub expected_arrival_date: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub additional_info: Field<String>,
    pub purchase_order_rows: Vec<CreatePurchaseOrderRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_shape() {
        let request = CreatePurchaseOrderRequest {
            order_no: "PO-7".into(),
            supplier_id: 3,
            location_id: 1,
            entity_type: Field::Value(PurchaseOrderEntityType::Regular),
            currency: Field::Unset,
            expected_arrival_date: Field::Unset,
            additional_info: Field::Null,
            purchase_order_rows: vec![CreatePurchaseOrderRow {
                quantity: Quantity::new(10.0),
                variant_id: 9,
                price_per_unit: Quantity::new(1.5),
                tax_rate_id: Field::Unset,
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "order_no": "PO-7",
                "supplier_id": 3,
                "location_id": 1,
                "entity_type": "regular",
                "additional_info": null,
                "purchase_order_rows": [
                    { "quantity": 10.0, "variant_id": 9, "price_per_unit": 1.5 }
                ]
            })
        );
    }

    #[test]
    fn test_purchase_order_status() {
        let po: PurchaseOrder = serde_json::from_value(json!({
            "id": 1,
            "order_no": "PO-1",
            "supplier_id": 2,
            "status": "PARTIALLY_RECEIVED"
        }))
        .unwrap();
        assert_eq!(
            po.status.as_option(),
            Some(&PurchaseOrderStatus::PartiallyReceived)
        );
        assert!(po.rows().is_empty());
    }

    #[test]
    fn test_purchase_order_round_trip() {
        let raw = json!({
            "id": 8,
            "order_no": "PO-8",
            "supplier_id": 2,
            "status": "NOT_RECEIVED",
            "entity_type": "outsourced",
            "currency": "USD",
            "total": "45.00000",
            "additional_info": null,
            "expected_arrival_date": "2024-07-01T09:30:00.500Z",
            "purchase_order_rows": [
                {
                    "id": 81,
                    "quantity": "3.00000",
                    "variant_id": 9,
                    "price_per_unit": 15,
                    "received_date": null,
                    "batch_transactions": []
                }
            ],
            "billing_status": "NOT_BILLED"
        });
        let po: PurchaseOrder = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(po.rows()[0].quantity.value(), 3.0);
        assert_eq!(serde_json::to_value(&po).unwrap(), raw);
    }

    #[test]
    fn test_create_request_round_trip() {
        let raw = json!({
            "order_no": "PO-9",
            "supplier_id": 3,
            "location_id": 1,
            "purchase_order_rows": [
                { "quantity": 4, "variant_id": 9, "price_per_unit": "2.50", "tax_rate_id": 1 }
            ]
        });
        let request: CreatePurchaseOrderRequest = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&request).unwrap(), raw);
    }
}
