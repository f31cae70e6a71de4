// src/models/inventory.rs
// =============================================================================
// Stock levels per (variant, location).
//
// Katana sends quantities as decimal strings ("12.00000"), hence Quantity.
// =============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Field, Quantity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub variant_id: i64,
    pub location_id: i64,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub reorder_point: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub average_cost: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub value_in_stock: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quantity_in_stock: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quantity_committed: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quantity_expected: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quantity_missing_or_excess: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub quantity_potential: Field<Quantity>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl InventoryItem {
    pub fn in_stock(&self) -> f64 {
        self.quantity_in_stock.as_option().map_or(0.0, |q| q.value())
    }

    pub fn committed(&self) -> f64 {
        self.quantity_committed.as_option().map_or(0.0, |q| q.value())
    }

    pub fn expected(&self) -> f64 {
        self.quantity_expected.as_option().map_or(0.0, |q| q.value())
    }

    /// In stock minus committed; what can still be promised to new orders
    pub fn available(&self) -> f64 {
        self.in_stock() - self.committed()
    }
}
