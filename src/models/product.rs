// src/models/product.rs
// =============================================================================
// Products, materials and the variants (SKUs) that hang off them.
//
// In Katana stock is tracked per variant, never per product: a product with
// sizes S/M/L has three variants, each with its own SKU and prices.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Field, Quantity};

string_enum! {
    /// What a variant belongs to
    pub enum VariantType {
        Product => "product",
        Material => "material",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sku: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sales_price: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub purchase_price: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub product_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub material_id: Field<i64>,
    #[serde(default, rename = "type", skip_serializing_if = "Field::is_unset")]
    pub variant_type: Field<VariantType>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub internal_barcode: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub registered_barcode: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub supplier_item_codes: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Variant {
    /// SKU or `#<id>` when the variant has none
    pub fn display_sku(&self) -> String {
        match self.sku.as_option() {
            Some(sku) if !sku.is_empty() => sku.clone(),
            _ => format!("#{}", self.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub uom: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub category_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_sellable: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_producible: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_purchasable: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub batch_tracked: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub additional_info: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub variants: Field<Vec<Variant>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub archived_at: Field<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Product {
    /// Variants in the response; empty when the key was absent or null
    pub fn variants(&self) -> &[Variant] {
        self.variants.as_option().map_or(&[], Vec::as_slice)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub uom: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub category_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub default_supplier_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub variants: Field<Vec<Variant>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub archived_at: Field<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Material {
    pub fn variants(&self) -> &[Variant] {
        self.variants.as_option().map_or(&[], Vec::as_slice)
    }
}
