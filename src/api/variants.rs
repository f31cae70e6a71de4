// src/api/variants.rs
// =============================================================================
// /variants: the SKU-level records. Looking a SKU up is the usual first step
// before asking for stock, since inventory is keyed by variant_id.
// =============================================================================

use super::{push_paging, DateFilters};
use crate::client::{impl_paginated, Endpoint};
use crate::models::{ListResponse, Variant};
use crate::types::QueryParams;

/// GET /variants
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListVariants {
    pub ids: Vec<i64>,
    pub sku: Vec<String>,
    pub product_id: Option<i64>,
    pub material_id: Option<i64>,
    pub sales_price: Option<f64>,
    pub purchase_price: Option<f64>,
    pub internal_barcode: Option<String>,
    pub registered_barcode: Option<String>,
    pub include_archived: Option<bool>,
    pub include_deleted: Option<bool>,
    pub dates: DateFilters,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl ListVariants {
    /// Lookup of a single SKU
    pub fn by_sku(sku: impl Into<String>) -> Self {
        Self {
            sku: vec![sku.into()],
            ..Default::default()
        }
    }
}

impl Endpoint for ListVariants {
    type Output = ListResponse<Variant>;

    fn path(&self) -> String {
        "/variants".to_string()
    }

    fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_all("ids", &self.ids)
            .push_all("sku", &self.sku)
            .push_opt("product_id", self.product_id)
            .push_opt("material_id", self.material_id)
            .push_opt("sales_price", self.sales_price)
            .push_opt("purchase_price", self.purchase_price)
            .push_opt("internal_barcode", self.internal_barcode.as_deref())
            .push_opt("registered_barcode", self.registered_barcode.as_deref())
            .push_opt("include_archived", self.include_archived)
            .push_opt("include_deleted", self.include_deleted);
        self.dates.apply(&mut query);
        push_paging(&mut query, self.limit, self.page);
        query
    }
}

impl_paginated!(ListVariants);

/// GET /variants/{id}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetVariant {
    pub id: i64,
}

impl Endpoint for GetVariant {
    type Output = Variant;

    fn path(&self) -> String {
        format!("/variants/{}", self.id)
    }
}
