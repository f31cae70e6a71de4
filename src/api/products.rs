// src/api/products.rs

use super::{push_paging, DateFilters};
use crate::client::{impl_paginated, Endpoint};
use crate::models::{ListResponse, Product};
use crate::types::QueryParams;

/// GET /products
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListProducts {
    pub ids: Vec<i64>,
    pub name: Option<String>,
    pub uom: Option<String>,
    pub is_sellable: Option<bool>,
    pub is_producible: Option<bool>,
    pub is_purchasable: Option<bool>,
    pub batch_tracked: Option<bool>,
    pub include_archived: Option<bool>,
    pub include_deleted: Option<bool>,
    pub dates: DateFilters,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl Endpoint for ListProducts {
    type Output = ListResponse<Product>;

    fn path(&self) -> String {
        "/products".to_string()
    }

    fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_all("ids", &self.ids)
            .push_opt("name", self.name.as_deref())
            .push_opt("uom", self.uom.as_deref())
            .push_opt("is_sellable", self.is_sellable)
            .push_opt("is_producible", self.is_producible)
            .push_opt("is_purchasable", self.is_purchasable)
            .push_opt("batch_tracked", self.batch_tracked)
            .push_opt("include_archived", self.include_archived)
            .push_opt("include_deleted", self.include_deleted);
        self.dates.apply(&mut query);
        push_paging(&mut query, self.limit, self.page);
        query
    }
}

impl_paginated!(ListProducts);

/// GET /products/{id}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetProduct {
    pub id: i64,
}

impl Endpoint for GetProduct {
    type Output = Product;

    fn path(&self) -> String {
        format!("/products/{}", self.id)
    }
}
