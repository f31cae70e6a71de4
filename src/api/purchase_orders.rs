// src/api/purchase_orders.rs

use reqwest::Method;
use serde_json::Value;

use super::{push_paging, DateFilters};
use crate::client::{impl_paginated, Endpoint};
use crate::error::Result;
use crate::models::{
    CreatePurchaseOrderRequest, ListResponse, PurchaseOrder, PurchaseOrderEntityType,
    PurchaseOrderStatus,
};
use crate::types::QueryParams;

/// GET /purchase_orders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPurchaseOrders {
    pub ids: Vec<i64>,
    pub order_no: Option<String>,
    pub entity_type: Option<PurchaseOrderEntityType>,
    pub status: Option<PurchaseOrderStatus>,
    pub currency: Option<String>,
    pub location_id: Option<i64>,
    pub supplier_id: Option<i64>,
    pub include_deleted: Option<bool>,
    pub dates: DateFilters,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl Endpoint for ListPurchaseOrders {
    type Output = ListResponse<PurchaseOrder>;

    fn path(&self) -> String {
        "/purchase_orders".to_string()
    }

    fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_all("ids", &self.ids)
            .push_opt("order_no", self.order_no.as_deref())
            .push_opt("entity_type", self.entity_type.as_ref())
            .push_opt("status", self.status.as_ref())
            .push_opt("currency", self.currency.as_deref())
            .push_opt("location_id", self.location_id)
            .push_opt("supplier_id", self.supplier_id)
            .push_opt("include_deleted", self.include_deleted);
        self.dates.apply(&mut query);
        push_paging(&mut query, self.limit, self.page);
        query
    }
}

impl_paginated!(ListPurchaseOrders);

/// GET /purchase_orders/{id}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetPurchaseOrder {
    pub id: i64,
}

impl Endpoint for GetPurchaseOrder {
    type Output = PurchaseOrder;

    fn path(&self) -> String {
        format!("/purchase_orders/{}", self.id)
    }
}

/// POST /purchase_orders
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePurchaseOrder {
    pub body: CreatePurchaseOrderRequest,
}

impl Endpoint for CreatePurchaseOrder {
    type Output = PurchaseOrder;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/purchase_orders".to_string()
    }

    fn body(&self) -> Result<Option<Value>> {
        Ok(Some(serde_json::to_value(&self.body)?))
    }
}
