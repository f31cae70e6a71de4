// src/api/manufacturing_orders.rs

use reqwest::Method;
use serde_json::Value;

use super::{push_paging, DateFilters};
use crate::client::{impl_paginated, Endpoint};
use crate::error::Result;
use crate::models::{
    CreateManufacturingOrderRequest, ListResponse, ManufacturingOrder, ManufacturingOrderStatus,
};
use crate::types::QueryParams;

/// GET /manufacturing_orders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListManufacturingOrders {
    pub ids: Vec<i64>,
    pub status: Option<ManufacturingOrderStatus>,
    pub order_no: Option<String>,
    pub location_id: Option<i64>,
    pub is_linked_to_sales_order: Option<bool>,
    pub include_deleted: Option<bool>,
    pub dates: DateFilters,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl Endpoint for ListManufacturingOrders {
    type Output = ListResponse<ManufacturingOrder>;

    fn path(&self) -> String {
        "/manufacturing_orders".to_string()
    }

    fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_all("ids", &self.ids)
            .push_opt("status", self.status.as_ref())
            .push_opt("order_no", self.order_no.as_deref())
            .push_opt("location_id", self.location_id)
            .push_opt("is_linked_to_sales_order", self.is_linked_to_sales_order)
            .push_opt("include_deleted", self.include_deleted);
        self.dates.apply(&mut query);
        push_paging(&mut query, self.limit, self.page);
        query
    }
}

impl_paginated!(ListManufacturingOrders);

/// POST /manufacturing_orders
#[derive(Debug, Clone, PartialEq)]
pub struct CreateManufacturingOrder {
    pub body: CreateManufacturingOrderRequest,
}

impl Endpoint for CreateManufacturingOrder {
    type Output = ManufacturingOrder;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/manufacturing_orders".to_string()
    }

    fn body(&self) -> Result<Option<Value>> {
        Ok(Some(serde_json::to_value(&self.body)?))
    }
}
