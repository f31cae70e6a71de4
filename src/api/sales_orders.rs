// src/api/sales_orders.rs

use super::{push_paging, DateFilters};
use crate::client::{impl_paginated, Endpoint};
use crate::models::{ListResponse, SalesOrder, SalesOrderStatus};
use crate::types::QueryParams;

/// GET /sales_orders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSalesOrders {
    pub ids: Vec<i64>,
    pub order_no: Option<String>,
    pub source: Option<String>,
    pub location_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub status: Option<SalesOrderStatus>,
    pub currency: Option<String>,
    pub include_deleted: Option<bool>,
    pub dates: DateFilters,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl Endpoint for ListSalesOrders {
    type Output = ListResponse<SalesOrder>;

    fn path(&self) -> String {
        "/sales_orders".to_string()
    }

    fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_all("ids", &self.ids)
            .push_opt("order_no", self.order_no.as_deref())
            .push_opt("source", self.source.as_deref())
            .push_opt("location_id", self.location_id)
            .push_opt("customer_id", self.customer_id)
            .push_opt("status", self.status.as_ref())
            .push_opt("currency", self.currency.as_deref())
            .push_opt("include_deleted", self.include_deleted);
        self.dates.apply(&mut query);
        push_paging(&mut query, self.limit, self.page);
        query
    }
}

impl_paginated!(ListSalesOrders);

/// GET /sales_orders/{id}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetSalesOrder {
    pub id: i64,
}

impl Endpoint for GetSalesOrder {
    type Output = SalesOrder;

    fn path(&self) -> String {
        format!("/sales_orders/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_uses_wire_value() {
        let params = ListSalesOrders {
            status: Some(SalesOrderStatus::NotShipped),
            customer_id: Some(3),
            ..Default::default()
        };
        let query = params.query();
        assert_eq!(query.get("status"), Some("NOT_SHIPPED"));
        assert_eq!(query.get("customer_id"), Some("3"));
    }
}
