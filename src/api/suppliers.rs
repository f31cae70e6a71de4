// src/api/suppliers.rs

use super::{push_paging, DateFilters};
use crate::client::{impl_paginated, Endpoint};
use crate::models::{ListResponse, Supplier};
use crate::types::QueryParams;

/// GET /suppliers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSuppliers {
    pub ids: Vec<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub include_deleted: Option<bool>,
    pub dates: DateFilters,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl Endpoint for ListSuppliers {
    type Output = ListResponse<Supplier>;

    fn path(&self) -> String {
        "/suppliers".to_string()
    }

    fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_all("ids", &self.ids)
            .push_opt("name", self.name.as_deref())
            .push_opt("email", self.email.as_deref())
            .push_opt("phone", self.phone.as_deref())
            .push_opt("include_deleted", self.include_deleted);
        self.dates.apply(&mut query);
        push_paging(&mut query, self.limit, self.page);
        query
    }
}

impl_paginated!(ListSuppliers);
