// src/api/materials.rs

use super::{push_paging, DateFilters};
use crate::client::{impl_paginated, Endpoint};
use crate::models::{ListResponse, Material};
use crate::types::QueryParams;

/// GET /materials
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListMaterials {
    pub ids: Vec<i64>,
    pub name: Option<String>,
    pub uom: Option<String>,
    pub default_supplier_id: Option<i64>,
    pub include_archived: Option<bool>,
    pub include_deleted: Option<bool>,
    pub dates: DateFilters,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl Endpoint for ListMaterials {
    type Output = ListResponse<Material>;

    fn path(&self) -> String {
        "/materials".to_string()
    }

    fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_all("ids", &self.ids)
            .push_opt("name", self.name.as_deref())
            .push_opt("uom", self.uom.as_deref())
            .push_opt("default_supplier_id", self.default_supplier_id)
            .push_opt("include_archived", self.include_archived)
            .push_opt("include_deleted", self.include_deleted);
        self.dates.apply(&mut query);
        push_paging(&mut query, self.limit, self.page);
        query
    }
}

impl_paginated!(ListMaterials);
