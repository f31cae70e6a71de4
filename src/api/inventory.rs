// src/api/inventory.rs

use super::push_paging;
use crate::client::{impl_paginated, Endpoint};
use crate::models::{InventoryItem, ListResponse};
use crate::types::QueryParams;

/// GET /inventory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListInventory {
    pub location_id: Option<i64>,
    pub variant_id: Vec<i64>,
    pub include_archived: Option<bool>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl Endpoint for ListInventory {
    type Output = ListResponse<InventoryItem>;

    fn path(&self) -> String {
        "/inventory".to_string()
    }

    fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("location_id", self.location_id)
            .push_all("variant_id", &self.variant_id)
            .push_opt("include_archived", self.include_archived);
        push_paging(&mut query, self.limit, self.page);
        query
    }
}

impl_paginated!(ListInventory);
