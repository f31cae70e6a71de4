// src/api/mod.rs
// =============================================================================
// One parameter struct per Katana operation, grouped by resource.
//
// Each struct implements client::Endpoint, so it can be passed to any of the
// client's call styles:
//
//   let orders = client.fetch(&ListSalesOrders { status: Some(...), ..Default::default() }).await?;
//
// Filters left as None (or empty Vec) are dropped from the query string.
// =============================================================================

mod customers;
mod inventory;
mod locations;
mod manufacturing_orders;
mod materials;
mod products;
mod purchase_orders;
mod sales_orders;
mod suppliers;
mod variants;

pub use customers::{CreateCustomer, DeleteCustomer, GetCustomer, ListCustomers, UpdateCustomer};
pub use inventory::ListInventory;
pub use locations::ListLocations;
pub use manufacturing_orders::{CreateManufacturingOrder, ListManufacturingOrders};
pub use materials::ListMaterials;
pub use products::{GetProduct, ListProducts};
pub use purchase_orders::{CreatePurchaseOrder, GetPurchaseOrder, ListPurchaseOrders};
pub use sales_orders::{GetSalesOrder, ListSalesOrders};
pub use suppliers::ListSuppliers;
pub use variants::{GetVariant, ListVariants};

use chrono::{DateTime, Utc};

use crate::types::QueryParams;

/// created/updated time window accepted by every list endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateFilters {
    pub created_at_min: Option<DateTime<Utc>>,
    pub created_at_max: Option<DateTime<Utc>>,
    pub updated_at_min: Option<DateTime<Utc>>,
    pub updated_at_max: Option<DateTime<Utc>>,
}

impl DateFilters {
    pub(crate) fn apply(&self, query: &mut QueryParams) {
        query
            .push_datetime("created_at_min", self.created_at_min)
            .push_datetime("created_at_max", self.created_at_max)
            .push_datetime("updated_at_min", self.updated_at_min)
            .push_datetime("updated_at_max", self.updated_at_max);
    }
}

// page/limit go last so every list endpoint orders them the same way
pub(crate) fn push_paging(query: &mut QueryParams, limit: Option<u32>, page: Option<u32>) {
    query.push_opt("limit", limit).push_opt("page", page);
}
