// src/models/mod.rs
// =============================================================================
// Typed mirrors of the JSON schemas the Katana API sends and accepts.
//
// Every model is a plain struct with serde derives doing the key mapping:
//   - required keys are plain fields, so a missing key fails to deserialize
//   - optional/nullable keys are Field<T> (see crate::types)
//   - timestamps are chrono::DateTime<Utc>
//   - unknown keys land in `additional_properties` and are written back out
// =============================================================================

// Status-style enums: known values get a variant, anything the API adds later
// is kept verbatim in Other(String) instead of failing the whole response.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            /// Never fails: unknown values become Other
            pub fn from_wire(s: &str) -> Self {
                match s {
                    $($text => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Other(s) => s.as_str(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from_wire(s))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from_wire(&raw))
            }
        }
    };
}

mod common;
mod customer;
mod inventory;
mod location;
mod manufacturing_order;
mod product;
mod purchase_order;
mod sales_order;
mod supplier;

pub use common::{DetailedErrorResponse, ErrorResponse, ListResponse, ValidationDetail};
pub use customer::{CreateCustomerRequest, Customer, UpdateCustomerRequest};
pub use inventory::InventoryItem;
pub use location::Location;
pub use manufacturing_order::{
    CreateManufacturingOrderRequest, ManufacturingOrder, ManufacturingOrderStatus,
};
pub use product::{Material, Product, Variant, VariantType};
pub use purchase_order::{
    CreatePurchaseOrderRequest, CreatePurchaseOrderRow, PurchaseOrder, PurchaseOrderEntityType,
    PurchaseOrderRow, PurchaseOrderStatus,
};
pub use sales_order::{SalesOrder, SalesOrderRow, SalesOrderStatus};
pub use supplier::Supplier;
