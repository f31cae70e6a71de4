// src/models/customer.rs
// =============================================================================
// Customer records and the bodies used to create/update them.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Field, Quantity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub company: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub comment: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub reference_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub category: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub discount_rate: Field<Quantity>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub default_billing_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub default_shipping_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub deleted_at: Field<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

/// Body for POST /customers. Only `name` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub company: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub comment: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub reference_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub category: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub discount_rate: Field<Quantity>,
}

/// Body for PATCH /customers/{id}.
///
/// Unset fields are left alone by the server; `Field::Null` clears them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub company: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub comment: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub category: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub discount_rate: Field<Quantity>,
}
