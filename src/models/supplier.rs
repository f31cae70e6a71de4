// src/models/supplier.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::Field;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub currency: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub comment: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub deleted_at: Field<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_supplier_round_trip() {
        let raw = json!({
            "id": 4,
            "name": "Mandalorian Forge",
            "email": "forge@example.com",
            "phone": null,
            "currency": "EUR",
            "created_at": "2023-02-03T04:05:06.789Z",
            "addresses": []
        });
        let supplier: Supplier = serde_json::from_value(raw.clone()).unwrap();
        assert!(supplier.phone.is_null());
        assert!(supplier.comment.is_unset());
        assert_eq!(serde_json::to_value(&supplier).unwrap(), raw);
    }
}
