// src/models/location.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::Field;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub legal_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_primary: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sales_allowed: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub purchase_allowed: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub manufacturing_allowed: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub updated_at: Field<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_round_trip() {
        let raw = json!({
            "id": 1,
            "name": "Main warehouse",
            "legal_name": null,
            "is_primary": true,
            "sales_allowed": true,
            "manufacturing_allowed": false,
            "updated_at": "2023-02-03T04:05:06.789Z",
            "address": { "city": "Mos Eisley" }
        });
        let location: Location = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(location.is_primary, Field::Value(true));
        assert_eq!(serde_json::to_value(&location).unwrap(), raw);
    }
}
