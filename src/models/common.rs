// src/models/common.rs
// =============================================================================
// Shapes shared by every endpoint: list envelopes and error payloads.
//
// Katana wraps every collection in {"data": [...]} and sends one of two error
// bodies:
//   - ErrorResponse          for 401, 429 and 500
//   - DetailedErrorResponse  for 422 (adds per-field validation details)
// =============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::Field;

/// `{"data": [...]}` envelope returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub code: Field<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

/// One failed validation rule inside a 422 body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationDetail {
    pub path: String,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub info: Field<Value>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedErrorResponse {
    pub status_code: u16,
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub details: Field<Vec<ValidationDetail>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl DetailedErrorResponse {
    pub fn details(&self) -> &[ValidationDetail] {
        self.details.as_option().map_or(&[], Vec::as_slice)
    }

    /// "message (path: detail; path: detail)" for logs and tool output
    pub fn summary(&self) -> String {
        if self.details().is_empty() {
            return self.message.clone();
        }
        let details: Vec<String> = self
            .details()
            .iter()
            .map(|d| format!("{}: {}", d.path, d.message))
            .collect();
        format!("{} ({})", self.message, details.join("; "))
    }
}
