// src/types.rs
// =============================================================================
// Small building blocks used by every model and endpoint.
//
// Field<T>
//   The API distinguishes "key omitted" from "key present but null". Option<T>
//   can only say one of those, so optional model fields use Field<T>:
//     - Unset      -> key was not in the JSON (and is not written back)
//     - Null       -> key was present with value null
//     - Value(T)   -> key was present with a value
//   Struct fields using it need `#[serde(default, skip_serializing_if =
//   "Field::is_unset")]` so a missing key maps to Unset and Unset is skipped.
//
// QueryParams
//   Ordered query-string builder that silently drops values the caller did
//   not set, and explodes arrays into repeated keys (ids=1&ids=2).
// =============================================================================

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Unset,
    Null,
    Value(T),
}

// Implemented by hand so that T doesn't need to be Default
impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// Borrow the value, treating both Unset and Null as None
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    /// None becomes Null, not Unset
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Null,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(v) => v.serialize(serializer),
            // Unset should have been skipped by skip_serializing_if; if it
            // wasn't (e.g. inside a Vec) null is the closest honest answer.
            Field::Null | Field::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only called when the key is present, so None here means "null"
        Ok(Field::from_option(Option::<T>::deserialize(deserializer)?))
    }
}

/// Numeric amount that the API sends either as a JSON number or as a decimal
/// string ("12.50000"). Remembers which form it was read in and writes that
/// form back, so a model decoded from a response re-encodes unchanged.
/// Comparisons look at the numeric value only.
#[derive(Debug, Clone, Default)]
pub struct Quantity {
    value: f64,
    wire: Option<Wire>,
}

#[derive(Debug, Clone)]
enum Wire {
    Number(serde_json::Number),
    Text(String),
}

impl Quantity {
    /// A quantity built in code; serialised as a plain JSON number
    pub fn new(value: f64) -> Self {
        Self { value, wire: None }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The decimal string as received, if the API sent one
    pub fn as_text(&self) -> Option<&str> {
        match &self.wire {
            Some(Wire::Text(s)) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::new(value)
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.wire {
            Some(Wire::Text(s)) => serializer.serialize_str(s),
            Some(Wire::Number(n)) => n.serialize(serializer),
            None => serializer.serialize_f64(self.value),
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => {
                let value = n
                    .as_f64()
                    .ok_or_else(|| serde::de::Error::custom(format!("not a decimal: {n}")))?;
                Ok(Quantity {
                    value,
                    wire: Some(Wire::Number(n)),
                })
            }
            Raw::Text(s) => {
                let value = s
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| serde::de::Error::custom(format!("not a decimal: {s:?}")))?;
                Ok(Quantity {
                    value,
                    wire: Some(Wire::Text(s)),
                })
            }
        }
    }
}

/// Query-string pairs in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds the pair only when a value was given
    pub fn push_opt<T: ToString>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    /// One `key=value` pair per element; an empty slice adds nothing
    pub fn push_all<T: ToString>(&mut self, key: &str, values: &[T]) -> &mut Self {
        for v in values {
            self.push(key, v.to_string());
        }
        self
    }

    pub fn push_datetime(&mut self, key: &str, value: Option<DateTime<Utc>>) -> &mut Self {
        self.push_opt(
            key,
            value.map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
