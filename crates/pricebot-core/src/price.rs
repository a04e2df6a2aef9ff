//! Price records as returned by the price API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::HttpError;

/// Decoded price API response.
///
/// Untyped pass-through: whatever fields the provider returns are kept and serialised back
/// unchanged. The accessors below only read the handful of fields we display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceRecord(pub Map<String, Value>);

impl PriceRecord {
    /// Decode a response body. Anything other than a JSON object is a decode error.
    pub fn from_slice(body: &[u8]) -> std::result::Result<Self, HttpError> {
        let v: Value =
            serde_json::from_slice(body).map_err(|e| HttpError::Decode(e.to_string()))?;
        match v {
            Value::Object(map) => Ok(Self(map)),
            other => Err(HttpError::Decode(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn title(&self) -> Option<String> {
        self.field("title")
    }

    pub fn symbol(&self) -> Option<String> {
        self.field("symbol")
    }

    pub fn sell(&self) -> Option<String> {
        self.field("sell")
    }

    pub fn last_update(&self) -> Option<String> {
        self.field("last_update")
    }

    /// Display form of a scalar field. Strings as-is, numbers/bools stringified.
    pub fn field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
