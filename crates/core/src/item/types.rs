use serde::Serialize;
use serde_json::{Map, Value};

use super::error::ItemError;

/// A single stored item: an arbitrary JSON object carrying a non-empty
/// string `id` field.
///
/// No field other than `id` is validated or interpreted. Construction
/// goes through [`Item::from_slice`] or [`Item::from_fields`] so every
/// `Item` in the system is known to carry a usable identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Item {
    fields: Map<String, Value>,
}

impl Item {
    /// Parses an item from raw request bytes.
    pub fn from_slice(raw: &[u8]) -> Result<Self, ItemError> {
        let value: Value =
            serde_json::from_slice(raw).map_err(|e| ItemError::InvalidPayload(e.to_string()))?;
        match value {
            Value::Object(fields) => Self::from_fields(fields),
            other => Err(ItemError::InvalidPayload(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Builds an item from an already-decoded field map.
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, ItemError> {
        match fields.get("id") {
            Some(Value::String(id)) if !id.is_empty() => Ok(Self { fields }),
            _ => Err(ItemError::MissingId),
        }
    }

    /// The unique identifier of this item.
    pub fn id(&self) -> &str {
        match self.fields.get("id") {
            Some(Value::String(id)) => id,
            // Constructors guarantee a non-empty string id.
            _ => "",
        }
    }

    /// All fields of the item, including `id`.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Looks up a single field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
