//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! item records. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

use itemvault_core::item::Item;
use itemvault_core::storage::StoreError;

/// Convert an item to a DynamoDB attribute map.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    item.fields()
        .iter()
        .map(|(name, value)| (name.clone(), value_to_attribute(value)))
        .collect()
}

/// Convert a DynamoDB attribute map back to an item.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, StoreError> {
    let mut fields = Map::new();
    for (name, attribute) in attributes {
        fields.insert(name.clone(), attribute_to_value(attribute)?);
    }
    Item::from_fields(fields).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn value_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(flag) => AttributeValue::Bool(*flag),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::String(text) => AttributeValue::S(text.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(value_to_attribute).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(name, value)| (name.clone(), value_to_attribute(value)))
                .collect(),
        ),
    }
}

fn attribute_to_value(attribute: &AttributeValue) -> Result<Value, StoreError> {
    match attribute {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(flag) => Ok(Value::Bool(*flag)),
        AttributeValue::N(number) => {
            let parsed: Number = serde_json::from_str(number).map_err(|_| {
                StoreError::Serialization(format!("invalid numeric attribute: {number}"))
            })?;
            Ok(Value::Number(parsed))
        }
        AttributeValue::S(text) => Ok(Value::String(text.clone())),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(fields) => {
            let mut object = Map::new();
            for (name, attribute) in fields {
                object.insert(name.clone(), attribute_to_value(attribute)?);
            }
            Ok(Value::Object(object))
        }
        other => Err(StoreError::Serialization(format!(
            "unsupported attribute type: {other:?}"
        ))),
    }
}
