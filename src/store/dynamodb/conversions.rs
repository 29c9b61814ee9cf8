//! Conversions between kittens and DynamoDB attribute maps.

use std::collections::HashMap;
use std::str::FromStr;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Number;

use crate::models::Kitten;
use crate::store::StoreError;

pub const NAME_ATTRIBUTE: &str = "name";
pub const AGE_ATTRIBUTE: &str = "age";

pub type Item = HashMap<String, AttributeValue>;

pub fn name_key(name: &str) -> AttributeValue {
    AttributeValue::S(name.to_string())
}

pub fn number_value(number: &Number) -> AttributeValue {
    AttributeValue::N(number.to_string())
}

pub fn kitten_to_item(kitten: &Kitten) -> Item {
    let mut item = HashMap::new();
    item.insert(NAME_ATTRIBUTE.to_string(), name_key(&kitten.name));
    item.insert(AGE_ATTRIBUTE.to_string(), number_value(&kitten.age));
    item
}

/// Project a stored item onto a kitten; attributes other than `name` and
/// `age` are dropped.
pub fn item_to_kitten(item: &Item) -> Result<Kitten, StoreError> {
    let name = item
        .get(NAME_ATTRIBUTE)
        .and_then(|v| v.as_s().ok())
        .ok_or_else(|| missing_field(NAME_ATTRIBUTE))?;

    let age = item
        .get(AGE_ATTRIBUTE)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| missing_field(AGE_ATTRIBUTE))?;

    let age = Number::from_str(age).map_err(|e| {
        StoreError::InvalidItem(format!("Invalid number {}: {}", AGE_ATTRIBUTE, e))
    })?;

    Ok(Kitten {
        name: name.clone(),
        age,
    })
}

/// Interpret a GetItem result. A missing or empty item means nothing is
/// stored under the key.
pub fn optional_item_to_kitten(item: Option<Item>) -> Result<Option<Kitten>, StoreError> {
    match item {
        Some(item) if !item.is_empty() => Ok(Some(item_to_kitten(&item)?)),
        _ => Ok(None),
    }
}

/// Interpret a Scan result, keeping the order DynamoDB returned
pub fn items_to_kittens(items: Option<Vec<Item>>) -> Result<Vec<Kitten>, StoreError> {
    items.unwrap_or_default().iter().map(item_to_kitten).collect()
}

fn missing_field(attribute: &str) -> StoreError {
    StoreError::InvalidItem(format!("Missing or invalid field: {}", attribute))
}
