//! Update expression construction for partial updates.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use super::conversions::number_value;
use crate::store::KittenUpdate;

/// A `SET` update expression with its placeholder maps
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

impl UpdateExpression {
    /// Build `SET #a = :a, #b = :b` for every attribute the update assigns.
    ///
    /// Attribute names always go through `#` placeholders because `name` is
    /// a DynamoDB reserved word.
    pub fn from_update(update: &KittenUpdate) -> Self {
        let mut clauses = Vec::new();
        let mut names = HashMap::new();
        let mut values = HashMap::new();

        for (attribute, value) in update.assignments() {
            let name_placeholder = format!("#{}", attribute);
            let value_placeholder = format!(":{}", attribute);

            clauses.push(format!("{} = {}", name_placeholder, value_placeholder));
            names.insert(name_placeholder, attribute.to_string());
            values.insert(value_placeholder, number_value(value));
        }

        Self {
            expression: format!("SET {}", clauses.join(", ")),
            names,
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    #[test]
    fn test_age_update_expression() {
        let expr = UpdateExpression::from_update(&KittenUpdate::age(Number::from(4)));

        assert_eq!(expr.expression, "SET #age = :age");
        assert_eq!(expr.names.get("#age").map(String::as_str), Some("age"));
        assert_eq!(expr.values.get(":age"), Some(&AttributeValue::N("4".to_string())));
        assert!(!expr.names.values().any(|n| n == "name"));
    }
}
