//! JSON conversion for parse results
//!
//! Converts parsed [`Enumeration`]s to [`serde_json::Value`] for
//! machine-readable output. Initializer chains are emitted as their
//! printed source form rather than as nested structures; consumers
//! wanting the tree can re-parse or walk the AST directly.

use crate::parser::ast::{Enumeration, Member};
use serde_json::{json, Value};

/// Convert a list of enumerations to a JSON array.
pub fn enumerations_to_json(enumerations: &[Enumeration]) -> Value {
    Value::Array(enumerations.iter().map(enumeration_to_json).collect())
}

/// Convert one enumeration to a JSON object.
pub fn enumeration_to_json(enumeration: &Enumeration) -> Value {
    json!({
        "name": enumeration.name,
        "is_scoped": enumeration.is_scoped,
        "base_types": enumeration
            .base_types
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>(),
        "members": enumeration
            .members
            .iter()
            .map(member_to_json)
            .collect::<Vec<_>>(),
    })
}

fn member_to_json(member: &Member) -> Value {
    if member.value.is_empty() {
        json!({ "name": member.name, "value": Value::Null })
    } else {
        json!({ "name": member.name, "value": member.value.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::parse_enumerations;

    #[test]
    fn test_json_shape() {
        let enums =
            parse_enumerations("enum class Color : int { Red = 1, Green };").unwrap();
        let value = enumerations_to_json(&enums);

        assert_eq!(value[0]["name"], "Color");
        assert_eq!(value[0]["is_scoped"], true);
        assert_eq!(value[0]["base_types"][0], "int");
        assert_eq!(value[0]["members"][0]["name"], "Red");
        assert_eq!(value[0]["members"][0]["value"], "1");
        assert_eq!(value[0]["members"][1]["value"], Value::Null);
    }
}
