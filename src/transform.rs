//! Recursive case conversion over schema trees and payload values.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::casing;
use crate::schema::SchemaNode;
use crate::types::Direction;

/// Convert a schema description between wire and local field naming.
///
/// Depth-first and kind-preserving: an array stays an array, a union keeps
/// its options in order, a brand keeps its tag. Only object field *names*
/// change. Opaque fragments pass through unchanged.
///
/// Field names that collide after conversion (two distinct names mapping to
/// the same converted name) are not detected here; the last field wins.
/// [`crate::linter`] reports collisions ahead of time.
pub fn convert_schema(node: &SchemaNode, direction: Direction) -> SchemaNode {
    match node {
        SchemaNode::Primitive(_) | SchemaNode::Opaque(_) => node.clone(),
        SchemaNode::Object {
            fields,
            passthrough,
        } => {
            let mut converted = IndexMap::with_capacity(fields.len());
            for (name, child) in fields {
                converted.insert(
                    casing::convert(name, direction),
                    convert_schema(child, direction),
                );
            }
            SchemaNode::Object {
                fields: converted,
                passthrough: *passthrough,
            }
        }
        SchemaNode::Array(element) => {
            SchemaNode::Array(Box::new(convert_schema(element, direction)))
        }
        SchemaNode::Optional(inner) => {
            SchemaNode::Optional(Box::new(convert_schema(inner, direction)))
        }
        SchemaNode::Nullable(inner) => {
            SchemaNode::Nullable(Box::new(convert_schema(inner, direction)))
        }
        SchemaNode::Union(options) => SchemaNode::Union(
            options
                .iter()
                .map(|option| convert_schema(option, direction))
                .collect(),
        ),
        SchemaNode::Intersection(left, right) => SchemaNode::Intersection(
            Box::new(convert_schema(left, direction)),
            Box::new(convert_schema(right, direction)),
        ),
        SchemaNode::Branded { inner, tag } => SchemaNode::Branded {
            inner: Box::new(convert_schema(inner, direction)),
            tag: tag.clone(),
        },
    }
}

/// Convert the keys of a payload value between wire and local naming.
///
/// The data-plane sibling of [`convert_schema`]: object keys are renamed at
/// every depth, arrays are mapped element-wise, scalars pass through. Keys
/// the schema never declared are converted too, so passthrough fields stay
/// reachable under a consistent naming convention.
pub fn convert_value(value: &Value, direction: Direction) -> Value {
    match value {
        Value::Object(map) => {
            let mut converted = Map::new();
            for (key, child) in map {
                converted.insert(
                    casing::convert(key, direction),
                    convert_value(child, direction),
                );
            }
            Value::Object(converted)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| convert_value(item, direction))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeKind;
    use serde_json::json;

    fn person() -> SchemaNode {
        SchemaNode::object([
            ("firstName", SchemaNode::string()),
            (
                "homeAddress",
                SchemaNode::object([("zipCode", SchemaNode::string())]),
            ),
            (
                "phoneNumbers",
                SchemaNode::array(SchemaNode::object([(
                    "countryCode",
                    SchemaNode::string(),
                )])),
            ),
        ])
    }

    fn field_names(node: &SchemaNode) -> Vec<&str> {
        match node {
            SchemaNode::Object { fields, .. } => fields.keys().map(String::as_str).collect(),
            other => panic!("expected object, got {:?}", other.kind()),
        }
    }

    #[test]
    fn object_fields_become_snake_case() {
        let wire = convert_schema(&person(), Direction::ToWire);
        assert_eq!(
            field_names(&wire),
            ["first_name", "home_address", "phone_numbers"]
        );
    }

    #[test]
    fn nested_objects_convert_recursively() {
        let wire = convert_schema(&person(), Direction::ToWire);
        let SchemaNode::Object { fields, .. } = &wire else {
            unreachable!()
        };
        assert_eq!(field_names(&fields["home_address"]), ["zip_code"]);
        let SchemaNode::Array(element) = &fields["phone_numbers"] else {
            panic!("expected array");
        };
        assert_eq!(field_names(element), ["country_code"]);
    }

    #[test]
    fn round_trip_restores_injective_schema() {
        let original = person();
        let back = convert_schema(
            &convert_schema(&original, Direction::ToWire),
            Direction::ToLocal,
        );
        assert_eq!(back, original);
    }

    #[test]
    fn every_kind_is_preserved() {
        let nodes = [
            SchemaNode::string(),
            SchemaNode::object([("a", SchemaNode::string())]),
            SchemaNode::array(SchemaNode::number()),
            SchemaNode::optional(SchemaNode::string()),
            SchemaNode::nullable(SchemaNode::string()),
            SchemaNode::union([SchemaNode::string(), SchemaNode::number()]),
            SchemaNode::intersection(
                SchemaNode::object([("a", SchemaNode::string())]),
                SchemaNode::object([("b", SchemaNode::string())]),
            ),
            SchemaNode::branded(SchemaNode::string(), "Tag"),
            SchemaNode::opaque(json!({ "type": "string" })),
        ];
        for node in &nodes {
            for direction in [Direction::ToWire, Direction::ToLocal] {
                assert_eq!(convert_schema(node, direction).kind(), node.kind());
            }
        }
    }

    #[test]
    fn union_arity_and_order_preserved() {
        let union = SchemaNode::union([
            SchemaNode::object([("aField", SchemaNode::string())]),
            SchemaNode::string(),
            SchemaNode::number(),
        ]);
        let wire = convert_schema(&union, Direction::ToWire);
        let SchemaNode::Union(options) = &wire else {
            panic!("expected union");
        };
        assert_eq!(options.len(), 3);
        assert_eq!(field_names(&options[0]), ["a_field"]);
        assert_eq!(options[1], SchemaNode::string());
    }

    #[test]
    fn brand_tag_survives_conversion() {
        let branded = SchemaNode::branded(
            SchemaNode::object([("createdAt", SchemaNode::date())]),
            "ReadonlyField",
        );
        let wire = convert_schema(&branded, Direction::ToWire);
        let SchemaNode::Branded { inner, tag } = &wire else {
            panic!("expected brand");
        };
        assert_eq!(tag, "ReadonlyField");
        assert_eq!(field_names(inner), ["created_at"]);
    }

    #[test]
    fn opaque_passes_through_untouched() {
        let fragment = json!({ "type": "object", "properties": { "keepMe": {} } });
        let node = SchemaNode::opaque(fragment.clone());
        assert_eq!(
            convert_schema(&node, Direction::ToWire),
            SchemaNode::Opaque(fragment)
        );
    }

    #[test]
    fn collision_last_write_wins() {
        let node = SchemaNode::object([
            ("userId", SchemaNode::string()),
            ("user_id", SchemaNode::number()),
        ]);
        let wire = convert_schema(&node, Direction::ToWire);
        let SchemaNode::Object { fields, .. } = &wire else {
            unreachable!()
        };
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["user_id"], SchemaNode::number());
    }

    #[test]
    fn value_keys_convert_at_every_depth() {
        let wire = json!({
            "first_name": "Ada",
            "home_address": { "zip_code": "10117" },
            "phone_numbers": [{ "country_code": "+49" }]
        });
        let local = convert_value(&wire, Direction::ToLocal);
        assert_eq!(
            local,
            json!({
                "firstName": "Ada",
                "homeAddress": { "zipCode": "10117" },
                "phoneNumbers": [{ "countryCode": "+49" }]
            })
        );
    }

    #[test]
    fn value_scalars_unchanged() {
        for scalar in [json!(null), json!(true), json!(3), json!("text")] {
            assert_eq!(convert_value(&scalar, Direction::ToWire), scalar);
        }
    }

    #[test]
    fn undeclared_value_keys_convert_too() {
        let wire = json!({ "extra_field": 3 });
        assert_eq!(
            convert_value(&wire, Direction::ToLocal),
            json!({ "extraField": 3 })
        );
    }
}
