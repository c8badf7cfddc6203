//! JSON Schema document emission.
//!
//! A [`SchemaNode`] validates payloads by compiling to a standard JSON
//! Schema document. The mapping keeps the passthrough contract: an open
//! object leaves `additionalProperties` unset, a closed one pins it to
//! `false`.

use serde_json::{json, Map, Value};

use crate::schema::SchemaNode;
use crate::types::Primitive;

/// Emit a JSON Schema document for a schema node.
///
/// Mapping notes:
/// - optional fields are expressed through the parent object's `required`
///   list; a standalone `Optional` emits its inner schema
/// - `Nullable` and `Union` emit `anyOf`, `Intersection` emits `allOf`
/// - brands are validation-transparent and emit their inner schema
/// - `Opaque` fragments are embedded verbatim
pub fn to_json_schema(node: &SchemaNode) -> Value {
    match node {
        SchemaNode::Primitive(primitive) => primitive_schema(primitive),
        SchemaNode::Object {
            fields,
            passthrough,
        } => {
            let mut properties = Map::new();
            let mut required = Vec::new();
            for (name, field) in fields {
                properties.insert(name.clone(), to_json_schema(field));
                if !absence_allowed(field) {
                    required.push(Value::String(name.clone()));
                }
            }

            let mut schema = Map::new();
            schema.insert("type".to_string(), json!("object"));
            schema.insert("properties".to_string(), Value::Object(properties));
            if !required.is_empty() {
                schema.insert("required".to_string(), Value::Array(required));
            }
            if !passthrough {
                schema.insert("additionalProperties".to_string(), Value::Bool(false));
            }
            Value::Object(schema)
        }
        SchemaNode::Array(element) => json!({
            "type": "array",
            "items": to_json_schema(element),
        }),
        SchemaNode::Optional(inner) => to_json_schema(inner),
        SchemaNode::Nullable(inner) => json!({
            "anyOf": [to_json_schema(inner), { "type": "null" }],
        }),
        SchemaNode::Union(options) => {
            let variants: Vec<Value> = options.iter().map(to_json_schema).collect();
            json!({ "anyOf": variants })
        }
        SchemaNode::Intersection(left, right) => json!({
            "allOf": [to_json_schema(left), to_json_schema(right)],
        }),
        SchemaNode::Branded { inner, .. } => to_json_schema(inner),
        SchemaNode::Opaque(fragment) => fragment.clone(),
    }
}

fn primitive_schema(primitive: &Primitive) -> Value {
    match primitive {
        Primitive::String => json!({ "type": "string" }),
        Primitive::Number => json!({ "type": "number" }),
        Primitive::Boolean => json!({ "type": "boolean" }),
        Primitive::Date => json!({ "type": "string", "format": "date-time" }),
        Primitive::BigInt => json!({ "type": "integer" }),
        Primitive::Enum(values) => json!({ "type": "string", "enum": values }),
        Primitive::Void => json!({ "type": "null" }),
    }
}

/// True iff a field with this schema may be absent from its object.
///
/// Brands are peeled first so a marked optional field still lands outside
/// the `required` list.
fn absence_allowed(node: &SchemaNode) -> bool {
    match node {
        SchemaNode::Optional(_) => true,
        SchemaNode::Branded { inner, .. } => absence_allowed(inner),
        _ => false,
    }
}
