//! Filter query encoding.
//!
//! Converts a caller-authored partial filter object into a flat
//! query-string-ready mapping. Filters are outbound data, so unlike the
//! response path this is fail-closed: a present field that does not conform
//! to its declared type is an error.

use indexmap::IndexMap;
use serde_json::Value;

use crate::casing;
use crate::error::{SchemaError, ValidateError};
use crate::schema::SchemaNode;
use crate::types::json_type_name;
use crate::validator::validate;

/// Per-value encoder override. Applied to every present value; its output is
/// used verbatim, including values the default encoding would drop.
pub type ValueEncoder<'a> = &'a dyn Fn(&Value) -> String;

/// Encode a partial filter object into a query mapping.
///
/// Returns `Ok(None)` when `shape` is absent or `values` is absent, empty,
/// or not an object. Otherwise every present field is checked against a
/// partial version of `shape` (all fields optional), keys are converted to
/// wire naming, and values are encoded:
///
/// - with `encode_value` supplied, its result is used verbatim
/// - booleans and numbers are stringified (`false` encodes as `"false"`)
/// - arrays are joined with `,`; an empty join is dropped
/// - null and empty-string values are dropped
/// - strings pass through; other composites encode as compact JSON
///
/// Output order follows shape declaration order, so the same
/// `(shape, values)` pair always yields the same mapping.
///
/// # Errors
///
/// `ValidateError::Invalid` if a present field does not conform to its
/// declared type; `ValidateError::Schema` if `shape` is not an object node.
pub fn encode_filters(
    shape: Option<&SchemaNode>,
    values: Option<&Value>,
    encode_value: Option<ValueEncoder<'_>>,
) -> Result<Option<IndexMap<String, String>>, ValidateError> {
    let (Some(shape), Some(values)) = (shape, values) else {
        return Ok(None);
    };

    let SchemaNode::Object { fields, .. } = shape else {
        return Err(ValidateError::Schema {
            message: format!("filter shape must be an object node, got {:?}", shape.kind()),
        });
    };

    let entries = match values {
        Value::Object(map) => map,
        Value::Null => return Ok(None),
        other => {
            return Err(ValidateError::Invalid {
                errors: vec![SchemaError {
                    path: String::new(),
                    message: format!("filters must be an object, got {}", json_type_name(other)),
                }],
            })
        }
    };
    if entries.is_empty() {
        return Ok(None);
    }

    validate(values, &partial_shape(shape))?;

    let mut encoded = IndexMap::new();
    for name in fields.keys() {
        let Some(value) = entries.get(name) else {
            continue;
        };
        let key = casing::to_snake(name);

        if let Some(encode) = encode_value {
            encoded.insert(key, encode(value));
            continue;
        }

        if let Some(text) = default_encode(value) {
            encoded.insert(key, text);
        }
    }

    Ok(Some(encoded))
}

/// Derive the all-fields-optional version of a filter shape.
fn partial_shape(shape: &SchemaNode) -> SchemaNode {
    let SchemaNode::Object {
        fields,
        passthrough,
    } = shape
    else {
        return shape.clone();
    };

    let mut optional = IndexMap::new();
    for (name, field) in fields {
        let field = match field {
            SchemaNode::Optional(_) => field.clone(),
            other => SchemaNode::optional(other.clone()),
        };
        optional.insert(name.clone(), field);
    }
    SchemaNode::Object {
        fields: optional,
        passthrough: *passthrough,
    }
}

fn default_encode(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let joined = items
                .iter()
                .map(scalar_text)
                .collect::<Vec<_>>()
                .join(",");
            if joined.is_empty() {
                None
            } else {
                Some(joined)
            }
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
