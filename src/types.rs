//! Core types for schema case conversion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Direction of the case conversion.
///
/// Determines whether object field names are converted to wire naming
/// (snake_case) or local naming (camelCase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    ToWire,
    ToLocal,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reversed(&self) -> Self {
        match self {
            Direction::ToWire => Direction::ToLocal,
            Direction::ToLocal => Direction::ToWire,
        }
    }

    /// Create a direction from a wire flag (true = ToWire, false = ToLocal).
    pub fn from_wire_flag(to_wire: bool) -> Self {
        if to_wire {
            Direction::ToWire
        } else {
            Direction::ToLocal
        }
    }
}

/// Structural kind of a schema node.
///
/// Returned by [`crate::SchemaNode::kind`]. Classification inspects only the
/// node's own tag, never its children. Anything the transformer cannot
/// recurse into classifies as [`NodeKind::Unknown`] and passes through
/// conversion unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Primitive,
    Object,
    Array,
    Optional,
    Nullable,
    Union,
    Intersection,
    Branded,
    Unknown,
}

/// Leaf value types. Terminal; no child schema nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    String,
    Number,
    Boolean,
    /// ISO 8601 date-time string on the wire.
    Date,
    /// Validates as an integer on the wire.
    BigInt,
    /// Closed set of string values.
    Enum(Vec<String>),
    /// No value; responses with an empty body.
    Void,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn direction_reversed() {
        assert_eq!(Direction::ToWire.reversed(), Direction::ToLocal);
        assert_eq!(Direction::ToLocal.reversed(), Direction::ToWire);
    }

    #[test]
    fn direction_from_wire_flag() {
        assert_eq!(Direction::from_wire_flag(true), Direction::ToWire);
        assert_eq!(Direction::from_wire_flag(false), Direction::ToLocal);
    }

    #[test]
    fn json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(1)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }

    #[test]
    fn primitive_serde_names() {
        assert_eq!(
            serde_json::to_value(Primitive::BigInt).unwrap(),
            json!("big_int")
        );
        assert_eq!(
            serde_json::to_value(Primitive::Enum(vec!["a".into()])).unwrap(),
            json!({ "enum": ["a"] })
        );
    }
}
