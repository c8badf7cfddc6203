//! Identifier case conversion between wire and local naming.

use heck::{ToLowerCamelCase, ToSnakeCase};

use crate::types::Direction;

/// Convert a field name to wire naming (snake_case).
///
/// Idempotent: converting an already-snake_case token is a no-op.
pub fn to_snake(name: &str) -> String {
    name.to_snake_case()
}

/// Convert a field name to local naming (camelCase).
///
/// Idempotent: converting an already-camelCase token is a no-op.
pub fn to_camel(name: &str) -> String {
    name.to_lower_camel_case()
}

/// Convert a field name for the given direction.
pub fn convert(name: &str, direction: Direction) -> String {
    match direction {
        Direction::ToWire => to_snake(name),
        Direction::ToLocal => to_camel(name),
    }
}
