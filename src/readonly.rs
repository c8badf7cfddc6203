//! Readonly field marking and write-payload derivation.
//!
//! Server-generated fields (ids, timestamps) are declared once on the entity
//! schema with [`mark_readonly`] and dropped from create/update payload
//! shapes with [`strip_readonly_fields`]. An id is the one field typically
//! force-kept, so an update can target a record while still omitting other
//! server-populated fields.

use indexmap::IndexMap;

use crate::schema::SchemaNode;

/// Brand tag that marks a field as server-populated.
pub const READONLY_TAG: &str = "ReadonlyField";

/// Mark a schema node as readonly.
pub fn mark_readonly(node: SchemaNode) -> SchemaNode {
    SchemaNode::branded(node, READONLY_TAG)
}

/// True iff the node is a brand carrying exactly the readonly tag.
///
/// A readonly brand wrapped in another node (optional, nullable, a second
/// brand) does not count; the marker must sit at the top of the field.
pub fn is_readonly(node: &SchemaNode) -> bool {
    matches!(node, SchemaNode::Branded { tag, .. } if tag == READONLY_TAG)
}

/// Derive a writable payload shape by dropping readonly fields.
///
/// Inspects the top-level fields of an object node (or of a top-level
/// array's element object): readonly fields are dropped unless their name is
/// in `keep_names`, in which case the marker is unwrapped and the field
/// becomes writable. Nested objects are left alone; stripping is shallow by
/// design, matching how create/update payload shapes are derived.
///
/// Nodes that are neither objects nor arrays are returned unchanged.
pub fn strip_readonly_fields(node: &SchemaNode, keep_names: &[&str]) -> SchemaNode {
    match node {
        SchemaNode::Object {
            fields,
            passthrough,
        } => {
            let mut kept = IndexMap::new();
            for (name, field) in fields {
                if is_readonly(field) {
                    if keep_names.contains(&name.as_str()) {
                        let SchemaNode::Branded { inner, .. } = field else {
                            unreachable!("is_readonly only matches brands");
                        };
                        kept.insert(name.clone(), (**inner).clone());
                    }
                    // not kept: dropped from the writable shape
                } else {
                    kept.insert(name.clone(), field.clone());
                }
            }
            SchemaNode::Object {
                fields: kept,
                passthrough: *passthrough,
            }
        }
        SchemaNode::Array(element) => {
            SchemaNode::Array(Box::new(strip_readonly_fields(element, keep_names)))
        }
        other => other.clone(),
    }
}
