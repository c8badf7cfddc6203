//! The schema node tree.
//!
//! A [`SchemaNode`] is an immutable structural description of a value's
//! shape, authored in local (camelCase) field naming and convertible to wire
//! (snake_case) naming with [`crate::convert_schema`]. The same description
//! drives payload validation (see [`crate::emit::to_json_schema`]).
//!
//! Nodes serialize with serde's external tagging, so descriptions can live
//! in JSON files:
//!
//! ```json
//! {
//!     "object": {
//!         "fields": {
//!             "firstName": { "primitive": "string" },
//!             "tags": { "array": { "primitive": "string" } }
//!         },
//!         "passthrough": true
//!     }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{NodeKind, Primitive};

/// One node in a schema description.
///
/// Construction is the caller's declaration of a domain shape; conversion and
/// stripping derive new trees and never mutate the input. Builder
/// constructors panic on structurally invalid input (duplicate field names,
/// union arity below 2) since that is a programmer error, not runtime data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaNode {
    /// Leaf type; no children.
    Primitive(Primitive),
    /// Record type with ordered, unique field names. `passthrough` controls
    /// whether keys absent from `fields` are preserved on validation.
    Object {
        fields: IndexMap<String, SchemaNode>,
        #[serde(default = "passthrough_default")]
        passthrough: bool,
    },
    /// Homogeneous sequence.
    Array(Box<SchemaNode>),
    /// Value or absent.
    Optional(Box<SchemaNode>),
    /// Value or null.
    Nullable(Box<SchemaNode>),
    /// Ordered alternatives, arity >= 2.
    Union(Vec<SchemaNode>),
    /// Both sides must hold.
    Intersection(Box<SchemaNode>, Box<SchemaNode>),
    /// A marker carrying a string tag; validation-transparent.
    Branded { inner: Box<SchemaNode>, tag: String },
    /// A raw JSON Schema fragment the engine does not model. Classifies as
    /// [`NodeKind::Unknown`] and passes through conversion unchanged.
    Opaque(Value),
}

fn passthrough_default() -> bool {
    true
}

impl SchemaNode {
    /// String leaf.
    pub fn string() -> Self {
        SchemaNode::Primitive(Primitive::String)
    }

    /// Number leaf.
    pub fn number() -> Self {
        SchemaNode::Primitive(Primitive::Number)
    }

    /// Boolean leaf.
    pub fn boolean() -> Self {
        SchemaNode::Primitive(Primitive::Boolean)
    }

    /// Date-time leaf.
    pub fn date() -> Self {
        SchemaNode::Primitive(Primitive::Date)
    }

    /// Big integer leaf.
    pub fn big_int() -> Self {
        SchemaNode::Primitive(Primitive::BigInt)
    }

    /// Void leaf (no value).
    pub fn void() -> Self {
        SchemaNode::Primitive(Primitive::Void)
    }

    /// Enum leaf over a closed set of string values.
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SchemaNode::Primitive(Primitive::Enum(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// Object node with unknown-key passthrough enabled.
    ///
    /// # Panics
    ///
    /// Panics if two fields share a name. Field names must be unique within
    /// one object; a duplicate is a static declaration mistake.
    pub fn object<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, SchemaNode)>,
        S: Into<String>,
    {
        let mut map = IndexMap::new();
        for (name, node) in fields {
            let name = name.into();
            if map.insert(name.clone(), node).is_some() {
                panic!("duplicate field name in schema object: {name:?}");
            }
        }
        SchemaNode::Object {
            fields: map,
            passthrough: true,
        }
    }

    /// Disable unknown-key passthrough on an object node.
    ///
    /// # Panics
    ///
    /// Panics when called on a non-object node.
    pub fn closed(self) -> Self {
        match self {
            SchemaNode::Object { fields, .. } => SchemaNode::Object {
                fields,
                passthrough: false,
            },
            other => panic!("closed() requires an object node, got {:?}", other.kind()),
        }
    }

    /// Array node.
    pub fn array(element: SchemaNode) -> Self {
        SchemaNode::Array(Box::new(element))
    }

    /// Optional wrapper (value or absent).
    pub fn optional(inner: SchemaNode) -> Self {
        SchemaNode::Optional(Box::new(inner))
    }

    /// Nullable wrapper (value or null).
    pub fn nullable(inner: SchemaNode) -> Self {
        SchemaNode::Nullable(Box::new(inner))
    }

    /// Union of alternatives.
    ///
    /// # Panics
    ///
    /// Panics when fewer than two options are given.
    pub fn union<I>(options: I) -> Self
    where
        I: IntoIterator<Item = SchemaNode>,
    {
        let options: Vec<SchemaNode> = options.into_iter().collect();
        if options.len() < 2 {
            panic!("union requires at least two options, got {}", options.len());
        }
        SchemaNode::Union(options)
    }

    /// Intersection of two nodes.
    pub fn intersection(left: SchemaNode, right: SchemaNode) -> Self {
        SchemaNode::Intersection(Box::new(left), Box::new(right))
    }

    /// Branded wrapper carrying `tag`.
    pub fn branded(inner: SchemaNode, tag: impl Into<String>) -> Self {
        SchemaNode::Branded {
            inner: Box::new(inner),
            tag: tag.into(),
        }
    }

    /// Opaque raw JSON Schema fragment.
    pub fn opaque(fragment: Value) -> Self {
        SchemaNode::Opaque(fragment)
    }

    /// Classify this node's structural kind.
    ///
    /// Inspects only the node's own tag, never its children.
    pub fn kind(&self) -> NodeKind {
        match self {
            SchemaNode::Primitive(_) => NodeKind::Primitive,
            SchemaNode::Object { .. } => NodeKind::Object,
            SchemaNode::Array(_) => NodeKind::Array,
            SchemaNode::Optional(_) => NodeKind::Optional,
            SchemaNode::Nullable(_) => NodeKind::Nullable,
            SchemaNode::Union(_) => NodeKind::Union,
            SchemaNode::Intersection(_, _) => NodeKind::Intersection,
            SchemaNode::Branded { .. } => NodeKind::Branded,
            SchemaNode::Opaque(_) => NodeKind::Unknown,
        }
    }
}
