//! Wirecase
//!
//! Case-converting schema transformation for API client payloads.
//!
//! Schema descriptions are authored once, in local (camelCase) field naming,
//! and drive everything at the network boundary: the wire (snake_case)
//! schema, payload validation, write-payload derivation and query filter
//! encoding.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wirecase::{
//!     convert_schema, decode_response, mark_readonly, strip_readonly_fields,
//!     Direction, OnMismatch, SchemaNode,
//! };
//!
//! let person = SchemaNode::object([
//!     ("id", mark_readonly(SchemaNode::string())),
//!     ("firstName", SchemaNode::string()),
//!     ("lastName", SchemaNode::string()),
//! ]);
//!
//! // The wire schema renames every field to snake_case.
//! let wire = convert_schema(&person, Direction::ToWire);
//!
//! // A create payload shape omits server-populated fields.
//! let create = strip_readonly_fields(&person, &[]);
//! assert!(matches!(
//!     &create,
//!     SchemaNode::Object { fields, .. } if !fields.contains_key("id")
//! ));
//!
//! // Responses are validated permissively and decoded back to local naming.
//! let body = json!({ "id": "7", "first_name": "Joe", "last_name": "Dyer" });
//! let decoded = decode_response("person.retrieve", body, &wire, OnMismatch::Log);
//! assert_eq!(decoded["firstName"], "Joe");
//! ```
//!
//! # Validation policy
//!
//! | Data | Policy | Failure behavior |
//! |------|--------|------------------|
//! | Outbound (write payloads, filters) | fail-closed | synchronous error |
//! | Inbound (responses) | permissive | diagnostic sink, original data returned |
//!
//! Inbound validation preserves fields the schema does not declare
//! (passthrough), so clients keep working when a server adds fields.

mod casing;
mod emit;
mod error;
mod filters;
mod linter;
mod loader;
mod pagination;
mod readonly;
mod schema;
mod transform;
mod types;
mod validator;

pub use casing::{convert, to_camel, to_snake};
pub use emit::to_json_schema;
pub use error::{LoadError, SchemaError, ValidateError};
pub use filters::{encode_filters, ValueEncoder};
pub use linter::{lint, lint_file, Diagnostic, FileResult, FileStatus, LintResult, Severity};
pub use loader::{is_url, load_schema, load_schema_auto, load_schema_str, load_value};
pub use pagination::{paginated_schema, PageCursor};
pub use readonly::{is_readonly, mark_readonly, strip_readonly_fields, READONLY_TAG};
pub use schema::SchemaNode;
pub use transform::{convert_schema, convert_value};
pub use types::{json_type_name, Direction, NodeKind, Primitive};
pub use validator::{decode_response, validate, validate_response, OnMismatch};

#[cfg(feature = "remote")]
pub use loader::load_schema_url;
