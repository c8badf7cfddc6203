//! Payload validation against schema descriptions.
//!
//! Two validation policies share one backend:
//!
//! - **outbound** data (write payloads, filters) is caller-authored; a
//!   mismatch is a programmer error and fails fast via [`validate`]
//! - **inbound** data (responses) is not under the caller's control;
//!   [`validate_response`] reports a mismatch through a diagnostic sink and
//!   returns the original value so the caller stays usable when the server
//!   schema drifts

use serde_json::Value;

use crate::emit::to_json_schema;
use crate::error::{SchemaError, ValidateError};
use crate::schema::SchemaNode;
use crate::transform::convert_value;
use crate::types::Direction;

/// What to do when an inbound payload does not match its schema.
#[derive(Default, Clone, Copy)]
pub enum OnMismatch<'a> {
    /// Emit a debug-level log line (the default).
    #[default]
    Log,
    /// Suppress diagnostics entirely.
    Silent,
    /// Invoke a caller-supplied handler with the call identifier and error.
    Handler(&'a dyn Fn(&str, &ValidateError)),
}

/// Validate a payload against a schema description. Fail-closed.
///
/// Unknown keys are allowed on passthrough objects and rejected on closed
/// ones, per the schema's declaration.
///
/// # Errors
///
/// `ValidateError::Schema` if the description does not compile,
/// `ValidateError::Invalid` with per-path details if the payload does not
/// conform.
pub fn validate(value: &Value, schema: &SchemaNode) -> Result<(), ValidateError> {
    let document = to_json_schema(schema);
    let validator = jsonschema::validator_for(&document).map_err(|e| ValidateError::Schema {
        message: e.to_string(),
    })?;

    let errors: Vec<SchemaError> = validator
        .iter_errors(value)
        .map(|e| SchemaError {
            path: e.instance_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidateError::Invalid { errors })
    }
}

/// Validate an inbound payload. Permissive.
///
/// On success returns the value unchanged, unknown keys included. On
/// mismatch the payload is still returned as-is and the mismatch goes to the
/// sink; inbound validation never fails the read path.
///
/// `context` identifies the service call in diagnostics.
pub fn validate_response(
    context: &str,
    value: Value,
    schema: &SchemaNode,
    on_mismatch: OnMismatch<'_>,
) -> Value {
    if let Err(err) = validate(&value, schema) {
        report_mismatch(context, &err, on_mismatch);
    }
    value
}

/// Decode an inbound wire payload: validate, then convert keys to local
/// naming.
///
/// On mismatch the original wire-cased value is returned untouched (and the
/// mismatch reported), so degraded data stays recognizable as such.
pub fn decode_response(
    context: &str,
    value: Value,
    wire_schema: &SchemaNode,
    on_mismatch: OnMismatch<'_>,
) -> Value {
    match validate(&value, wire_schema) {
        Ok(()) => convert_value(&value, Direction::ToLocal),
        Err(err) => {
            report_mismatch(context, &err, on_mismatch);
            value
        }
    }
}

fn report_mismatch(context: &str, err: &ValidateError, on_mismatch: OnMismatch<'_>) {
    match on_mismatch {
        OnMismatch::Silent => {}
        OnMismatch::Log => {
            tracing::debug!(
                "Response to service call with identifier < {} > did not match expected type, errors: {}",
                context,
                err.details()
            );
        }
        OnMismatch::Handler(handler) => handler(context, err),
    }
}
