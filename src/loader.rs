//! Schema and payload loading from various sources.
//!
//! Handles loading schema descriptions from files, strings, and HTTP URLs.

use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;
use crate::schema::SchemaNode;

#[cfg(feature = "remote")]
use std::time::Duration;

/// Default timeout for HTTP requests (10 seconds).
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Load a schema description from a file path.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// `LoadError::InvalidJson` if the file isn't valid JSON, or
/// `LoadError::InvalidSchema` if the JSON isn't a schema description.
pub fn load_schema(path: &Path) -> Result<SchemaNode, LoadError> {
    schema_from_value(load_value(path)?)
}

/// Load a schema description from a JSON string.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` or `LoadError::InvalidSchema`.
pub fn load_schema_str(content: &str) -> Result<SchemaNode, LoadError> {
    let value =
        serde_json::from_str(content).map_err(|source| LoadError::InvalidJson { source })?;
    schema_from_value(value)
}

/// Load a raw JSON payload from a file path.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound`, `LoadError::ReadError` or
/// `LoadError::InvalidJson`.
pub fn load_value(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::InvalidJson { source })
}

/// Load a schema description from an HTTP/HTTPS URL.
///
/// Requires the `remote` feature (enabled by default).
///
/// # Errors
///
/// Returns `LoadError::NetworkError` if the request fails, or a parse error
/// if the response isn't a schema description.
#[cfg(feature = "remote")]
pub fn load_schema_url(url: &str) -> Result<SchemaNode, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|source| LoadError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|source| LoadError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    let value: Value = response.json().map_err(|source| LoadError::NetworkError {
        url: url.to_string(),
        source,
    })?;

    schema_from_value(value)
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load a schema description from a file path or URL, auto-detected.
///
/// URLs require the `remote` feature; without it a URL source is an
/// `InvalidSchema` error naming the missing feature.
pub fn load_schema_auto(source: &str) -> Result<SchemaNode, LoadError> {
    if is_url(source) {
        #[cfg(feature = "remote")]
        {
            return load_schema_url(source);
        }
        #[cfg(not(feature = "remote"))]
        {
            return Err(LoadError::InvalidSchema {
                message: format!(
                    "cannot load {source}: URL sources require the `remote` feature"
                ),
            });
        }
    }
    load_schema(Path::new(source))
}

/// Interpret an already-parsed JSON value as a schema description.
fn schema_from_value(value: Value) -> Result<SchemaNode, LoadError> {
    serde_json::from_value(value).map_err(|source| LoadError::InvalidSchema {
        message: source.to_string(),
    })
}
