//! Schema linting - static analysis of schema description files.
//!
//! Validates schema descriptions for:
//! - JSON syntax errors and unknown node shapes
//! - field names that collide after case conversion
//! - structurally invalid nodes a hand-edited file can contain
//!   (single-option unions, empty enums)
//! - readonly markers buried where stripping cannot see them

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::casing;
use crate::loader::load_schema;
use crate::readonly::is_readonly;
use crate::schema::SchemaNode;
use crate::types::Primitive;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic message from linting.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub file: PathBuf,
    /// Path to the issue within the description (e.g., "/fields/id").
    pub path: String,
    pub message: String,
}

/// Result of linting a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Status of a linted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Ok,
    Error,
    Warning,
}

/// Result of linting a directory or set of files.
#[derive(Debug, Clone, Serialize)]
pub struct LintResult {
    pub path: PathBuf,
    pub files_checked: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub warnings: usize,
    pub results: Vec<FileResult>,
}

impl LintResult {
    /// Returns true if all files passed (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors == 0
    }
}

/// Lint a file or directory.
///
/// If path is a directory, recursively finds all .json files.
/// If `strict` is true, warnings are treated as errors.
/// Returns aggregated results for all files.
pub fn lint(path: &Path, strict: bool) -> LintResult {
    let files = collect_schema_files(path);
    let mut results = Vec::new();
    let mut total_errors = 0;
    let mut total_warnings = 0;

    for file in &files {
        let file_result = lint_file(file, path);
        total_errors += file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        total_warnings += file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        results.push(file_result);
    }

    let failed = results
        .iter()
        .filter(|r| {
            if strict {
                r.status != FileStatus::Ok
            } else {
                r.status == FileStatus::Error
            }
        })
        .count();

    LintResult {
        path: path.to_path_buf(),
        files_checked: files.len(),
        passed: files.len() - failed,
        failed,
        errors: total_errors,
        warnings: total_warnings,
        results,
    }
}

/// Lint a single schema description file.
pub fn lint_file(file: &Path, base_path: &Path) -> FileResult {
    let mut diagnostics = Vec::new();

    let schema = match load_schema(file) {
        Ok(s) => s,
        Err(e) => {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                code: "E001".to_string(),
                file: file.to_path_buf(),
                path: "/".to_string(),
                message: format!("cannot load schema: {}", e),
            });
            return FileResult {
                file: file.strip_prefix(base_path).unwrap_or(file).to_path_buf(),
                status: FileStatus::Error,
                diagnostics,
            };
        }
    };

    check_node(&schema, file, "", &mut diagnostics);

    let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);
    let has_warnings = diagnostics.iter().any(|d| d.severity == Severity::Warning);

    let status = if has_errors {
        FileStatus::Error
    } else if has_warnings {
        FileStatus::Warning
    } else {
        FileStatus::Ok
    };

    FileResult {
        file: file.strip_prefix(base_path).unwrap_or(file).to_path_buf(),
        status,
        diagnostics,
    }
}

/// Recursively check a schema node.
fn check_node(node: &SchemaNode, file: &Path, path: &str, diagnostics: &mut Vec<Diagnostic>) {
    match node {
        SchemaNode::Primitive(Primitive::Enum(values)) if values.is_empty() => {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                code: "E103".to_string(),
                file: file.to_path_buf(),
                path: path.to_string(),
                message: "enum has no values; it can never validate".to_string(),
            });
        }
        SchemaNode::Primitive(_) | SchemaNode::Opaque(_) => {}
        SchemaNode::Object { fields, .. } => {
            check_collisions(fields.keys(), file, path, diagnostics);

            for (name, field) in fields {
                let field_path = format!("{}/fields/{}", path, name);
                check_buried_marker(field, file, &field_path, diagnostics);
                check_node(field, file, &field_path, diagnostics);
            }
        }
        SchemaNode::Array(element) => {
            check_node(element, file, &format!("{}/element", path), diagnostics);
        }
        SchemaNode::Optional(inner) | SchemaNode::Nullable(inner) => {
            check_node(inner, file, &format!("{}/inner", path), diagnostics);
        }
        SchemaNode::Union(options) => {
            if options.len() < 2 {
                diagnostics.push(Diagnostic {
                    severity: Severity::Error,
                    code: "E102".to_string(),
                    file: file.to_path_buf(),
                    path: path.to_string(),
                    message: format!(
                        "union must have at least two options, found {}",
                        options.len()
                    ),
                });
            }
            for (i, option) in options.iter().enumerate() {
                check_node(option, file, &format!("{}/options/{}", path, i), diagnostics);
            }
        }
        SchemaNode::Intersection(left, right) => {
            check_node(left, file, &format!("{}/left", path), diagnostics);
            check_node(right, file, &format!("{}/right", path), diagnostics);
        }
        SchemaNode::Branded { inner, .. } => {
            check_node(inner, file, &format!("{}/inner", path), diagnostics);
        }
    }
}

/// Report field names that collapse to the same converted name.
///
/// The transformer itself is last-write-wins on collision, so a colliding
/// pair silently loses a field at conversion time; the lint surfaces it.
fn check_collisions<'a>(
    names: impl Iterator<Item = &'a String>,
    file: &Path,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let names: Vec<&String> = names.collect();
    let mut reported: Vec<Vec<&String>> = Vec::new();

    for (direction, convert) in [
        ("wire", casing::to_snake as fn(&str) -> String),
        ("local", casing::to_camel as fn(&str) -> String),
    ] {
        let mut groups: BTreeMap<String, Vec<&String>> = BTreeMap::new();
        for &name in &names {
            groups.entry(convert(name)).or_default().push(name);
        }
        for (converted, group) in groups {
            if group.len() < 2 || reported.contains(&group) {
                continue;
            }
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                code: "E101".to_string(),
                file: file.to_path_buf(),
                path: path.to_string(),
                message: format!(
                    "fields {} collide on {} conversion (all become \"{}\"); the last one wins",
                    group
                        .iter()
                        .map(|n| format!("\"{}\"", n))
                        .collect::<Vec<_>>()
                        .join(", "),
                    direction,
                    converted
                ),
            });
            reported.push(group);
        }
    }
}

/// Warn when a readonly marker sits under a wrapper at field position.
///
/// `strip_readonly_fields` only recognizes a marker at the top of a field;
/// one buried under optional/nullable/another brand survives stripping.
fn check_buried_marker(
    field: &SchemaNode,
    file: &Path,
    field_path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if is_readonly(field) {
        return;
    }

    let mut current = field;
    loop {
        current = match current {
            SchemaNode::Optional(inner) | SchemaNode::Nullable(inner) => inner,
            SchemaNode::Branded { inner, .. } => inner,
            _ => return,
        };
        if is_readonly(current) {
            diagnostics.push(Diagnostic {
                severity: Severity::Warning,
                code: "W101".to_string(),
                file: file.to_path_buf(),
                path: field_path.to_string(),
                message: "readonly marker is wrapped by another node; \
                          stripping only sees markers at the top of a field"
                    .to_string(),
            });
            return;
        }
    }
}

/// Collect all .json files in a path (file or directory).
fn collect_schema_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            return vec![path.to_path_buf()];
        }
        return vec![];
    }

    let mut files = Vec::new();
    collect_files_recursive(path, &mut files);
    files.sort();
    files
}

fn collect_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files_recursive(&path, files);
        } else if path.extension().map(|e| e == "json").unwrap_or(false) {
            files.push(path);
        }
    }
}
