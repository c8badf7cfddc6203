//! Wirecase CLI
//!
//! Command-line interface for converting, emitting, validating and linting
//! schema descriptions.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use wirecase::{
    convert_schema, lint, load_schema_auto, load_value, strip_readonly_fields, to_json_schema,
    validate, Direction, FileStatus, SchemaNode, Severity, ValidateError,
};

#[derive(Parser)]
#[command(name = "wirecase")]
#[command(about = "Convert, validate and lint case-converting schema descriptions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a schema description between wire and local field naming
    Transform {
        /// Schema source: file path or URL (http:// or https://)
        schema: String,

        /// Convert field names to wire naming (snake_case)
        #[arg(long, conflicts_with = "to_local", required_unless_present = "to_local")]
        to_wire: bool,

        /// Convert field names to local naming (camelCase)
        #[arg(long, conflicts_with = "to_wire", required_unless_present = "to_wire")]
        to_local: bool,

        /// Drop readonly-marked fields before converting (write-payload shape)
        #[arg(long)]
        strip_readonly: bool,

        /// Field name to keep (unwrapped) while stripping; repeatable
        #[arg(long, requires = "strip_readonly")]
        keep: Vec<String>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Emit the JSON Schema document for a schema description
    Emit {
        /// Schema source: file path or URL (http:// or https://)
        schema: String,

        /// Convert to wire naming before emitting
        #[arg(long)]
        to_wire: bool,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Validate a payload against a schema description
    Validate {
        /// Payload file to validate
        payload: PathBuf,

        /// Schema source: file path or URL
        #[arg(long)]
        schema: String,

        /// Convert the schema to wire naming before validating
        #[arg(long)]
        to_wire: bool,

        /// Output results as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// Lint schema description files (syntax, collisions, invalid nodes)
    Lint {
        /// File or directory to lint
        path: PathBuf,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Suppress progress output, only show errors
        #[arg(long, short)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Transform {
            schema,
            to_wire,
            to_local: _,
            strip_readonly,
            keep,
            output,
            pretty,
        } => run_transform(&schema, to_wire, strip_readonly, &keep, output, pretty),

        Commands::Emit {
            schema,
            to_wire,
            output,
            pretty,
        } => run_emit(&schema, to_wire, output, pretty),

        Commands::Validate {
            payload,
            schema,
            to_wire,
            json,
        } => run_validate(&payload, &schema, to_wire, json),

        Commands::Lint {
            path,
            format,
            strict,
            quiet,
        } => run_lint(&path, &format, strict, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn load_source(source: &str) -> Result<SchemaNode, u8> {
    load_schema_auto(source).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })
}

fn write_output(text: &str, output: Option<PathBuf>) -> Result<(), u8> {
    match output {
        Some(path) => std::fs::write(&path, text).map_err(|e| {
            eprintln!("Error writing to {}: {}", path.display(), e);
            3u8
        }),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

fn to_json_text<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, u8> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })
}

fn run_transform(
    schema_source: &str,
    to_wire: bool,
    strip_readonly: bool,
    keep: &[String],
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<(), u8> {
    let mut schema = load_source(schema_source)?;

    if strip_readonly {
        let keep: Vec<&str> = keep.iter().map(String::as_str).collect();
        schema = strip_readonly_fields(&schema, &keep);
    }

    let converted = convert_schema(&schema, Direction::from_wire_flag(to_wire));
    let text = to_json_text(&converted, pretty)?;
    write_output(&text, output)
}

fn run_emit(
    schema_source: &str,
    to_wire: bool,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<(), u8> {
    let mut schema = load_source(schema_source)?;
    if to_wire {
        schema = convert_schema(&schema, Direction::ToWire);
    }

    let document = to_json_schema(&schema);
    let text = to_json_text(&document, pretty)?;
    write_output(&text, output)
}

fn run_validate(
    payload_path: &Path,
    schema_source: &str,
    to_wire: bool,
    json_output: bool,
) -> Result<(), u8> {
    let payload = load_value(payload_path).map_err(|e| {
        report_error(json_output, &format!("loading payload: {}", e));
        e.exit_code() as u8
    })?;

    let mut schema = load_source(schema_source)?;
    if to_wire {
        schema = convert_schema(&schema, Direction::ToWire);
    }

    match validate(&payload, &schema) {
        Ok(()) => {
            if json_output {
                println!(r#"{{"valid":true}}"#);
            } else {
                println!("Valid");
            }
            Ok(())
        }
        Err(ValidateError::Invalid { errors }) => {
            if json_output {
                let output = serde_json::json!({
                    "valid": false,
                    "errors": errors
                });
                println!("{}", output);
            } else {
                eprintln!("Validation failed:");
                for error in errors {
                    eprintln!("  {}", error);
                }
            }
            Err(1)
        }
        Err(e) => {
            report_error(json_output, &e.to_string());
            Err(e.exit_code() as u8)
        }
    }
}

/// Output an error message in plain text or JSON format.
fn report_error(json_output: bool, msg: &str) {
    if json_output {
        println!(r#"{{"valid":false,"error":"{}"}}"#, msg);
    } else {
        eprintln!("Error: {}", msg);
    }
}

fn run_lint(path: &Path, format: &str, strict: bool, quiet: bool) -> Result<(), u8> {
    if !path.exists() {
        eprintln!("Error: path not found: {}", path.display());
        return Err(2);
    }

    let result = lint(path, strict);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
    } else {
        if !quiet {
            println!("Linting {} ...\n", path.display());
        }

        for file_result in &result.results {
            let status_icon = match file_result.status {
                FileStatus::Ok => "\x1b[32m✓\x1b[0m",
                FileStatus::Warning => "\x1b[33m⚠\x1b[0m",
                FileStatus::Error => "\x1b[31m✗\x1b[0m",
            };

            if !quiet || file_result.status != FileStatus::Ok {
                println!("  {} {}", status_icon, file_result.file.display());
            }

            for diag in &file_result.diagnostics {
                let color = match diag.severity {
                    Severity::Error => "\x1b[31m",
                    Severity::Warning => "\x1b[33m",
                };
                if !quiet || diag.severity == Severity::Error {
                    println!(
                        "    {}{}[{}]\x1b[0m: {} - {}",
                        color,
                        match diag.severity {
                            Severity::Error => "error",
                            Severity::Warning => "warning",
                        },
                        diag.code,
                        diag.path,
                        diag.message
                    );
                }
            }
        }

        println!();
        if result.is_ok() && (!strict || result.warnings == 0) {
            println!(
                "\x1b[32m✓ {} files checked, all passed\x1b[0m",
                result.files_checked
            );
        } else {
            println!(
                "\x1b[31m✗ {} files checked: {} passed, {} failed ({} errors, {} warnings)\x1b[0m",
                result.files_checked, result.passed, result.failed, result.errors, result.warnings
            );
        }
    }

    if result.is_ok() && (!strict || result.warnings == 0) {
        Ok(())
    } else {
        Err(1)
    }
}
