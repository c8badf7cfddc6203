//! CLI integration tests for the wirecase binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("wirecase"))
}

// Helper to create a temp schema file
fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const PERSON_SCHEMA: &str = r#"{
    "object": { "fields": {
        "id": { "branded": {
            "inner": { "primitive": "string" },
            "tag": "ReadonlyField"
        } },
        "firstName": { "primitive": "string" },
        "lastName": { "primitive": "string" }
    } }
}"#;

mod transform_command {
    use super::*;

    #[test]
    fn basic_to_wire() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "person.json", PERSON_SCHEMA);

        cmd()
            .args(["transform", schema.to_str().unwrap(), "--to-wire"])
            .assert()
            .success()
            .stdout(predicate::str::contains("first_name"))
            .stdout(predicate::str::contains("last_name"));
    }

    #[test]
    fn to_local_restores_camel_case() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(
            &dir,
            "wire.json",
            r#"{ "object": { "fields": { "first_name": { "primitive": "string" } } } }"#,
        );

        cmd()
            .args(["transform", schema.to_str().unwrap(), "--to-local"])
            .assert()
            .success()
            .stdout(predicate::str::contains("firstName"));
    }

    #[test]
    fn strip_readonly_drops_marked_fields() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "person.json", PERSON_SCHEMA);

        cmd()
            .args([
                "transform",
                schema.to_str().unwrap(),
                "--to-wire",
                "--strip-readonly",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("id").not())
            .stdout(predicate::str::contains("first_name"));
    }

    #[test]
    fn strip_readonly_with_keep() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "person.json", PERSON_SCHEMA);

        cmd()
            .args([
                "transform",
                schema.to_str().unwrap(),
                "--to-wire",
                "--strip-readonly",
                "--keep",
                "id",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"id\""))
            .stdout(predicate::str::contains("ReadonlyField").not());
    }

    #[test]
    fn direction_flags_conflict() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "person.json", PERSON_SCHEMA);

        cmd()
            .args([
                "transform",
                schema.to_str().unwrap(),
                "--to-wire",
                "--to-local",
            ])
            .assert()
            .failure();
    }

    #[test]
    fn direction_flag_required() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "person.json", PERSON_SCHEMA);

        cmd()
            .args(["transform", schema.to_str().unwrap()])
            .assert()
            .failure();
    }

    #[test]
    fn missing_schema_file_exits_3() {
        cmd()
            .args(["transform", "does-not-exist.json", "--to-wire"])
            .assert()
            .failure()
            .code(3)
            .stderr(predicate::str::contains("file not found"));
    }

    #[test]
    fn output_to_file() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "person.json", PERSON_SCHEMA);
        let out_path = dir.path().join("wire.json");

        cmd()
            .args([
                "transform",
                schema.to_str().unwrap(),
                "--to-wire",
                "--output",
                out_path.to_str().unwrap(),
            ])
            .assert()
            .success();

        let written = fs::read_to_string(&out_path).unwrap();
        assert!(written.contains("first_name"));
    }
}

mod emit_command {
    use super::*;

    #[test]
    fn emits_a_json_schema_document() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "person.json", PERSON_SCHEMA);

        cmd()
            .args(["emit", schema.to_str().unwrap(), "--pretty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"properties\""))
            .stdout(predicate::str::contains("\"firstName\""));
    }

    #[test]
    fn emits_wire_properties_with_to_wire() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "person.json", PERSON_SCHEMA);

        cmd()
            .args(["emit", schema.to_str().unwrap(), "--to-wire"])
            .assert()
            .success()
            .stdout(predicate::str::contains("first_name"));
    }

    #[test]
    fn bad_schema_exits_2() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "bad.json", r#"{ "record": {} }"#);

        cmd()
            .args(["emit", schema.to_str().unwrap()])
            .assert()
            .failure()
            .code(2);
    }
}

mod validate_command {
    use super::*;

    #[test]
    fn valid_payload() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "person.json", PERSON_SCHEMA);
        let payload = write_temp_file(
            &dir,
            "payload.json",
            r#"{ "id": "7", "first_name": "Joe", "last_name": "Dyer" }"#,
        );

        cmd()
            .args([
                "validate",
                payload.to_str().unwrap(),
                "--schema",
                schema.to_str().unwrap(),
                "--to-wire",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Valid"));
    }

    #[test]
    fn invalid_payload_exits_1() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "person.json", PERSON_SCHEMA);
        let payload = write_temp_file(&dir, "payload.json", r#"{ "first_name": 42 }"#);

        cmd()
            .args([
                "validate",
                payload.to_str().unwrap(),
                "--schema",
                schema.to_str().unwrap(),
                "--to-wire",
            ])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Validation failed"));
    }

    #[test]
    fn invalid_payload_json_output() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "person.json", PERSON_SCHEMA);
        let payload = write_temp_file(&dir, "payload.json", r#"{ "first_name": 42 }"#);

        cmd()
            .args([
                "validate",
                payload.to_str().unwrap(),
                "--schema",
                schema.to_str().unwrap(),
                "--to-wire",
                "--json",
            ])
            .assert()
            .failure()
            .stdout(predicate::str::contains(r#""valid":false"#));
    }

    #[test]
    fn extra_fields_are_allowed() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "person.json", PERSON_SCHEMA);
        let payload = write_temp_file(
            &dir,
            "payload.json",
            r#"{ "id": "7", "first_name": "Joe", "last_name": "Dyer", "extra_field": 3 }"#,
        );

        cmd()
            .args([
                "validate",
                payload.to_str().unwrap(),
                "--schema",
                schema.to_str().unwrap(),
                "--to-wire",
            ])
            .assert()
            .success();
    }

    #[test]
    fn missing_payload_exits_3() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "person.json", PERSON_SCHEMA);

        cmd()
            .args([
                "validate",
                "no-such-payload.json",
                "--schema",
                schema.to_str().unwrap(),
            ])
            .assert()
            .failure()
            .code(3);
    }
}

mod lint_command {
    use super::*;

    #[test]
    fn clean_schema_passes() {
        let dir = TempDir::new().unwrap();
        write_temp_file(&dir, "person.json", PERSON_SCHEMA);

        cmd()
            .args(["lint", dir.path().to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("all passed"));
    }

    #[test]
    fn collision_fails_with_code() {
        let dir = TempDir::new().unwrap();
        write_temp_file(
            &dir,
            "colliding.json",
            r#"{ "object": { "fields": {
                "userId": { "primitive": "string" },
                "user_id": { "primitive": "string" }
            } } }"#,
        );

        cmd()
            .args(["lint", dir.path().to_str().unwrap()])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("E101"));
    }

    #[test]
    fn json_format() {
        let dir = TempDir::new().unwrap();
        write_temp_file(&dir, "person.json", PERSON_SCHEMA);

        cmd()
            .args(["lint", dir.path().to_str().unwrap(), "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"files_checked\": 1"));
    }

    #[test]
    fn strict_turns_warnings_into_failure() {
        let dir = TempDir::new().unwrap();
        write_temp_file(
            &dir,
            "buried.json",
            r#"{ "object": { "fields": {
                "updatedAt": { "optional": { "branded": {
                    "inner": { "primitive": "date" },
                    "tag": "ReadonlyField"
                } } }
            } } }"#,
        );

        cmd()
            .args(["lint", dir.path().to_str().unwrap()])
            .assert()
            .success();

        cmd()
            .args(["lint", dir.path().to_str().unwrap(), "--strict"])
            .assert()
            .failure()
            .code(1);
    }

    #[test]
    fn missing_path_exits_2() {
        cmd()
            .args(["lint", "no-such-dir"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("path not found"));
    }
}
