use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PETSTORE: &str = r##"{"swagger":"2.0","definitions":{"pet":{"properties":{"name":{"type":"string"},"tags":{"type":"array","items":{"$ref":"#/definitions/tag"}}},"required":["name"]}}}"##;

/// Helper to get the openapi2types binary command
#[allow(deprecated)]
fn types_cmd() -> Command {
    let mut cmd = Command::cargo_bin("openapi2types").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn write_schema(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

mod arguments {
    use super::*;

    #[test]
    fn help_flag() {
        types_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--input"))
            .stdout(predicate::str::contains("--output"))
            .stdout(predicate::str::contains("JSON schema path"));
    }

    #[test]
    fn version_flag() {
        types_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("openapi2types"));
    }

    #[test]
    fn missing_output_is_a_usage_error() {
        types_cmd()
            .args(["-i", "schema.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--output"))
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn missing_both_flags_is_a_usage_error() {
        types_cmd()
            .assert()
            .failure()
            .stderr(predicate::str::contains("required"));
    }

    #[test]
    fn non_json_input_is_rejected_before_reading() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("types.ts");

        types_cmd()
            .args(["-i", "does-not-exist.yaml", "-o"])
            .arg(&output)
            .assert()
            .failure()
            .stderr(predicate::str::contains("is not a .json format"))
            .stderr(predicate::str::contains("--input"));

        assert!(!output.exists());
    }

    #[test]
    fn unknown_required_policy_is_rejected() {
        types_cmd()
            .args(["-i", "a.json", "-o", "a.ts", "--required-policy", "strict"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("compat"));
    }
}

mod generation {
    use super::*;

    #[test]
    fn writes_petstore_types() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, "petstore.json", PETSTORE);
        let output = dir.path().join("types.ts");

        types_cmd()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::contains("Type has been written - pet"))
            .stdout(predicate::str::contains("1 written, 0 skipped"));

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "export type Pet = {\n\tname: string;\n\ttags?: Tag[];\n}\n\n"
        );
    }

    #[test]
    fn long_flags_work() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, "petstore.json", PETSTORE);
        let output = dir.path().join("out/types.ts");

        types_cmd()
            .arg("--input")
            .arg(&input)
            .arg("--output")
            .arg(&output)
            .assert()
            .success();

        assert!(output.exists());
    }

    #[test]
    fn openapi_required_policy() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(
            &dir,
            "schema.json",
            r#"{"swagger":"2.0","definitions":{"user":{"properties":{"id":{"type":"integer"}}}}}"#,
        );
        let output = dir.path().join("types.ts");

        types_cmd()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .args(["--required-policy", "openapi"])
            .assert()
            .success();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "export type User = {\n\tid?: number;\n}\n\n"
        );
    }

    #[test]
    fn dry_run_prints_types_only() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, "petstore.json", PETSTORE);
        let output = dir.path().join("types.ts");

        types_cmd()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .arg("--dry-run")
            .assert()
            .success()
            .stdout("export type Pet = {\n\tname: string;\n\ttags?: Tag[];\n}\n\n")
            .stderr(predicate::str::contains("Type has been written - pet"));

        assert!(!output.exists());
    }

    #[test]
    fn empty_definitions_report_and_succeed() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, "schema.json", r#"{"swagger":"2.0","definitions":{}}"#);
        let output = dir.path().join("types.ts");

        types_cmd()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::contains("There are no v2 definitions in schema"));

        assert!(!output.exists());
    }

    #[test]
    fn empty_components_report_and_succeed() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, "schema.json", r#"{"openapi":"3.0.0","components":{}}"#);
        let output = dir.path().join("types.ts");

        types_cmd()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "There are no v3 components.schemas in schema",
            ));
    }

    #[test]
    fn empty_schema_reports_and_succeeds() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, "schema.json", "null");
        let output = dir.path().join("types.ts");

        types_cmd()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::contains("is empty"));

        assert!(!output.exists());
    }

    #[test]
    fn unsupported_version_warns() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, "schema.json", r#"{"swagger":"1.2","definitions":{}}"#);
        let output = dir.path().join("types.ts");

        types_cmd()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .assert()
            .success()
            .stderr(predicate::str::contains("unsupported schema version"));

        assert!(!output.exists());
    }

    #[test]
    fn invalid_json_fails() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, "broken.json", "{ not json");
        let output = dir.path().join("types.ts");

        types_cmd()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse schema"));

        assert!(!output.exists());
    }

    #[test]
    fn missing_schema_fails() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("types.ts");

        types_cmd()
            .arg("-i")
            .arg(dir.path().join("missing.json"))
            .arg("-o")
            .arg(&output)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read schema"));
    }
}
