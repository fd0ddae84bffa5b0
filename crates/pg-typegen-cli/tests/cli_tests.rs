//! CLI integration tests for pg-typegen.
//!
//! These tests verify command-line argument parsing, help output,
//! exit codes for various error conditions, and command output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get a command for the pg-typegen binary.
fn cmd() -> Command {
    Command::cargo_bin("pg-typegen").unwrap()
}

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn config_file(content: &str) -> NamedTempFile {
    temp_file(".yaml", content)
}

const CATALOG_YAML: &str = r#"
default_schema: public
schemas:
  - name: pg_catalog
    enums:
      - name: status
        vals: [shadowed]
  - name: public
    enums:
      - name: status
        vals: [active, on-hold]
    composite_types:
      - name: address
    tables:
      - name: users
        columns:
          - name: id
            type: bigserial
            not_null: true
          - name: status
            type: status
            not_null: true
          - name: home
            type: address
          - name: profile
            type: jsonb
          - name: balance
            type: numeric
            not_null: true
          - name: extra
            type: frobnicate
  - name: billing
    enums:
      - name: status
        vals: [paid, due]
"#;

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_shows_all_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("models"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_resolve_subcommand_help() {
    cmd()
        .args(["resolve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--catalog"))
        .stdout(predicate::str::contains("--not-null"))
        .stdout(predicate::str::contains("--array"))
        .stdout(predicate::str::contains("<TYPE>"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pg-typegen"));
}

// =============================================================================
// Global Flags Tests
// =============================================================================

#[test]
fn test_driver_and_debug_flags_exist() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--driver"))
        .stdout(predicate::str::contains("--debug"));
}

#[test]
fn test_output_json_flag_exists() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output-json"));
}

#[test]
fn test_log_format_flag_exists() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--log-format"))
        .stdout(predicate::str::contains("[default: text]"));
}

#[test]
fn test_verbosity_flag_exists() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verbosity"))
        .stdout(predicate::str::contains("[default: info]"));
}

#[test]
fn test_config_default_path() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[default: pg-typegen.yaml]"));
}

#[test]
fn test_short_config_flag() {
    cmd()
        .args(["-c", "some_config.yaml", "--help"])
        .assert()
        .success();
}

#[test]
fn test_no_subcommand_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Exit Code Tests
// =============================================================================

#[test]
fn test_missing_config_exits_with_code_7() {
    // Missing file is an IO error (code 7), not config error (code 1)
    cmd()
        .args(["--config", "nonexistent_config_file.yaml", "resolve", "int8"])
        .assert()
        .code(7);
}

#[test]
fn test_invalid_yaml_exits_with_code_1() {
    let config = config_file("invalid: yaml: content: [");

    cmd()
        .args(["--config", config.path().to_str().unwrap(), "resolve", "int8"])
        .assert()
        .code(1);
}

#[test]
fn test_invalid_package_exits_with_code_1() {
    let config = config_file("go:\n  package: 1db\n");

    cmd()
        .args(["--config", config.path().to_str().unwrap(), "resolve", "int8"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_catalog_exits_with_code_7() {
    let config = config_file("debug: false\n");

    cmd()
        .args([
            "--config",
            config.path().to_str().unwrap(),
            "models",
            "--catalog",
            "nonexistent_catalog.yaml",
        ])
        .assert()
        .code(7);
}

#[test]
fn test_invalid_catalog_exits_with_code_3() {
    let config = config_file("debug: false\n");
    let catalog = temp_file(".yaml", "default_schema: \"\"\nschemas: []\n");

    cmd()
        .args([
            "--config",
            config.path().to_str().unwrap(),
            "validate",
            "--catalog",
            catalog.path().to_str().unwrap(),
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Catalog error"));
}

// =============================================================================
// Resolve Tests
// =============================================================================

#[test]
fn test_resolve_builtin_without_catalog() {
    let config = config_file("debug: false\n");

    cmd()
        .args(["--config", config.path().to_str().unwrap(), "resolve", "pg_catalog.int8"])
        .assert()
        .success()
        .stdout("int64\n");
}

#[test]
fn test_resolve_uses_configured_driver() {
    let config = config_file("go:\n  sql_package: pgx/v4\n");

    cmd()
        .args(["--config", config.path().to_str().unwrap(), "resolve", "numeric"])
        .assert()
        .success()
        .stdout("pgtype.Numeric\n");
}

#[test]
fn test_driver_flag_overrides_config() {
    let config = config_file("go:\n  sql_package: pgx/v4\n");

    cmd()
        .args([
            "--config",
            config.path().to_str().unwrap(),
            "--driver",
            "database/sql",
            "resolve",
            "jsonb",
        ])
        .assert()
        .success()
        .stdout("pqtype.NullRawMessage\n");
}

#[test]
fn test_resolve_array_behaves_as_not_null() {
    let config = config_file("debug: false\n");

    cmd()
        .args(["--config", config.path().to_str().unwrap(), "resolve", "json", "--array"])
        .assert()
        .success()
        .stdout("json.RawMessage\n");
}

#[test]
fn test_resolve_enum_from_catalog() {
    let config = config_file("debug: false\n");
    let catalog = temp_file(".yaml", CATALOG_YAML);

    cmd()
        .args([
            "--config",
            config.path().to_str().unwrap(),
            "resolve",
            "--catalog",
            catalog.path().to_str().unwrap(),
            "billing.status",
        ])
        .assert()
        .success()
        .stdout("BillingStatus\n");
}

#[test]
fn test_resolve_unknown_type_json_output() {
    let config = config_file("debug: false\n");

    cmd()
        .args([
            "--config",
            config.path().to_str().unwrap(),
            "--output-json",
            "resolve",
            "frobnicate",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"go_type\": \"interface{}\""))
        .stdout(predicate::str::contains("\"kind\": \"unresolved\""));
}

#[test]
fn test_debug_flag_logs_unresolved_type() {
    let config = config_file("debug: false\n");

    cmd()
        .args(["--config", config.path().to_str().unwrap(), "--debug", "resolve", "frobnicate"])
        .assert()
        .success()
        .stdout("interface{}\n")
        .stderr(predicate::str::contains("unknown PostgreSQL type: frobnicate"));
}

// =============================================================================
// Models and Validate Tests
// =============================================================================

#[test]
fn test_models_renders_go_source() {
    let config = config_file("go:\n  package: models\n");
    let catalog = temp_file(".yaml", CATALOG_YAML);

    cmd()
        .args([
            "--config",
            config.path().to_str().unwrap(),
            "models",
            "--catalog",
            catalog.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("package models\n"))
        .stdout(predicate::str::contains("type Status string"))
        .stdout(predicate::str::contains("type BillingStatus string"))
        .stdout(predicate::str::contains("type Users struct {"))
        .stdout(predicate::str::contains("sql.NullString"))
        .stdout(predicate::str::contains("shadowed").not());
}

#[test]
fn test_models_json_catalog_and_output() {
    let config = config_file("go:\n  sql_package: pgx/v4\n");
    let catalog = temp_file(
        ".json",
        r#"{"default_schema":"public","schemas":[{"name":"public","tables":[
            {"name":"events","columns":[{"name":"payload","type":"jsonb"}]}]}]}"#,
    );

    cmd()
        .args([
            "--config",
            config.path().to_str().unwrap(),
            "--output-json",
            "models",
            "--catalog",
            catalog.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Events\""))
        .stdout(predicate::str::contains("\"go_type\": \"pgtype.JSONB\""));
}

#[test]
fn test_validate_reports_unresolved_columns() {
    let config = config_file("debug: false\n");
    let catalog = temp_file(".yaml", CATALOG_YAML);

    cmd()
        .args([
            "--config",
            config.path().to_str().unwrap(),
            "validate",
            "--catalog",
            catalog.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration OK"))
        .stdout(predicate::str::contains("tables:          1"))
        .stdout(predicate::str::contains("public.users.extra (frobnicate)"));
}
