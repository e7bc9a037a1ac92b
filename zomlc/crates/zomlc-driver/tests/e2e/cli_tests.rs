//! CLI interface tests: help/version output, exit codes, and flag parsing
//! for the `zomlc` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("e2e")
        .join("fixtures")
}

fn zomlc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_zomlc"))
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(zomlc_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage").or(predicate::str::contains("zomlc")));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(zomlc_bin());
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("zomlc"));
}

#[test]
fn test_cli_missing_input_is_a_usage_error() {
    let mut cmd = Command::new(zomlc_bin());

    cmd.assert().failure();
}

#[test]
fn test_cli_file_not_found() {
    let mut cmd = Command::new(zomlc_bin());
    cmd.arg("/nonexistent/path/to/file.zom");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_cli_parses_a_clean_file() {
    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(fixtures_dir().join("hello_world.zom"));

    cmd.assert().success();
}

#[test]
fn test_cli_dump_ast_prints_something() {
    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(fixtures_dir().join("hello_world.zom")).arg("--dump-ast");

    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_cli_dump_ast_json_format() {
    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(fixtures_dir().join("arithmetic.zom"))
        .arg("--dump-ast")
        .arg("--dump-format")
        .arg("json");

    cmd.assert().success();
}

#[test]
fn test_cli_invalid_syntax_fails_with_diagnostic() {
    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(fixtures_dir().join("invalid_syntax.zom"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_cli_unreadable_config_reports_context() {
    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(fixtures_dir().join("hello_world.zom"))
        .arg("--config")
        .arg("/nonexistent/zomlc.toml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("zomlc.toml"));
}
