//! Parsing pipeline tests driven through the `zomlc` binary: successful
//! parses, import resolution across files, and failure modes that should
//! produce a nonzero exit code without panicking.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

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
fn test_arithmetic_parses_cleanly() {
    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(fixtures_dir().join("arithmetic.zom"));

    cmd.assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn test_control_flow_parses_cleanly() {
    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(fixtures_dir().join("control_flow.zom"));

    cmd.assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn test_functions_file_parses_cleanly() {
    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(fixtures_dir().join("functions.zom"));

    cmd.assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn test_invalid_syntax_fails_without_producing_a_dump() {
    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(fixtures_dir().join("invalid_syntax.zom")).arg("--dump-ast");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_resolves_an_import_across_two_files() {
    let dir = TempDir::new().unwrap();
    let util_path = dir.path().join("util.zom");
    fs::write(&util_path, "export fun helper() -> number { return 1; }\n").unwrap();
    let main_path = dir.path().join("main.zom");
    fs::write(
        &main_path,
        "import { helper } from \"./util\";\nfun main() -> number { return helper(); }\n",
    )
    .unwrap();

    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(&main_path);

    cmd.assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_import_reports_a_diagnostic_and_fails() {
    let dir = TempDir::new().unwrap();
    let main_path = dir.path().join("main.zom");
    fs::write(&main_path, "import { x } from \"./missing\";\n").unwrap();

    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(&main_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot find module"));
}

#[test]
fn test_dependency_cycle_is_reported_and_does_not_hang() {
    let dir = TempDir::new().unwrap();
    let a_path = dir.path().join("a.zom");
    let b_path = dir.path().join("b.zom");
    fs::write(
        &a_path,
        "import { bFn } from \"./b\";\nexport fun aFn() -> number { return 1; }\n",
    )
    .unwrap();
    fs::write(
        &b_path,
        "import { aFn } from \"./a\";\nexport fun bFn() -> number { return 2; }\n",
    )
    .unwrap();

    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(&a_path).timeout(std::time::Duration::from_secs(10));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("dependency cycle"));
}

#[test]
fn test_search_path_resolves_a_sibling_library() {
    let dir = TempDir::new().unwrap();
    let lib_dir = dir.path().join("lib");
    fs::create_dir(&lib_dir).unwrap();
    fs::write(
        lib_dir.join("shared.zom"),
        "export fun id() -> number { return 0; }\n",
    )
    .unwrap();

    let main_path = dir.path().join("main.zom");
    fs::write(
        &main_path,
        "import { id } from \"shared\";\nfun main() -> number { return id(); }\n",
    )
    .unwrap();

    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(&main_path).arg("-I").arg(&lib_dir);

    cmd.assert().success();
}

#[test]
fn test_warnings_as_errors_flag_is_accepted() {
    let mut cmd = Command::new(zomlc_bin());
    cmd.arg(fixtures_dir().join("hello_world.zom"))
        .arg("--warnings-as-errors");

    cmd.assert().success();
}
