//! Edge case integration tests for `zomlc-driver`'s public API.

use std::fs;
use std::path::PathBuf;

use zomlc_driver::{
    CompilerDriver, CompilerOptions, DriverError, LangOptions, ModuleKind, ProjectConfig,
};

// ==================== LANG OPTIONS / COMPILER OPTIONS ====================

#[test]
fn test_edge_default_lang_options() {
    let opts = LangOptions::default();
    assert!(opts.use_unicode);
    assert!(!opts.allow_dollar_identifiers);
    assert!(opts.support_regex_literals);
}

#[test]
fn test_edge_default_compiler_options() {
    let opts = CompilerOptions::default();
    assert!(!opts.emission.dump_ast);
    assert!(!opts.diagnostics.warnings_as_errors);
    assert!(opts.diagnostics.max_errors.is_none());
}

// ==================== DRIVER: EMPTY / TRIVIAL INPUT ====================

#[test]
fn test_edge_no_sources_parses_trivially() {
    let mut driver = CompilerDriver::new(LangOptions::default());
    assert!(driver.parse_sources());
    assert_eq!(driver.modules().len(), 0);
}

#[test]
fn test_edge_empty_file_parses_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.zom");
    fs::write(&path, "").unwrap();

    let mut driver = CompilerDriver::new(LangOptions::default());
    let id = driver.add_source_file(&path).unwrap();
    assert!(driver.parse_sources());
    assert!(driver.parsed_source_file(id).is_some());
}

#[test]
fn test_edge_whitespace_only_file_parses_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ws.zom");
    fs::write(&path, "   \n\t  \n  ").unwrap();

    let mut driver = CompilerDriver::new(LangOptions::default());
    let id = driver.add_source_file(&path).unwrap();
    assert!(driver.parse_sources());
    assert!(driver.parsed_source_file(id).is_some());
}

// ==================== DRIVER: MULTIPLE ROOT FILES ====================

#[test]
fn test_edge_multiple_independent_roots() {
    let dir = tempfile::tempdir().unwrap();
    let mut driver = CompilerDriver::new(LangOptions::default());

    for i in 0..5 {
        let path = dir.path().join(format!("file{i}.zom"));
        fs::write(&path, format!("fun f{i}() -> number {{ return {i}; }}")).unwrap();
        driver.add_source_file(&path).unwrap();
    }

    assert!(driver.parse_sources());
    assert_eq!(driver.modules().len(), 5);
    for (_, module) in driver.modules().iter_enumerated() {
        assert_eq!(module.kind, ModuleKind::Executable);
    }
}

// ==================== DRIVER: ERROR CASES ====================

#[test]
fn test_err_invalid_source_reports_a_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invalid.zom");
    fs::write(&path, "@#$%^&*").unwrap();

    let mut driver = CompilerDriver::new(LangOptions::default());
    driver.add_source_file(&path).unwrap();

    assert!(!driver.parse_sources());
    assert!(driver.get_diagnostic_engine().had_any_error());
}

#[test]
fn test_err_unterminated_string_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.zom");
    fs::write(&path, "fun main() -> number { let x = \"unterminated; }").unwrap();

    let mut driver = CompilerDriver::new(LangOptions::default());
    driver.add_source_file(&path).unwrap();

    assert!(!driver.parse_sources());
    assert!(driver.get_diagnostic_engine().had_any_error());
}

#[test]
fn test_err_missing_closing_brace_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.zom");
    fs::write(&path, "fun main() -> number { let x = 1;").unwrap();

    let mut driver = CompilerDriver::new(LangOptions::default());
    driver.add_source_file(&path).unwrap();

    assert!(!driver.parse_sources());
    assert!(driver.get_diagnostic_engine().had_any_error());
}

#[test]
fn test_err_adding_a_nonexistent_file_is_a_result_error() {
    let mut driver = CompilerDriver::new(LangOptions::default());
    let result = driver.add_source_file("/does/not/exist.zom");
    assert!(matches!(result, Err(DriverError::SourceMap(_))));
}

// ==================== PROJECT CONFIG ====================

#[test]
fn test_edge_missing_project_config_is_a_read_error() {
    let result = ProjectConfig::load("/does/not/exist/zomlc.toml");
    assert!(matches!(result, Err(DriverError::ConfigReadFailed { .. })));
}

#[test]
fn test_edge_malformed_project_config_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zomlc.toml");
    fs::write(&path, "this is not valid toml [[[").unwrap();

    let result = ProjectConfig::load(&path);
    assert!(matches!(result, Err(DriverError::ConfigParseFailed { .. })));
}

#[test]
fn test_edge_config_defaults_fill_in_missing_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zomlc.toml");
    fs::write(&path, "").unwrap();

    let config = ProjectConfig::load(&path).unwrap();
    assert_eq!(config.lang, LangOptions::default());
}

// ==================== MODULE LOADER ====================

#[test]
fn test_edge_search_paths_accumulate_in_order() {
    let mut driver = CompilerDriver::new(LangOptions::default());
    driver.module_loader_mut().add_search_path("/a", false);
    driver.module_loader_mut().add_search_path("/b", true);

    let paths: Vec<PathBuf> = driver
        .module_loader_mut()
        .search_paths()
        .iter()
        .map(|sp| sp.path.clone())
        .collect();
    assert_eq!(paths, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
}
