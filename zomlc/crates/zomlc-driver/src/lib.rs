//! Compiler driver for ZomLang: owns a `SourceManager`/`DiagnosticEngine`
//! pair and turns a set of source files into parsed ASTs, resolving
//! `import` declarations against a set of module search paths along the
//! way.
//!
//! This crate stops at parsing - there is no semantic analysis, lowering,
//! or code generation here. [`driver::CompilerDriver`] is the entry point:
//! add source files with [`driver::CompilerDriver::add_source_file`], then
//! call [`driver::CompilerDriver::parse_sources`] to lex and parse
//! everything (including transitively imported modules) and check
//! [`driver::CompilerDriver::get_diagnostic_engine`] for the result.
//!
//! # Examples
//!
//! ```
//! use zomlc_driver::{CompilerDriver, LangOptions};
//! use std::io::Write;
//!
//! let mut file = tempfile::NamedTempFile::with_suffix(".zom").unwrap();
//! writeln!(file, "fun main() -> number {{ return 0; }}").unwrap();
//!
//! let mut driver = CompilerDriver::new(LangOptions::default());
//! let buffer_id = driver.add_source_file(file.path()).unwrap();
//! assert!(driver.parse_sources());
//! assert!(driver.parsed_source_file(buffer_id).is_some());
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod module;
pub mod options;

pub use config::ProjectConfig;
pub use driver::{perform_parse, CompilerDriver};
pub use error::{DriverError, DriverResult};
pub use module::{Module, ModuleFile, ModuleId, ModuleKind, ModuleLoader, ModulePhase, SearchPath};
pub use options::{
    CompilerOptions, DiagnosticOptions, DumpFormatConfig, EmissionOptions, LangOptions,
    OptLevel, OptimizationOptions,
};
