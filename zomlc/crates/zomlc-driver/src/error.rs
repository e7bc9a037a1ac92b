//! Driver-level error types, following the style of `zomlc_util::error`.

use std::path::PathBuf;

use thiserror::Error;

/// Ambient failures the driver can hit outside of diagnostics: reading a
/// project configuration file, or I/O errors while adding a source file.
/// Diagnosable front-end failures (lexical/syntactic errors, missing
/// modules, dependency cycles) are reported through the `DiagnosticEngine`
/// instead, per this crate's error-handling design.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    SourceMap(#[from] zomlc_util::error::SourceMapError),

    #[error("failed to read project config '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse project config '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type DriverResult<T> = std::result::Result<T, DriverError>;
