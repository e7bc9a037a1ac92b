//! Optional `zomlc.toml` project configuration file, supplying defaults for
//! [`LangOptions`]/[`CompilerOptions`] that the CLI falls back to when a flag
//! wasn't passed explicitly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DriverError, DriverResult};
use crate::options::{CompilerOptions, LangOptions};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub lang: LangOptions,
    pub compiler: CompilerOptions,
}

impl ProjectConfig {
    pub fn load(path: impl AsRef<Path>) -> DriverResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DriverError::ConfigReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| DriverError::ConfigParseFailed {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_partial_config_and_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("zomlc.toml");
        std::fs::write(
            &config_path,
            r#"
            [lang]
            allow_dollar_identifiers = true

            [compiler.diagnostics]
            warnings_as_errors = true
            "#,
        )
        .unwrap();

        let config = ProjectConfig::load(&config_path).unwrap();
        assert!(config.lang.allow_dollar_identifiers);
        assert!(config.lang.use_unicode);
        assert!(config.compiler.diagnostics.warnings_as_errors);
    }

    #[test]
    fn missing_config_file_is_a_read_error() {
        let result = ProjectConfig::load("/does/not/exist/zomlc.toml");
        assert!(matches!(result, Err(DriverError::ConfigReadFailed { .. })));
    }
}
