use crate::envelope::{Compat, ValidationMode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Settings for a [`crate::JSend`] bundle.
///
/// ```yaml
/// mode: strict
/// compat:
///   truthy_error_fields: true
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JSendConfig {
    pub mode: ValidationMode,
    pub compat: Compat,
}

impl JSendConfig {
    pub fn lenient() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            mode: ValidationMode::Strict,
            compat: Compat::default(),
        }
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).context("Failed to parse JSend config")
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_yaml_str(&content)?;
        debug!(mode = ?config.mode, compat = ?config.compat, "Loaded JSend config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = JSendConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, JSendConfig::lenient());
    }

    #[test]
    fn test_partial_compat_section() {
        let config = JSendConfig::from_yaml_str(
            "mode: strict\ncompat:\n  truthy_error_fields: true\n",
        )
        .unwrap();

        assert_eq!(config.mode, ValidationMode::Strict);
        assert!(config.compat.truthy_error_fields);
        assert!(!config.compat.legacy_code_check);
        assert!(!config.compat.silent_unclassified_send);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(JSendConfig::from_yaml_str("mode: paranoid").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jsend.yaml");
        std::fs::write(&path, "mode: lenient\ncompat:\n  legacy_code_check: true\n").unwrap();

        let config = JSendConfig::from_yaml_file(&path).unwrap();

        assert_eq!(config.mode, ValidationMode::Lenient);
        assert!(config.compat.legacy_code_check);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = JSendConfig::from_yaml_file("/nonexistent/jsend.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
