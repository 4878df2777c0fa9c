//! TOML configuration file.
//!
//! ```toml
//! [source]
//! directory = "photo_dump"
//! num_needed = 3000
//! order = "by-name"
//!
//! [keys]
//! private_key = "private_key.pem"
//! public_key = "public_key.pem"
//!
//! [analysis]
//! max_bit_bias = 0.05
//! ```

use crate::analysis::QualityThresholds;
use crate::keys::KeyConfig;
use crate::source::{ConfigError, SourceConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub keys: KeyConfig,
    #[serde(default)]
    pub analysis: QualityThresholds,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.source.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EnumerationOrder;
    use std::path::PathBuf;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FileConfig::from_toml("").unwrap();
        assert_eq!(config.source.num_needed, 3000);
        assert_eq!(config.keys.private_key, PathBuf::from("private_key.pem"));
    }

    #[test]
    fn test_sections_override() {
        let config = FileConfig::from_toml(
            r#"
            [source]
            directory = "/data/photos"
            num_needed = 4096
            order = "by-name"

            [keys]
            public_key = "keys/pub.pem"
            "#,
        )
        .unwrap();

        assert_eq!(config.source.directory, PathBuf::from("/data/photos"));
        assert_eq!(config.source.num_needed, 4096);
        assert_eq!(config.source.order, EnumerationOrder::ByName);
        assert_eq!(config.keys.public_key, PathBuf::from("keys/pub.pem"));
        assert_eq!(config.keys.private_key, PathBuf::from("private_key.pem"));
    }

    #[test]
    fn test_invalid_window_rejected() {
        let result = FileConfig::from_toml("[source]\npixel_min = 200\npixel_max = 10\n");
        assert!(matches!(result, Err(ConfigError::InvalidPixelWindow { .. })));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            FileConfig::from_toml("[source"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            FileConfig::from_file(dir.path().join("absent.toml")),
            Err(ConfigError::FileReadError(_))
        ));
    }
}
