//! Image corpus configuration.
//!
//! The pixel window and enumeration order both change the resulting
//! bit sequence, so they are pinned in configuration rather than
//! chosen per call.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Order in which corpus files are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnumerationOrder {
    /// Whatever order the file system lists entries in.
    ///
    /// Not portable across platforms or file systems.
    #[default]
    Listing,
    /// Sorted by file name, reproducible anywhere.
    ByName,
}

/// Configuration for the photograph corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Directory holding the photographs.
    pub directory: PathBuf,
    /// Target number of entropy bits.
    pub num_needed: usize,
    /// File visiting order.
    pub order: EnumerationOrder,
    /// Lowest intensity that contributes a bit.
    pub pixel_min: u8,
    /// Highest intensity that contributes a bit.
    pub pixel_max: u8,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("photo_dump"),
            num_needed: 3000,
            order: EnumerationOrder::Listing,
            // Values near 0 and 255 are likely sensor saturation.
            pixel_min: 3,
            pixel_max: 252,
        }
    }
}

impl SourceConfig {
    /// Creates a configuration reading from the given directory.
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pixel_min > self.pixel_max {
            return Err(ConfigError::InvalidPixelWindow {
                min: self.pixel_min,
                max: self.pixel_max,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid pixel window: min {min} is above max {max}")]
    InvalidPixelWindow { min: u8, max: u8 },
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = SourceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_needed, 3000);
        assert_eq!(config.directory, PathBuf::from("photo_dump"));
    }

    #[test]
    fn test_inverted_window_invalid() {
        let config = SourceConfig {
            pixel_min: 200,
            pixel_max: 100,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPixelWindow { min: 200, max: 100 })
        ));
    }

    #[test]
    fn test_order_parses_kebab_case() {
        let config: SourceConfig = toml::from_str("order = \"by-name\"").unwrap();
        assert_eq!(config.order, EnumerationOrder::ByName);
        assert_eq!(config.pixel_max, 252);
    }
}
