//! Error types for seeding, key handling, and signing.
//!
//! A signature that fails to verify is not an error: verification
//! reports it as `Ok(false)`. The variants here mean an operation could
//! not be carried out at all.

use crate::source::ConfigError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving keys, signing, or verifying.
#[derive(Debug, Error)]
pub enum Error {
    #[error("insufficient entropy: got {got} bits, need {need} bits")]
    InsufficientEntropy { got: usize, need: usize },

    #[error("key generation failed: {0}")]
    KeyGenerationFailed(#[source] rsa::Error),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("signature path {} would overwrite the signed file", .0.display())]
    SignaturePathCollision(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Wraps an I/O error with the path it occurred on.
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = Error::io(
            "missing.pem",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let message = err.to_string();
        assert!(message.contains("missing.pem"));
        assert!(message.contains("gone"));
    }

    #[test]
    fn test_insufficient_entropy_message() {
        let err = Error::InsufficientEntropy { got: 0, need: 1 };
        assert_eq!(
            err.to_string(),
            "insufficient entropy: got 0 bits, need 1 bits"
        );
    }
}
