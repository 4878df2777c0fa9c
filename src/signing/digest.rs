//! SHA-256 content digests and detached signature values.

use sha2::{Digest as _, Sha256};
use std::path::{Path, PathBuf};

/// Extension given to detached signature files.
pub const SIGNATURE_EXTENSION: &str = "sig";

/// SHA-256 digest of a file's raw bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Hashes the given bytes.
    pub fn of(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// Raw signature bytes, stored without header or metadata.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Signature {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signature").field("len", &self.0.len()).finish()
    }
}

/// Sibling path of the detached signature for `path`.
///
/// The extension is replaced by `.sig`: `report.pdf` becomes `report.sig`,
/// and a name without an extension simply gains one.
pub fn signature_path(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().with_extension(SIGNATURE_EXTENSION)
}
