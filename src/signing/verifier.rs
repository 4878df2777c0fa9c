//! Verification of detached signatures.
//!
//! A verification that runs to completion yields a plain boolean. Only
//! failures that prevent the check from running at all (unreadable
//! input file, malformed public key) surface as errors.

use super::Digest;
use crate::error::{Error, Result};
use crate::keys::{load_public_key, PublicKey};
use rsa::Pkcs1v15Sign;
use sha2::Sha256;
use std::path::Path;

/// Checks `signature` against the SHA-256 digest of `file_bytes`.
///
/// Returns false for any mismatch: altered bytes, a different key, or
/// a corrupted or truncated signature.
pub fn verify(file_bytes: &[u8], key: &PublicKey, signature: &[u8]) -> bool {
    let digest = Digest::of(file_bytes);

    match key
        .as_rsa()
        .verify(Pkcs1v15Sign::new::<Sha256>(), digest.as_bytes(), signature)
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(digest = %digest.to_hex(), reason = %e, "Signature mismatch");
            false
        }
    }
}

/// Verifies a file against a detached signature and a public key file.
///
/// A missing signature file yields `Ok(false)`.
pub fn verify_file(
    file_path: impl AsRef<Path>,
    public_key_path: impl AsRef<Path>,
    signature_path: impl AsRef<Path>,
) -> Result<bool> {
    let file_path = file_path.as_ref();
    let data = std::fs::read(file_path).map_err(|e| Error::io(file_path, e))?;
    let key = load_public_key(public_key_path)?;

    verify_loaded(file_path, &data, &key, signature_path.as_ref())
}

/// Verifies a file against a detached signature with an already loaded key.
pub fn verify_file_with_key(
    file_path: impl AsRef<Path>,
    key: &PublicKey,
    signature_path: impl AsRef<Path>,
) -> Result<bool> {
    let file_path = file_path.as_ref();
    let data = std::fs::read(file_path).map_err(|e| Error::io(file_path, e))?;

    verify_loaded(file_path, &data, key, signature_path.as_ref())
}

fn verify_loaded(
    file_path: &Path,
    data: &[u8],
    key: &PublicKey,
    signature_path: &Path,
) -> Result<bool> {
    let signature = match std::fs::read(signature_path) {
        Ok(signature) => signature,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(
                signature = %signature_path.display(),
                "Signature file not found, treating as invalid"
            );
            return Ok(false);
        }
        Err(e) => return Err(Error::io(signature_path, e)),
    };

    let valid = verify(data, key, &signature);

    tracing::info!(
        file = %file_path.display(),
        signature = %signature_path.display(),
        valid,
        "Signature checked"
    );

    Ok(valid)
}
