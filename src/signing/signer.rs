//! Detached signing of file contents.

use super::{signature_path, Digest, Signature};
use crate::error::{Error, Result};
use crate::keys::PrivateKey;
use rsa::Pkcs1v15Sign;
use sha2::Sha256;
use std::path::{Path, PathBuf};

/// Signs the SHA-256 digest of `file_bytes` with PKCS#1 v1.5 padding.
///
/// Deterministic: the same bytes and key always give the same signature.
pub fn sign(file_bytes: &[u8], key: &PrivateKey) -> Result<Signature> {
    let digest = Digest::of(file_bytes);

    let signature = key
        .as_rsa()
        .sign(Pkcs1v15Sign::new::<Sha256>(), digest.as_bytes())
        .map_err(|e| Error::InvalidKey(format!("private key cannot sign: {}", e)))?;

    tracing::debug!(
        digest = %digest.to_hex(),
        signature_len = signature.len(),
        "Signed digest"
    );

    Ok(Signature::from(signature))
}

/// Signs a file and writes the detached signature next to it.
///
/// Returns the path of the written `.sig` file.
pub fn sign_file(path: impl AsRef<Path>, key: &PrivateKey) -> Result<PathBuf> {
    let path = path.as_ref();
    let sig_path = signature_path(path);
    if sig_path == path {
        return Err(Error::SignaturePathCollision(sig_path));
    }

    let data = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let signature = sign(&data, key)?;

    std::fs::write(&sig_path, signature.as_bytes()).map_err(|e| Error::io(&sig_path, e))?;

    tracing::info!(
        file = %path.display(),
        signature = %sig_path.display(),
        bytes = data.len(),
        "File signed"
    );

    Ok(sig_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyPair;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;
    use rsa::RsaPrivateKey;

    fn test_key() -> PrivateKey {
        let mut rng = ChaCha20Rng::from_seed([9; 32]);
        KeyPair::from_private(RsaPrivateKey::new(&mut rng, 1024).unwrap().into())
            .into_parts()
            .1
    }

    #[test]
    fn test_signature_is_modulus_sized_and_deterministic() {
        let key = test_key();
        let a = sign(b"hello world", &key).unwrap();
        let b = sign(b"hello world", &key).unwrap();

        assert_eq!(a.len(), 128);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sign_file_writes_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("note.txt");
        std::fs::write(&file, b"0123456789").unwrap();

        let key = test_key();
        let sig_path = sign_file(&file, &key).unwrap();

        assert_eq!(sig_path, dir.path().join("note.sig"));
        let written = std::fs::read(&sig_path).unwrap();
        assert_eq!(written, sign(b"0123456789", &key).unwrap().into_vec());
    }

    #[test]
    fn test_missing_file_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let result = sign_file(dir.path().join("absent.txt"), &test_key());
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_signing_a_sig_file_refused() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("old.sig");
        std::fs::write(&file, b"data").unwrap();

        let result = sign_file(&file, &test_key());
        assert!(matches!(result, Err(Error::SignaturePathCollision(_))));
        assert_eq!(std::fs::read(&file).unwrap(), b"data");
    }
}
