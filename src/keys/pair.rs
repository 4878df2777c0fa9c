//! RSA key pair types and their PEM encodings.
//!
//! Private keys are written as PKCS#1 (`RSA PRIVATE KEY`) and public
//! keys as SubjectPublicKeyInfo (`PUBLIC KEY`). Loading also accepts
//! PKCS#8 private keys and PKCS#1 public keys.

use crate::error::{Error, Result};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

/// Shareable half of a key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(RsaPublicKey);

impl PublicKey {
    /// Parses a PEM public key (SPKI or PKCS#1).
    pub fn from_pem(pem: &str) -> Result<Self> {
        RsaPublicKey::from_public_key_pem(pem)
            .or_else(|spki_err| {
                RsaPublicKey::from_pkcs1_pem(pem).map_err(|pkcs1_err| {
                    Error::InvalidKey(format!(
                        "unreadable public key (spki: {}, pkcs1: {})",
                        spki_err, pkcs1_err
                    ))
                })
            })
            .map(Self)
    }

    /// Encodes as a SubjectPublicKeyInfo PEM document.
    pub fn to_pem(&self) -> Result<String> {
        self.0
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| Error::InvalidKey(format!("cannot encode public key: {}", e)))
    }

    /// Returns the modulus size in bits.
    pub fn size_bits(&self) -> usize {
        self.0.size() * 8
    }

    pub(crate) fn as_rsa(&self) -> &RsaPublicKey {
        &self.0
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(key: RsaPublicKey) -> Self {
        Self(key)
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicKey")
            .field("size_bits", &self.size_bits())
            .finish()
    }
}

/// Secret half of a key pair.
#[derive(Clone)]
pub struct PrivateKey(RsaPrivateKey);

impl PrivateKey {
    /// Parses a PEM private key (PKCS#1 or PKCS#8) and checks its consistency.
    pub fn from_pem(pem: &str) -> Result<Self> {
        let key = RsaPrivateKey::from_pkcs1_pem(pem).or_else(|pkcs1_err| {
            RsaPrivateKey::from_pkcs8_pem(pem).map_err(|pkcs8_err| {
                Error::InvalidKey(format!(
                    "unreadable private key (pkcs1: {}, pkcs8: {})",
                    pkcs1_err, pkcs8_err
                ))
            })
        })?;

        key.validate()
            .map_err(|e| Error::InvalidKey(format!("inconsistent private key: {}", e)))?;

        Ok(Self(key))
    }

    /// Encodes as a PKCS#1 PEM document.
    pub fn to_pem(&self) -> Result<String> {
        self.0
            .to_pkcs1_pem(LineEnding::LF)
            .map(|pem| pem.as_str().to_owned())
            .map_err(|e| Error::InvalidKey(format!("cannot encode private key: {}", e)))
    }

    /// Derives the matching public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.to_public_key())
    }

    /// Returns the modulus size in bits.
    pub fn size_bits(&self) -> usize {
        self.0.size() * 8
    }

    pub(crate) fn as_rsa(&self) -> &RsaPrivateKey {
        &self.0
    }
}

impl From<RsaPrivateKey> for PrivateKey {
    fn from(key: RsaPrivateKey) -> Self {
        Self(key)
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("size_bits", &self.size_bits())
            .finish_non_exhaustive()
    }
}

/// Matching public and private keys.
#[derive(Debug, Clone)]
pub struct KeyPair {
    public: PublicKey,
    private: PrivateKey,
}

impl KeyPair {
    /// Builds a pair from a private key.
    pub fn from_private(private: PrivateKey) -> Self {
        Self {
            public: private.public_key(),
            private,
        }
    }

    /// Builds a pair from separately loaded halves.
    ///
    /// Fails with `InvalidKey` if they do not belong together.
    pub fn from_parts(public: PublicKey, private: PrivateKey) -> Result<Self> {
        if private.public_key() != public {
            return Err(Error::InvalidKey(
                "public key does not match private key".to_string(),
            ));
        }
        Ok(Self { public, private })
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    pub fn private(&self) -> &PrivateKey {
        &self.private
    }

    /// Splits into (public, private).
    pub fn into_parts(self) -> (PublicKey, PrivateKey) {
        (self.public, self.private)
    }
}
