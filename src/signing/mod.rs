//! Detached file signatures.
//!
//! A file is hashed with SHA-256 and the digest is signed with RSA
//! PKCS#1 v1.5. The signature is written, bare, to a sibling file whose
//! extension is replaced by `.sig`.

mod digest;
mod signer;
mod verifier;

pub use digest::{signature_path, Digest, Signature, SIGNATURE_EXTENSION};
pub use signer::{sign, sign_file};
pub use verifier::{verify, verify_file, verify_file_with_key};
