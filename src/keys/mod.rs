//! RSA key pair generation and persistence.
//!
//! Keys are generated once from a photograph seed, stored as PEM files,
//! and loaded on demand for signing and verification.

mod generator;
mod pair;
mod store;

pub use generator::{generate_from_source, KeyPairGenerator, MODULUS_BITS};
pub use pair::{KeyPair, PrivateKey, PublicKey};
pub use store::{load_private_key, load_public_key, KeyConfig, KeyStore};
