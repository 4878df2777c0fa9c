//! Photograph Entropy Signing Library
//!
//! Derives seed material for RSA key generation from the sensor noise
//! in a corpus of photographs, and signs and verifies files with
//! detached signatures.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! source → extraction → seeding → keys → signing
//!               ↓
//!           analysis (sanity statistics)
//! ```
//!
//! # Design Principles
//!
//! - **Supplements OS entropy**: the photograph seed is mixed with OS
//!   randomness before key generation, never substituted for it
//! - **Best-effort source**: unreadable images are skipped, not fatal
//! - **Explicit seeding**: the seed is passed to the key generator, no
//!   process-wide generator is touched
//! - **Clean verdicts**: a bad signature is `Ok(false)`, errors mean the
//!   check could not run
//!
//! # Example
//!
//! ```no_run
//! use photo_entropy_sign::{
//!     analysis::QualityThresholds,
//!     keys::{generate_from_source, KeyStore},
//!     seeding::SeedMode,
//!     signing::{sign_file, verify_file},
//!     source::{ImageCorpus, SourceConfig},
//! };
//!
//! let config = SourceConfig::default();
//! let corpus = ImageCorpus::open(&config.directory, config.order);
//! let store = KeyStore::default();
//!
//! let pair = store
//!     .load_or_generate(|| {
//!         generate_from_source(
//!             &corpus,
//!             &config,
//!             &QualityThresholds::default(),
//!             SeedMode::Supplemented,
//!         )
//!     })
//!     .unwrap();
//!
//! let sig_path = sign_file("contract.pdf", pair.private()).unwrap();
//! let valid = verify_file("contract.pdf", store.public_path(), &sig_path).unwrap();
//! assert!(valid);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod extraction;
pub mod keys;
pub mod seeding;
pub mod signing;
pub mod source;

// Re-export commonly used types at crate root
pub use analysis::{QualityThresholds, StatisticalTests};
pub use config::FileConfig;
pub use error::{Error, Result};
pub use extraction::{EntropyBatch, Extractor};
pub use keys::{KeyPair, KeyPairGenerator, KeyStore, PrivateKey, PublicKey};
pub use seeding::{KeyRng, Seed, SeedMode};
pub use signing::{sign, sign_file, verify, verify_file, Digest, Signature};
pub use source::{EnumerationOrder, ImageCorpus, ImageSource, SourceConfig};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
