//! Seed derivation and the seeded key generator.
//!
//! This module turns an entropy batch into an integer seed and uses it
//! to initialize the ChaCha20 generator that drives key generation.

mod rng;
mod seed;

pub use rng::{KeyRng, SeedMode};
pub use seed::Seed;
