//! Seed-scoped ChaCha20 generator for key generation.
//!
//! # Mixing Model
//!
//! The generator key is derived with BLAKE3 over:
//! - A domain separator
//! - Fresh OS entropy (production path only)
//! - The photograph seed
//!
//! The photograph seed supplements the operating system's entropy
//! source; it never replaces it outside of tests. A weak or guessable
//! image corpus therefore cannot make the resulting keys predictable.

use super::Seed;
use blake3::Hasher;
use rand_chacha::ChaCha20Rng;
use rand_core::{CryptoRng, RngCore, SeedableRng};

/// Domain separator for key generator derivation.
const KEYGEN_DOMAIN: &[u8] = b"photo-entropy-keygen-v1";

/// How the seed is combined into the generator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedMode {
    /// Seed mixed with fresh OS entropy.
    #[default]
    Supplemented,
    /// Seed alone; identical seeds reproduce identical keys.
    Deterministic,
}

/// ChaCha20 generator initialized from a photograph seed.
///
/// The seed is passed in explicitly and consumed, so its influence is
/// confined to this one generator instead of process-wide state.
pub struct KeyRng {
    /// The underlying ChaCha20 CSPRNG.
    inner: ChaCha20Rng,
    /// How the seed was applied.
    mode: SeedMode,
    /// Bytes generated since construction.
    bytes_generated: u64,
}

impl KeyRng {
    /// Creates a generator in the given mode.
    pub fn new(seed: Seed, mode: SeedMode) -> Self {
        match mode {
            SeedMode::Supplemented => Self::supplemented(seed),
            SeedMode::Deterministic => Self::deterministic(seed),
        }
    }

    /// Mixes the seed with 32 bytes of OS entropy.
    ///
    /// This is the recommended way to drive key generation.
    pub fn supplemented(seed: Seed) -> Self {
        let mut os_entropy = [0u8; 32];
        rand_core::OsRng.fill_bytes(&mut os_entropy);

        // key = BLAKE3(domain || mode || os_entropy || seed)
        let mut hasher = Hasher::new();
        hasher.update(KEYGEN_DOMAIN);
        hasher.update(b"supplemented");
        hasher.update(&os_entropy);
        hasher.update(seed.as_be_bytes());

        Self::from_key(*hasher.finalize().as_bytes(), SeedMode::Supplemented, &seed)
    }

    /// Derives the generator from the seed alone.
    ///
    /// Reproducible, and only as unpredictable as the photographs are.
    /// Intended for testing and audits, not for production keys.
    pub fn deterministic(seed: Seed) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(KEYGEN_DOMAIN);
        hasher.update(b"deterministic");
        hasher.update(seed.as_be_bytes());

        Self::from_key(*hasher.finalize().as_bytes(), SeedMode::Deterministic, &seed)
    }

    fn from_key(key: [u8; 32], mode: SeedMode, seed: &Seed) -> Self {
        tracing::debug!(
            ?mode,
            seed_bits = seed.source_bits(),
            "Key generator initialized from photograph seed"
        );

        Self {
            inner: ChaCha20Rng::from_seed(key),
            mode,
            bytes_generated: 0,
        }
    }

    /// Returns how the seed was applied.
    pub fn mode(&self) -> SeedMode {
        self.mode
    }

    /// Returns bytes generated so far.
    pub fn bytes_generated(&self) -> u64 {
        self.bytes_generated
    }
}

impl RngCore for KeyRng {
    fn next_u32(&mut self) -> u32 {
        self.bytes_generated += 4;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.bytes_generated += 8;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.bytes_generated += dest.len() as u64;
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.bytes_generated += dest.len() as u64;
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for KeyRng {}
