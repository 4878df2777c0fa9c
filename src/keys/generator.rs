//! RSA key pair generation driven by photograph entropy.

use super::KeyPair;
use crate::analysis::{QualityThresholds, StatisticalTests};
use crate::error::{Error, Result};
use crate::extraction::Extractor;
use crate::seeding::{KeyRng, Seed, SeedMode};
use crate::source::{ImageSource, SourceConfig};
use rsa::RsaPrivateKey;

/// RSA modulus size for generated keys.
pub const MODULUS_BITS: usize = 2048;

/// Generates one key pair from a seeded generator.
pub struct KeyPairGenerator {
    rng: KeyRng,
    bits: usize,
}

impl KeyPairGenerator {
    /// Creates a generator whose randomness is derived from `seed`.
    pub fn new(seed: Seed, mode: SeedMode) -> Self {
        Self::from_rng(KeyRng::new(seed, mode))
    }

    /// Creates a generator around an existing seeded generator.
    pub fn from_rng(rng: KeyRng) -> Self {
        Self {
            rng,
            bits: MODULUS_BITS,
        }
    }

    /// Overrides the modulus size (smaller keys keep tests fast).
    #[cfg(test)]
    pub(crate) fn with_bits(mut self, bits: usize) -> Self {
        self.bits = bits;
        self
    }

    /// Produces a fresh key pair, consuming the generator.
    pub fn generate(mut self) -> Result<KeyPair> {
        let private = RsaPrivateKey::new(&mut self.rng, self.bits).map_err(|e| {
            tracing::error!(bits = self.bits, error = %e, "RSA key generation rejected");
            Error::KeyGenerationFailed(e)
        })?;

        tracing::info!(
            bits = self.bits,
            mode = ?self.rng.mode(),
            rng_bytes = self.rng.bytes_generated(),
            "Generated RSA key pair"
        );

        Ok(KeyPair::from_private(private.into()))
    }
}

/// Runs the full pipeline: photographs, bits, seed, key pair.
///
/// A batch shorter than requested is accepted with a warning; an empty
/// batch fails with `InsufficientEntropy`. Quality threshold violations
/// are reported but do not block generation, because the seed only
/// supplements OS entropy in the default mode.
pub fn generate_from_source(
    source: &dyn ImageSource,
    config: &SourceConfig,
    thresholds: &QualityThresholds,
    mode: SeedMode,
) -> Result<KeyPair> {
    config.validate()?;

    let batch = Extractor::from_config(config).extract(source, config.num_needed);

    let stats = StatisticalTests::analyze(&batch);
    match thresholds.check(&stats) {
        Ok(()) => tracing::info!(
            bias = stats.bit_bias,
            shannon = stats.shannon_entropy,
            "Entropy batch passed quality checks"
        ),
        Err(violation) => tracing::warn!(
            violation = %violation,
            "Entropy batch failed quality checks"
        ),
    }

    let seed = Seed::from_batch(&batch)?;
    drop(batch);

    KeyPairGenerator::new(seed, mode).generate()
}
