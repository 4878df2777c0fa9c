//! Seed derivation from an entropy batch.

use crate::error::{Error, Result};
use crate::extraction::EntropyBatch;

/// Integer seed formed by reading a batch as a big-endian binary numeral.
///
/// Stored as minimal big-endian bytes, so batches that differ only in
/// leading zero bits denote the same seed and compare equal. Not `Clone`:
/// a seed initializes exactly one generator.
pub struct Seed {
    /// Big-endian magnitude with leading zero bytes stripped.
    value: Vec<u8>,
    /// Length of the batch the seed was read from.
    source_bits: usize,
}

impl Seed {
    /// Interprets the batch as an unsigned big-endian binary numeral.
    ///
    /// An empty batch has no numeral value and is rejected.
    pub fn from_batch(batch: &EntropyBatch) -> Result<Self> {
        if batch.is_empty() {
            return Err(Error::InsufficientEntropy { got: 0, need: 1 });
        }

        let bits = batch.bits();
        let pad = (8 - bits.len() % 8) % 8;

        let mut value: Vec<u8> = std::iter::repeat(0u8)
            .take(pad)
            .chain(bits.iter().copied())
            .collect::<Vec<u8>>()
            .chunks_exact(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit))
            .collect();

        let leading = value.iter().take_while(|&&b| b == 0).count();
        value.drain(..leading);

        Ok(Self {
            value,
            source_bits: bits.len(),
        })
    }

    /// Returns the big-endian magnitude. Zero is the empty slice.
    #[inline]
    pub fn as_be_bytes(&self) -> &[u8] {
        &self.value
    }

    /// Returns the number of bits in the originating batch.
    #[inline]
    pub fn source_bits(&self) -> usize {
        self.source_bits
    }

    /// Returns the position of the highest set bit, or 0 for a zero seed.
    pub fn significant_bits(&self) -> usize {
        match self.value.first() {
            Some(&top) => (self.value.len() - 1) * 8 + (8 - top.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Returns true if every source bit was zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_empty()
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Seed {}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seed")
            .field("source_bits", &self.source_bits)
            .finish_non_exhaustive()
    }
}
