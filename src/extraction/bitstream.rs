//! Ordered bit sequence extracted from photographs.

/// Bits extracted from the image corpus.
///
/// This is the output of the extraction stage and input to seeding.
/// Each element is a single bit (0 or 1); order is significant because
/// it fixes the resulting seed value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EntropyBatch {
    /// One bit per element.
    bits: Vec<u8>,
    /// Number of images that contributed.
    source_images: u64,
}

impl EntropyBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a batch from bit values, masking each element to its low bit.
    pub fn from_bits(bits: impl IntoIterator<Item = u8>) -> Self {
        Self {
            bits: bits.into_iter().map(|b| b & 1).collect(),
            source_images: 0,
        }
    }

    /// Appends the bits contributed by one image.
    pub fn extend_from_image(&mut self, bits: &[u8]) {
        self.bits.extend(bits.iter().map(|b| b & 1));
        self.source_images += 1;
    }

    /// Shortens the batch to at most `len` bits.
    pub fn truncate(&mut self, len: usize) {
        self.bits.truncate(len);
    }

    /// Returns the bits in order.
    #[inline]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Returns the number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the number of images that contributed bits.
    #[inline]
    pub fn source_images(&self) -> u64 {
        self.source_images
    }

    /// Counts the number of set bits (for bias analysis).
    pub fn popcount(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Calculates bit bias as deviation from 0.5.
    ///
    /// Returns a value in [-0.5, 0.5] where 0.0 is unbiased.
    pub fn bit_bias(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let ones = self.popcount() as f64;
        let total = self.len() as f64;
        (ones / total) - 0.5
    }

    /// Groups the bits into bytes, most significant bit first.
    ///
    /// A trailing group shorter than 8 bits is dropped.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks_exact(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit))
            .collect()
    }
}

impl std::fmt::Debug for EntropyBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntropyBatch")
            .field("bits", &self.bits.len())
            .field("source_images", &self.source_images)
            .field("bit_bias", &format!("{:.4}", self.bit_bias()))
            .finish()
    }
}
