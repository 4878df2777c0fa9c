//! Least-significant-bit sampling of pixel intensities.
//!
//! The low bit of a mid-range intensity is dominated by sensor noise.
//! Pixels near black or white are excluded because clipping biases
//! their low bits.

/// Derives candidate bits from one image's intensities.
#[derive(Debug, Clone, Copy)]
pub struct LsbSampler {
    /// Lowest qualifying intensity (inclusive).
    min: u8,
    /// Highest qualifying intensity (inclusive).
    max: u8,
}

impl LsbSampler {
    pub fn new() -> Self {
        Self { min: 3, max: 252 }
    }

    /// Creates a sampler with a custom intensity window.
    pub fn with_window(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Returns true if the intensity lies inside the window.
    #[inline]
    pub fn qualifies(&self, intensity: u8) -> bool {
        (self.min..=self.max).contains(&intensity)
    }

    /// Samples one image.
    ///
    /// Every qualifying pixel contributes its low bit. With `flip` set the
    /// whole contribution is XORed with 1, which alternates polarity
    /// between neighbouring images in the corpus.
    pub fn sample(&self, pixels: &[u8], flip: bool) -> Vec<u8> {
        let mask = u8::from(flip);
        pixels
            .iter()
            .filter(|&&p| self.qualifies(p))
            .map(|&p| (p & 1) ^ mask)
            .collect()
    }
}

impl Default for LsbSampler {
    fn default() -> Self {
        Self::new()
    }
}
