//! Bit harvesting from photographs.
//!
//! This module converts decoded photographs into an ordered bit
//! sequence of a requested length. Each image contributes the low bits
//! of its mid-range pixels, with polarity alternating by position in
//! the corpus to reduce inter-image bias.

mod bitstream;
mod lsb;

pub use bitstream::EntropyBatch;
pub use lsb::LsbSampler;

use crate::source::{DecodeOutcome, ImageSource, SourceConfig};
use std::time::Instant;

/// Extracts a bounded bit sequence from an image source.
pub struct Extractor {
    sampler: LsbSampler,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            sampler: LsbSampler::new(),
        }
    }

    /// Creates an extractor using the pixel window from configuration.
    pub fn from_config(config: &SourceConfig) -> Self {
        Self {
            sampler: LsbSampler::with_window(config.pixel_min, config.pixel_max),
        }
    }

    /// Extracts up to `num_needed` bits, visiting images in source order.
    ///
    /// Stops loading images once enough bits are collected and trims the
    /// final image's overshoot. The result is shorter than requested only
    /// when the source runs out of qualifying pixels.
    pub fn extract(&self, source: &dyn ImageSource, num_needed: usize) -> EntropyBatch {
        let started = Instant::now();
        let mut batch = EntropyBatch::new();
        let mut skipped = 0usize;

        for index in 0..source.image_count() {
            if batch.len() >= num_needed {
                break;
            }

            let image = match source.load(index) {
                DecodeOutcome::Decoded(image) => image,
                DecodeOutcome::Skipped { reason } => {
                    tracing::debug!(index, %reason, "Skipping undecodable image");
                    skipped += 1;
                    continue;
                }
            };

            // Polarity follows the enumeration position, skipped entries included.
            let flip = index % 2 == 0;
            let bits = self.sampler.sample(image.pixels(), flip);
            batch.extend_from_image(&bits);

            tracing::trace!(
                index,
                width = image.width(),
                height = image.height(),
                contributed = bits.len(),
                total = batch.len(),
                "Extracted bits from image"
            );
        }

        batch.truncate(num_needed);

        tracing::info!(
            bits = batch.len(),
            requested = num_needed,
            images = batch.source_images(),
            skipped,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Entropy extraction finished"
        );

        if batch.len() < num_needed {
            tracing::warn!(
                bits = batch.len(),
                requested = num_needed,
                "Image corpus exhausted before reaching requested bit count"
            );
        }

        batch
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
